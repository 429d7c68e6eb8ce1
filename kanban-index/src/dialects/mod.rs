//! Markdown dialects of the index document
//!
//! | Dialect | `indexVersion` | Columns written as                         |
//! |---------|----------------|--------------------------------------------|
//! | v1      | 1 (default)    | `## Column` heading + bullet list of links |
//! | v2      | 2              | one GFM table, a table column per column   |

pub mod common;
pub mod v1;
pub mod v2;

use crate::dialect::Dialect;
use crate::options::IndexVersion;

static V1_DIALECT: v1::V1 = v1::V1;
static V2_DIALECT: v2::V2 = v2::V2;

/// The dialect selected by `version`
pub fn dialect_for(version: IndexVersion) -> &'static dyn Dialect {
    match version {
        IndexVersion::V1 => &V1_DIALECT,
        IndexVersion::V2 => &V2_DIALECT,
    }
}

/// Every supported dialect, oldest first
pub fn all() -> [&'static dyn Dialect; 2] {
    [&V1_DIALECT, &V2_DIALECT]
}
