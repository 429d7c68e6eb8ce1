//! Table dialect tests

mod export;
mod import;
