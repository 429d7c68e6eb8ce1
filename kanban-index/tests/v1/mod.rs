//! Heading-and-list dialect tests

mod export;
mod import;
