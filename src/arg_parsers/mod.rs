//! Parsers for specific command-line argument formats

mod point;
pub use point::*;
