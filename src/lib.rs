//! `impose` places one image over another.
//! The library exists so that both binaries and the tests share one implementation;
//! its interface is not stable.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod decode;
pub mod encode;
pub mod error;
pub mod help;
pub mod image;
pub mod logging;
pub mod operations;
pub mod plan;
pub mod run;
pub mod settings;
mod utils;
