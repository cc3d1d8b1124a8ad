// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod extractor;
pub mod model;
pub mod specs;

pub use config::{Dialect, ExtractOptions, Features, Revision};
pub use error::{ExtractError, Result};
pub use extractor::Extractor;
