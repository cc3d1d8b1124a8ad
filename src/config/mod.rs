// src/config/mod.rs
pub mod consts;
pub mod dialect;
pub mod options;

pub use dialect::{ConstructionTables, Dialect, Features, ResourceBoxes, Revision};
pub use options::ExtractOptions;
