// src/core/mod.rs

pub mod html;
pub mod lenient;
pub mod parse;
pub mod patterns;
pub mod sanitize;

pub use html::{Doc, Node};
