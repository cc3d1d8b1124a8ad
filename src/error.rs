// src/error.rs
//! Extraction error taxonomy.
//!
//! Every extractor returns one of these to its immediate caller; nothing is
//! retried or swallowed inside the crate. Benign absence (an optional field or
//! section not on the page) is never an error and never shows up here.

use thiserror::Error;

use crate::model::EspionageReport;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Input bytes are not a document at all (e.g. not UTF-8).
    #[error("document unparsable: {0}")]
    Unparsable(String),

    /// A region required to establish identity is missing or does not match.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    /// JSON was found but has the wrong shape at an expected key.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The page hid entity pictures mid-section. `partial` holds everything that
    /// was read before (and around) the blanked element.
    #[error("extraction blocked: entity pictures are hidden")]
    ExtractionBlocked { partial: Box<EspionageReport> },

    /// A selector constant failed to compile.
    #[error("invalid selector {0}")]
    Selector(String),
}

impl ExtractError {
    pub fn mismatch(msg: impl Into<String>) -> Self {
        ExtractError::StructuralMismatch(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        ExtractError::MalformedPayload(msg.into())
    }

    /// The partially populated report carried by `ExtractionBlocked`.
    pub fn partial_report(&self) -> Option<&EspionageReport> {
        match self {
            ExtractError::ExtractionBlocked { partial } => Some(partial),
            _ => None,
        }
    }

    pub fn into_partial(self) -> Option<EspionageReport> {
        match self {
            ExtractError::ExtractionBlocked { partial } => Some(*partial),
            _ => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, ExtractError::ExtractionBlocked { .. })
    }
}
