//! Error types for Corner operations.
//!
//! [`CornerError`] wraps the failures of a check. The `Parse` and `Check`
//! variants keep the source text next to the error so that callers can
//! render labeled diagnostics without holding on to the input themselves.

use std::io;

use thiserror::Error;

use corner_parser::{CheckError, Diagnostic, ParseError};

/// The main error type for Corner operations.
#[derive(Debug, Error)]
pub enum CornerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source has a syntax error.
    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// The source parsed but the analysis found blocking problems.
    #[error("{err}")]
    Check { err: CheckError, src: String },
}

impl CornerError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Check` error with the associated source code.
    pub fn new_check_error(err: CheckError, src: impl Into<String>) -> Self {
        Self::Check {
            err,
            src: src.into(),
        }
    }

    /// Diagnostics describing this error, empty for I/O failures.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::Io(_) => Vec::new(),
            Self::Parse { err, .. } => vec![err.to_diagnostic()],
            Self::Check { err, .. } => err.diagnostics().to_vec(),
        }
    }

    /// The source text the error refers to, if any.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Self::Io(_) => None,
            Self::Parse { src, .. } | Self::Check { src, .. } => Some(src),
        }
    }
}
