//! Error codes for the Corner diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Parser errors
//! - `E2xx` - Semantic analysis findings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered a token it did not expect at this position.
    E100,

    /// Expected identifier.
    ///
    /// A node or edge declaration is missing its name.
    E101,

    /// Edge source mismatch.
    ///
    /// An `edge X -> Y` declaration names a source other than the node it is
    /// declared in.
    E102,

    /// Nesting too deep.
    ///
    /// `node` declarations are nested past the parser's depth limit.
    E103,

    // =========================================================================
    // Semantic Findings (E2xx)
    // =========================================================================
    /// Duplicate node id.
    ///
    /// Two node declarations anywhere in the diagram share an identifier.
    E200,

    /// Dangling edge.
    ///
    /// An edge targets an identifier that no node declares.
    E201,

    /// Empty diagram.
    ///
    /// The diagram has no top-level node declarations.
    E202,

    /// Unreachable node.
    ///
    /// No edge targets this node and it is not the entry point.
    E203,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Parser errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Semantic findings
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "expected identifier",
            ErrorCode::E102 => "edge source mismatch",
            ErrorCode::E103 => "nesting too deep",
            ErrorCode::E200 => "duplicate node id",
            ErrorCode::E201 => "dangling edge",
            ErrorCode::E202 => "empty diagram",
            ErrorCode::E203 => "unreachable node",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
