//! The renderable diagnostic type.
//!
//! A [`Diagnostic`] is a single error or warning with an optional error code,
//! any number of labeled source spans and optional help text. Parse errors
//! and analysis findings are both converted into diagnostics before being
//! shown to a user.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```
/// # use corner_parser::error::{Diagnostic, ErrorCode};
/// # use corner_parser::Span;
///
/// let diag = Diagnostic::error("node `api` is declared more than once")
///     .with_code(ErrorCode::E200)
///     .with_label(Span::new(40..43), "duplicate declaration")
///     .with_secondary_label(Span::new(5..8), "first declared here")
///     .with_help("rename one of the nodes");
///
/// assert_eq!(diag.to_string(), "error[E200]: node `api` is declared more than once");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The first primary label, if any.
    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.iter().find(|label| label.is_primary())
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Re-issue this diagnostic as an error, keeping everything else.
    ///
    /// Used when warnings are configured to block a check.
    pub fn into_error(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E100]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("empty diagram");

        assert!(diag.severity().is_error());
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.primary_label().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_labels_keep_order() {
        let diag = Diagnostic::error("edge source mismatch")
            .with_secondary_label(Span::new(0..8), "inside this node")
            .with_label(Span::new(20..21), "expected `A`");

        assert_eq!(diag.labels().len(), 2);
        assert!(!diag.labels()[0].is_primary());
        let primary = diag.primary_label().expect("primary label");
        assert_eq!(primary.message(), "expected `A`");
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("unexpected token").with_code(ErrorCode::E100);
        assert_eq!(with_code.to_string(), "error[E100]: unexpected token");

        let without_code = Diagnostic::warning("node `C` is unreachable");
        assert_eq!(without_code.to_string(), "warning: node `C` is unreachable");
    }

    #[test]
    fn test_into_error_promotes_warning() {
        let diag = Diagnostic::warning("node `C` is unreachable")
            .with_code(ErrorCode::E203)
            .into_error();

        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E203));
    }
}
