//! The failure type of a complete check.
//!
//! [`CheckError`] bundles every diagnostic produced while checking a
//! diagram, so callers can render all of them at once.

use std::fmt;

use crate::error::Diagnostic;

/// One or more diagnostics, at least one of which is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckError {
    diagnostics: Vec<Diagnostic>,
}

impl CheckError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics, in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity().is_error())
            .count()
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lead with the first error rather than a leading warning
        let first = self
            .diagnostics
            .iter()
            .find(|d| d.severity().is_error())
            .or_else(|| self.diagnostics.first());

        if let Some(first) = first {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CheckError {}

impl From<Diagnostic> for CheckError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_check_error_from_diagnostic() {
        let err: CheckError = Diagnostic::error("empty diagram")
            .with_code(ErrorCode::E202)
            .into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.error_count(), 1);
        assert_eq!(err.to_string(), "error[E202]: empty diagram");
    }

    #[test]
    fn test_check_error_display_leads_with_first_error() {
        let err = CheckError::new(vec![
            Diagnostic::warning("node `C` is unreachable"),
            Diagnostic::error("node `A` is declared more than once"),
            Diagnostic::error("edge targets undeclared node `D`"),
        ]);

        assert_eq!(err.error_count(), 2);
        assert_eq!(
            err.to_string(),
            "error: node `A` is declared more than once (+2 more)"
        );
    }
}
