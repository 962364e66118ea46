//! Collector for accumulating diagnostics during a check.
//!
//! Semantic analysis reports every finding instead of stopping at the first
//! one. The [`DiagnosticCollector`] gathers them and decides at the end
//! whether the check failed.

use crate::error::{CheckError, Diagnostic};

/// Accumulates diagnostics and remembers whether any of them is an error.
///
/// ```
/// # use corner_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
/// # use corner_parser::Span;
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(
///     Diagnostic::error("edge targets undeclared node `B`")
///         .with_code(ErrorCode::E201)
///         .with_label(Span::new(16..17), "not declared"),
/// );
/// collector.emit(Diagnostic::warning("node `C` is unreachable"));
///
/// let err = collector.finish().unwrap_err();
/// assert_eq!(err.diagnostics().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic, marking the collector as failed if it is an error.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Add every diagnostic from an iterator.
    pub fn emit_all(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        diagnostics.into_iter().for_each(|d| self.emit(d));
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish collection.
    ///
    /// - If any error was emitted, returns `Err(CheckError)` with all
    ///   diagnostics, warnings included, in emission order.
    /// - Otherwise returns the warnings.
    pub fn finish(self) -> Result<Vec<Diagnostic>, CheckError> {
        if self.has_errors {
            Err(CheckError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
