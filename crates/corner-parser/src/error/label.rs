//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// Whether a label marks the fault itself or only gives context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

/// A message attached to a span of source text.
///
/// A diagnostic usually carries one primary label at the offending token and
/// optionally secondary labels pointing at related declarations:
///
/// ```text
/// error[E200]: node `api` is declared more than once
///   --> service.corner:7:6
///    |
///  7 | node api { }
///    |      ^^^ duplicate declaration
///    |
///   --> service.corner:1:6
///    |
///  1 | node api {
///    |      --- first declared here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    style: LabelStyle,
}

impl Label {
    /// Create a label marking the main location of a diagnostic.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelStyle::Primary, span, message)
    }

    /// Create a label providing additional context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelStyle::Secondary, span, message)
    }

    fn new(style: LabelStyle, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}
