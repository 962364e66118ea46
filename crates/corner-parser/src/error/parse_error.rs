//! Syntax errors reported by the parser.
//!
//! The parser stops at the first grammar violation and returns it as a
//! [`ParseError`]. Each variant keeps the offending token (or identifier) so
//! the error can be rendered against the source.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    parser::MAX_NESTING_DEPTH,
    position::Position,
    span::{Span, Spanned},
    tokens::{PositionAware, PositionedToken, Token, describe},
};

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The first grammar violation found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lookahead token cannot continue the current production.
    #[error("expected {expected}, found {}", describe(.found))]
    UnexpectedToken {
        /// Display symbol of what the grammar wanted.
        expected: &'static str,
        found: PositionedToken,
    },

    /// A declaration is missing its name.
    #[error("expected Identifier, found {}", describe(.found))]
    ExpectedIdentifier { found: PositionedToken },

    /// `edge X -> Y` declared inside a node whose id is not `X`.
    #[error("edge in node `{node}` must start at `{node}`, found `{found}` at {position}")]
    EdgeSourceMismatch {
        /// Id of the enclosing node.
        node: Spanned<String>,
        /// Source id written in the edge declaration.
        found: Spanned<String>,
        position: Position,
    },

    /// A `node` declaration opened past the nesting limit.
    #[error("nodes nested deeper than {} levels, found {}", MAX_NESTING_DEPTH, describe(.found))]
    NestingTooDeep { found: PositionedToken },
}

impl ParseError {
    pub fn unexpected(expected: &Token, found: PositionedToken) -> Self {
        Self::UnexpectedToken {
            expected: expected.symbol(),
            found,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnexpectedToken { .. } => ErrorCode::E100,
            Self::ExpectedIdentifier { .. } => ErrorCode::E101,
            Self::EdgeSourceMismatch { .. } => ErrorCode::E102,
            Self::NestingTooDeep { .. } => ErrorCode::E103,
        }
    }

    /// Line and column of the offending input.
    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::ExpectedIdentifier { found }
            | Self::NestingTooDeep { found } => found.position(),
            Self::EdgeSourceMismatch { position, .. } => *position,
        }
    }

    /// Byte range of the offending input.
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::ExpectedIdentifier { found }
            | Self::NestingTooDeep { found } => found.span(),
            Self::EdgeSourceMismatch { found, .. } => found.span(),
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::UnexpectedToken { expected, found } => {
                let diag = Diagnostic::error(format!("unexpected {}", found.symbol()))
                    .with_code(self.code())
                    .with_label(found.span(), format!("expected {expected}"));
                if found.is_end_of_input() && *expected == Token::RBrace.symbol() {
                    diag.with_help("the input ended before every `{` was closed")
                } else {
                    diag
                }
            }
            Self::ExpectedIdentifier { found } => {
                Diagnostic::error(format!("expected Identifier, found {}", found.symbol()))
                    .with_code(self.code())
                    .with_label(found.span(), "expected a name here")
                    .with_help("names start with a letter and contain only letters and digits")
            }
            Self::EdgeSourceMismatch { node, found, .. } => Diagnostic::error(format!(
                "edge source `{found}` does not match enclosing node `{node}`"
            ))
            .with_code(self.code())
            .with_label(found.span(), format!("expected `{node}`"))
            .with_secondary_label(node.span(), "enclosing node declared here")
            .with_help(format!(
                "edges start at the node they are declared in; write `edge {node} -> <target>` or just `edge <target>`"
            )),
            Self::NestingTooDeep { found } => {
                Diagnostic::error(format!("nodes nested more than {MAX_NESTING_DEPTH} levels deep"))
                    .with_code(self.code())
                    .with_label(found.span(), "this node exceeds the nesting limit")
                    .with_help("move some nested nodes to the top level and connect them with edges")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(token: Token, line: usize, column: usize, span: std::ops::Range<usize>) -> PositionedToken {
        PositionedToken::new(token, Position::new(line, column), Span::new(span))
    }

    #[test]
    fn test_unexpected_token_display() {
        let err = ParseError::unexpected(&Token::LBrace, token(Token::Arrow, 1, 8, 7..9));

        assert_eq!(err.to_string(), "expected lbrace '{', found '->' at 1:8");
        assert_eq!(err.position(), Position::new(1, 8));
        assert_eq!(err.code(), ErrorCode::E100);
    }

    #[test]
    fn test_expected_identifier_diagnostic() {
        let err = ParseError::ExpectedIdentifier {
            found: token(Token::LBrace, 1, 6, 5..6),
        };

        assert_eq!(err.to_string(), "expected Identifier, found lbrace '{' at 1:6");
        let diag = err.to_diagnostic();
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels()[0].span(), Span::new(5..6));
    }

    #[test]
    fn test_end_of_input_gets_help() {
        let err = ParseError::unexpected(&Token::RBrace, token(Token::EndOfInput, 2, 1, 9..9));
        let diag = err.to_diagnostic();

        assert_eq!(diag.message(), "unexpected end of input");
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_end_of_input_before_lbrace_has_no_help() {
        let err = ParseError::unexpected(&Token::LBrace, token(Token::EndOfInput, 1, 7, 6..6));
        let diag = err.to_diagnostic();

        assert_eq!(diag.message(), "unexpected end of input");
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_nesting_too_deep_diagnostic() {
        let err = ParseError::NestingTooDeep {
            found: token(Token::Node, 1, 641, 640..644),
        };

        assert_eq!(err.code(), ErrorCode::E103);
        assert_eq!(err.position(), Position::new(1, 641));

        let diag = err.to_diagnostic();
        assert_eq!(diag.code(), Some(ErrorCode::E103));
        assert_eq!(diag.labels()[0].span(), Span::new(640..644));
    }

    #[test]
    fn test_edge_source_mismatch_labels_both_ids() {
        let err = ParseError::EdgeSourceMismatch {
            node: Spanned::new("A".to_string(), Span::new(5..6)),
            found: Spanned::new("X".to_string(), Span::new(16..17)),
            position: Position::new(2, 10),
        };

        assert_eq!(
            err.to_string(),
            "edge in node `A` must start at `A`, found `X` at 2:10"
        );
        assert_eq!(err.span(), Span::new(16..17));

        let diag = err.to_diagnostic();
        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.labels().len(), 2);
        assert_eq!(diag.labels()[1].span(), Span::new(5..6));
    }
}
