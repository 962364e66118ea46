//! Recursive-descent parser for Corner source.
//!
//! The [`Parser`] pulls tokens from a [`Lexer`] one at a time and keeps a
//! single token of lookahead. Each grammar rule is one method:
//!
//! ```text
//! diagram    := { nodeDecl } EndOfInput
//! nodeDecl   := "node" Identifier "{" { nodeItem } "}"
//! nodeItem   := "color" ":" Identifier
//!             | ("label" | "desc") ":" labelValue
//!             | edgeDecl
//!             | nodeDecl
//! edgeDecl   := ("calls" | "edge") Identifier [ "->" Identifier ] "{" { edgeAttr } "}"
//! edgeAttr   := "color" ":" Identifier
//!             | ("label" | "desc") ":" labelValue
//! labelValue := '"' Identifier '"' | Identifier
//! ```
//!
//! Parsing stops at the first error; there is no recovery. Nested nodes are
//! limited to [`MAX_NESTING_DEPTH`] levels so recursion stays bounded.

use log::{debug, trace};

use crate::{
    ast::{Diagram, EdgeAttribute, EdgeDecl, Node, NodeAttribute},
    error::{ParseError, Result},
    lexer::Lexer,
    span::Spanned,
    tokens::{PositionedToken, Token},
};

/// Deepest allowed nesting of `node` declarations, top level included.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Single-use parser over one source string.
#[derive(Debug)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: PositionedToken,
    trace_tokens: bool,
    /// Number of `node` declarations currently open.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Create a parser for `source` with the first token already in lookahead.
    pub fn new(source: &'src str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    pub fn from_lexer(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            trace_tokens: false,
            depth: 0,
        }
    }

    /// Log every accepted token at `trace` level.
    pub fn with_token_trace(mut self, enabled: bool) -> Self {
        self.trace_tokens = enabled;
        self
    }

    /// Parse the whole input into a [`Diagram`].
    pub fn parse(mut self) -> Result<Diagram> {
        let mut children = Vec::new();

        loop {
            match self.current.token {
                Token::EndOfInput => break,
                Token::Node => children.push(self.node_decl()?),
                _ => return Err(self.unexpected(&Token::Node)),
            }
        }

        let diagram = Diagram::new(children);
        debug!(
            nodes = diagram.node_count(),
            edges = diagram.edge_count();
            "Parsed diagram"
        );
        Ok(diagram)
    }

    /// Move the lookahead forward, returning the token it held.
    fn advance(&mut self) -> PositionedToken {
        let next = self.lexer.next_token();
        let accepted = std::mem::replace(&mut self.current, next);
        if self.trace_tokens {
            trace!(token:% = accepted.token, position:% = accepted.position; "Accepted token");
        }
        accepted
    }

    /// Consume the lookahead if it equals `expected`.
    fn expect(&mut self, expected: &Token) -> Result<PositionedToken> {
        if self.current.token == *expected {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume an identifier and return its text.
    fn identifier(&mut self) -> Result<Spanned<String>> {
        match &self.current.token {
            Token::Identifier(name) => {
                let id = Spanned::new(name.clone(), self.current.span());
                self.advance();
                Ok(id)
            }
            _ => Err(ParseError::ExpectedIdentifier {
                found: self.current.clone(),
            }),
        }
    }

    fn unexpected(&self, expected: &Token) -> ParseError {
        ParseError::unexpected(expected, self.current.clone())
    }

    fn node_decl(&mut self) -> Result<Node> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                found: self.current.clone(),
            });
        }
        self.depth += 1;

        self.expect(&Token::Node)?;
        let mut node = Node::new(self.identifier()?);
        self.expect(&Token::LBrace)?;

        loop {
            match self.current.token {
                Token::RBrace => break,
                Token::Color => {
                    let color = self.color_value()?;
                    node.attributes.push(NodeAttribute::Color(color));
                }
                Token::Label => {
                    let description = self.label_value()?;
                    node.attributes.push(NodeAttribute::Description(description));
                }
                Token::Edge => {
                    let edge = self.edge_decl(&node.id)?;
                    node.edges.push(edge);
                }
                Token::Node => {
                    let child = self.node_decl()?;
                    node.children.push(child);
                }
                _ => return Err(self.unexpected(&Token::RBrace)),
            }
        }

        self.expect(&Token::RBrace)?;
        self.depth -= 1;
        Ok(node)
    }

    /// Parse an edge declared inside the node `enclosing`.
    fn edge_decl(&mut self, enclosing: &Spanned<String>) -> Result<EdgeDecl> {
        self.expect(&Token::Edge)?;

        let first_position = self.current.position();
        let first = self.identifier()?;

        let to = if self.current.token == Token::Arrow {
            if first != *enclosing {
                return Err(ParseError::EdgeSourceMismatch {
                    node: enclosing.clone(),
                    found: first,
                    position: first_position,
                });
            }
            self.advance();
            self.identifier()?
        } else {
            first
        };

        let mut edge = EdgeDecl::new(enclosing.clone(), to);
        self.expect(&Token::LBrace)?;

        loop {
            match self.current.token {
                Token::RBrace => break,
                Token::Color => {
                    let color = self.color_value()?;
                    edge.attributes.push(EdgeAttribute::Color(color));
                }
                Token::Label => {
                    let label = self.label_value()?;
                    edge.attributes.push(EdgeAttribute::Label(label));
                }
                _ => return Err(self.unexpected(&Token::RBrace)),
            }
        }

        self.expect(&Token::RBrace)?;
        Ok(edge)
    }

    /// `color: <Identifier>`
    fn color_value(&mut self) -> Result<Spanned<String>> {
        self.expect(&Token::Color)?;
        self.expect(&Token::Colon)?;
        self.identifier()
    }

    /// `label: "<Identifier>"` or `label: <Identifier>`
    fn label_value(&mut self) -> Result<Spanned<String>> {
        self.expect(&Token::Label)?;
        self.expect(&Token::Colon)?;

        if self.current.token == Token::Quote {
            self.advance();
            let text = self.identifier()?;
            self.expect(&Token::Quote)?;
            Ok(text)
        } else {
            self.identifier()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{position::Position, span::Span};

    #[test]
    fn test_lookahead_is_primed() {
        let parser = Parser::new("  node");
        assert_eq!(parser.current.token, Token::Node);
        assert_eq!(parser.current.position, Position::new(1, 3));
    }

    #[test]
    fn test_advance_returns_previous_lookahead() {
        let mut parser = Parser::new("node A");
        let accepted = parser.advance();
        assert_eq!(accepted.token, Token::Node);
        assert_eq!(parser.current.token, Token::Identifier("A".into()));
    }

    #[test]
    fn test_expect_mismatch_keeps_lookahead() {
        let mut parser = Parser::new("}");
        let err = parser.expect(&Token::LBrace).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "lbrace '{'",
                found: PositionedToken::new(Token::RBrace, Position::new(1, 1), Span::new(0..1)),
            }
        );
        assert_eq!(parser.current.token, Token::RBrace);
    }

    #[test]
    fn test_identifier_carries_span() {
        let mut parser = Parser::new("  name");
        let id = parser.identifier().unwrap();
        assert_eq!(id.as_str(), "name");
        assert_eq!(id.span(), Span::new(2..6));
        assert!(parser.current.is_end_of_input());
    }

    #[test]
    fn test_token_trace_does_not_change_result() {
        let source = "node A { calls B { } }";
        let plain = Parser::new(source).parse().unwrap();
        let traced = Parser::new(source).with_token_trace(true).parse().unwrap();
        assert_eq!(plain, traced);
    }
}
