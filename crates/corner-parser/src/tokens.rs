//! Token vocabulary of the Corner language.

use std::fmt;

use crate::{position::Position, span::Span};

/// Token types for the Corner language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Keywords
    Node,
    /// `edge` or `calls`
    Edge,
    Color,
    /// `label` or `desc`
    Label,

    Identifier(String),

    // Operators
    Arrow, // ->
    Colon, // :

    // Punctuation
    LBrace, // {
    RBrace, // }
    Quote,  // "

    /// Any character the language has no use for.
    Unknown(String),
    EndOfInput,
}

impl Token {
    /// Map a scanned word to its keyword token, or an identifier.
    ///
    /// Matching is case-sensitive.
    pub fn from_word(word: &str) -> Self {
        match word {
            "node" => Token::Node,
            "edge" | "calls" => Token::Edge,
            "color" => Token::Color,
            "label" | "desc" => Token::Label,
            _ => Token::Identifier(word.to_string()),
        }
    }

    /// Canonical symbol used in "expected ..." messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Node => "'node'",
            Token::Edge => "'calls'",
            Token::Color => "'color'",
            Token::Label => "'label'",
            Token::Identifier(_) => "Identifier",
            Token::Arrow => "'->'",
            Token::Colon => "':'",
            Token::LBrace => "lbrace '{'",
            Token::RBrace => "rbrace '}'",
            Token::Quote => "'\"'",
            Token::Unknown(_) => "unknown token",
            Token::EndOfInput => "end of input",
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Node => write!(f, "node"),
            Token::Edge => write!(f, "calls"),
            Token::Color => write!(f, "color"),
            Token::Label => write!(f, "label"),

            Token::Identifier(name) => write!(f, "{name}"),

            Token::Arrow => write!(f, "->"),
            Token::Colon => write!(f, ":"),

            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Quote => write!(f, "\""),

            Token::Unknown(text) => write!(f, "{text}"),
            Token::EndOfInput => write!(f, "<eof>"),
        }
    }
}

/// Anything that can describe itself and say where it sits in the source.
///
/// Error messages are built against this trait so they read the same
/// whichever token representation produced them.
pub trait PositionAware {
    /// The line number where the token is located, starting from 1.
    fn line(&self) -> usize;

    /// The column number where the token begins on the line, starting from 1.
    fn column(&self) -> usize;

    /// Display symbol of the token kind.
    fn symbol(&self) -> &str;
}

/// Render `symbol at line:column` for any [`PositionAware`] value.
pub fn describe(token: &impl PositionAware) -> String {
    format!("{} at {}:{}", token.symbol(), token.line(), token.column())
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    pub token: Token,
    pub position: Position,
    pub span: Span,
}

impl PositionedToken {
    pub fn new(token: Token, position: Position, span: Span) -> Self {
        Self {
            token,
            position,
            span,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::ops::Deref for PositionedToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl fmt::Display for PositionedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token.fmt(f)
    }
}

impl PositionAware for PositionedToken {
    fn line(&self) -> usize {
        self.position.line()
    }

    fn column(&self) -> usize {
        self.position.column()
    }

    fn symbol(&self) -> &str {
        self.token.symbol()
    }
}
