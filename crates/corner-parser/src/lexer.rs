//! Lexical analyzer for Corner source text.
//!
//! The lexer converts source text into [`PositionedToken`]s on demand: every
//! call to [`Lexer::next_token`] skips whitespace, recognises exactly one
//! token and reports where it started. The parser never needs more than one
//! token of lookahead, so nothing is buffered.
//!
//! There are no lexical errors. Characters the language has no use for come
//! back as [`Token::Unknown`] and are rejected later by the parser.

use std::iter::FusedIterator;

use winnow::{
    Parser as _,
    combinator::alt,
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, one_of, take_while},
};

use crate::{
    position::PositionTracker,
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Parse whitespace, newlines included
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

/// Parse `->`
fn arrow(input: &mut Input<'_>) -> IResult<Token> {
    literal("->").value(Token::Arrow).parse_next(input)
}

/// Parse single character tokens
fn punctuation(input: &mut Input<'_>) -> IResult<Token> {
    alt((
        '{'.value(Token::LBrace),
        '}'.value(Token::RBrace),
        ':'.value(Token::Colon),
        '"'.value(Token::Quote),
    ))
    .parse_next(input)
}

/// Parse a keyword or identifier: a letter followed by letters or digits
fn word(input: &mut Input<'_>) -> IResult<Token> {
    (
        one_of(|c: char| c.is_alphabetic()),
        take_while(0.., |c: char| c.is_alphanumeric()),
    )
        .take()
        .map(Token::from_word)
        .parse_next(input)
}

/// Parse any token the grammar knows about
fn known_token(input: &mut Input<'_>) -> IResult<Token> {
    alt((
        arrow,       // Must come before anything matching '-'
        punctuation, // Single character tokens
        word,        // Keywords and identifiers
    ))
    .parse_next(input)
}

/// Pull-based tokenizer over a source string.
///
/// Once the input is exhausted, every further call to
/// [`next_token`](Self::next_token) returns [`Token::EndOfInput`] positioned
/// right after the last consumed character.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    input: Input<'src>,
    tracker: PositionTracker,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at line 1, column 1 of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            tracker: PositionTracker::new(),
            exhausted: false,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> PositionedToken {
        if let Ok(skipped) = whitespace.parse_next(&mut self.input) {
            self.tracker.advance_str(skipped);
        }

        let start = self.input.current_token_start();
        let position = self.tracker.position();

        if self.input.is_empty() {
            return PositionedToken::new(Token::EndOfInput, position, Span::new(start..start));
        }

        let checkpoint = self.input.checkpoint();
        let token = match known_token(&mut self.input) {
            Ok(token) => token,
            Err(_) => {
                // Anything else is a one-character unknown token
                self.input.reset(&checkpoint);
                match self.input.next_token() {
                    Some(c) => Token::Unknown(c.to_string()),
                    None => Token::EndOfInput,
                }
            }
        };

        let end = self.input.current_token_start();
        self.tracker.advance_str(&self.source[start..end]);

        PositionedToken::new(token, position, Span::new(start..end))
    }
}

impl Iterator for Lexer<'_> {
    type Item = PositionedToken;

    /// Yields every token up to and including the first `EndOfInput`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.is_end_of_input() {
            self.exhausted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
