//! Line/column bookkeeping for the lexer.

use std::fmt;

/// A 1-based line/column location in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// Create a position. Zero components are clamped to 1.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tracks the [`Position`] of the next unconsumed character.
#[derive(Debug, Clone, Default)]
pub(crate) struct PositionTracker {
    position: Position,
}

impl PositionTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Position of the next character to be consumed.
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Advance over a single consumed character.
    pub(crate) fn advance(&mut self, c: char) {
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }

    /// Advance over every character of a consumed slice.
    pub(crate) fn advance_str(&mut self, consumed: &str) {
        consumed.chars().for_each(|c| self.advance(c));
    }
}
