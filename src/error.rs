use thiserror::Error;

use crate::ast::{Token, TokenKind};

/// Any lexical, syntactic or validation failure while parsing a zone
/// specification.
///
/// Parsing is all-or-nothing: the first error aborts the parse and no partial
/// tree is produced. The token at the point of failure is kept so callers can
/// point at the exact span of source text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at column {}", .token.column + 1)]
pub struct ParseError {
    pub message: String,
    pub token: Token,
}

impl ParseError {
    pub fn new(message: impl Into<String>, token: Token) -> Self {
        ParseError {
            message: message.into(),
            token,
        }
    }

    /// Error at a single character position, used by the lexer before a full
    /// token exists.
    pub fn at(message: impl Into<String>, kind: TokenKind, column: usize, len: usize) -> Self {
        ParseError::new(message, Token::new(kind, column, len))
    }

    /// 0-based character offset of the offending token.
    pub fn column(&self) -> usize {
        self.token.column
    }

    /// Character range covered by the offending token. Never empty, so an
    /// end-of-input error still underlines one position.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.token.column..self.token.column + self.token.len.max(1)
    }

    /// Render the message followed by the offending source line and a caret
    /// underline beneath the token.
    ///
    /// ```text
    /// unknown predicate 'cirle' at column 1
    ///   cirle(0,0,10)
    ///   ^^^^^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let column = self.token.column;
        let mut line_start = 0;
        let mut line = "";
        for candidate in source.split('\n') {
            line = candidate;
            let width = candidate.chars().count();
            if column <= line_start + width {
                break;
            }
            line_start += width + 1;
        }

        let indent = column.saturating_sub(line_start);
        format!(
            "{}\n  {}\n  {}{}",
            self,
            line.trim_end_matches('\r'),
            " ".repeat(indent),
            "^".repeat(self.token.len.max(1))
        )
    }
}
