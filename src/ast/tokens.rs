use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Delimiters
    /// Left parenthesis, opens a group or an argument list
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating predicate arguments
    Comma,

    // Connectives
    /// Logical AND
    ///
    /// # Examples
    /// ```text
    /// circle(0,0,100) & y(0,64)
    /// ```
    And,

    /// Logical OR
    ///
    /// # Examples
    /// ```text
    /// biome("DESERT") | biome("BADLANDS")
    /// ```
    Or,

    /// Logical exclusive OR
    Xor,

    /// Logical negation (prefix)
    ///
    /// # Examples
    /// ```text
    /// !wg("spawn")
    /// ```
    Not,

    // Literals and names
    /// Predicate name
    ///
    /// A run of alphabetic characters only. Digits and underscores are not
    /// part of predicate names.
    ///
    /// # Examples
    /// ```text
    /// circle
    /// wg
    /// ```
    Ident,

    /// String literal enclosed in double quotes, no escape sequences
    ///
    /// # Examples
    /// ```text
    /// "END_BARRENS"
    /// "__global__"
    /// ```
    String,

    /// Number literal with optional sign and fraction
    ///
    /// # Examples
    /// ```text
    /// 500
    /// -12.5
    /// +0.25
    /// ```
    Number,

    /// A character that starts no token; only carried by lexer errors
    Invalid,

    /// End of input
    End,
}

impl TokenKind {
    /// Human readable description used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::And => "'&'",
            TokenKind::Or => "'|'",
            TokenKind::Xor => "'^'",
            TokenKind::Not => "'!'",
            TokenKind::Ident => "a predicate name",
            TokenKind::String => "a string",
            TokenKind::Number => "a number",
            TokenKind::Invalid => "an unexpected character",
            TokenKind::End => "end of input",
        }
    }
}

/// A token produced by the [`Lexer`](crate::lexer::Lexer).
///
/// Tokens are immutable once produced. `text` is only present for
/// identifiers, strings (without the quotes) and numbers (sign included
/// when negative).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    /// 0-based character offset of the first character of the token.
    pub column: usize,
    /// Number of source characters covered by the token.
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenKind, column: usize, len: usize) -> Self {
        Token {
            kind,
            text: None,
            column,
            len,
        }
    }

    pub fn with_text(kind: TokenKind, text: String, column: usize, len: usize) -> Self {
        Token {
            kind,
            text: Some(text),
            column,
            len,
        }
    }

    /// Token text, or an empty string for tokens that carry none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Number => write!(f, "'{}'", self.text()),
            TokenKind::String => write!(f, "\"{}\"", self.text()),
            kind => f.write_str(kind.describe()),
        }
    }
}
