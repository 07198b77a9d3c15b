use crate::ast::{Token, TokenKind};
use crate::error::ParseError;

/// Converts zone specification text into [`Token`]s, one at a time.
///
/// The lexer keeps a single cached "current" token; the parser inspects it
/// with [`current`](Lexer::current) and moves on with [`next`](Lexer::next).
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current: Option<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            current: None,
        }
    }

    /// The current token, lexed on first access and cached afterwards.
    pub fn current(&mut self) -> Result<&Token, ParseError> {
        let token = match self.current.take() {
            Some(token) => token,
            None => self.lex_token()?,
        };
        Ok(&*self.current.insert(token))
    }

    /// Lex the following token and make it current.
    ///
    /// Once the input is exhausted every call returns an `End` token.
    pub fn next(&mut self) -> Result<&Token, ParseError> {
        let token = self.lex_token()?;
        Ok(&*self.current.insert(token))
    }

    /// Character offset the lexer has read up to.
    pub fn column(&self) -> usize {
        self.position
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.position, 1);
        self.advance();
        token
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphabetic() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::with_text(TokenKind::Ident, result, start, self.position - start)
    }

    fn read_string(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '"' {
                return Ok(Token::with_text(
                    TokenKind::String,
                    result,
                    start,
                    self.position - start,
                ));
            }
            result.push(ch);
        }

        Err(ParseError::at(
            "unterminated string",
            TokenKind::String,
            start,
            self.position - start,
        ))
    }

    fn read_digits(&mut self, number: &mut String) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let mut number = String::new();

        match self.current_char() {
            Some('+') => self.advance(),
            Some('-') => {
                number.push('-');
                self.advance();
            }
            _ => {}
        }

        if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            return Err(ParseError::at(
                "expected a digit",
                TokenKind::Number,
                self.position,
                1,
            ));
        }

        if self.current_char() == Some('0') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.read_digits(&mut number);
            return Err(ParseError::at(
                "number has too many leading zeroes",
                TokenKind::Number,
                start,
                self.position - start,
            ));
        }

        self.read_digits(&mut number);

        if self.current_char() == Some('.') {
            number.push('.');
            self.advance();
            if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(ParseError::at(
                    "expected a digit after '.'",
                    TokenKind::Number,
                    self.position,
                    1,
                ));
            }
            self.read_digits(&mut number);
        }

        Ok(Token::with_text(
            TokenKind::Number,
            number,
            start,
            self.position - start,
        ))
    }

    fn lex_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => Token::new(TokenKind::End, self.position, 0),
            Some('(') => self.single(TokenKind::LParen),
            Some(')') => self.single(TokenKind::RParen),
            Some(',') => self.single(TokenKind::Comma),
            Some('&') => self.single(TokenKind::And),
            Some('|') => self.single(TokenKind::Or),
            Some('^') => self.single(TokenKind::Xor),
            Some('!') => self.single(TokenKind::Not),
            Some('"') => self.read_string()?,
            Some(ch) if ch == '+' || ch == '-' || ch.is_ascii_digit() => self.read_number()?,
            Some(ch) if ch.is_alphabetic() => self.read_identifier(),
            Some(ch) => {
                return Err(ParseError::at(
                    format!("unexpected character '{}'", ch),
                    TokenKind::Invalid,
                    self.position,
                    1,
                ));
            }
        };
        Ok(token)
    }
}

#[test]
fn test_operators() {
    let mut lexer = Lexer::new("( ) , & | ^ !");
    assert_eq!(lexer.current().unwrap().kind, TokenKind::LParen);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::RParen);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Comma);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::And);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Or);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Xor);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Not);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::End);
}

#[test]
fn test_current_is_cached() {
    let mut lexer = Lexer::new("circle");
    assert_eq!(lexer.column(), 0);
    assert_eq!(lexer.current().unwrap().text(), "circle");
    assert_eq!(lexer.column(), 6);
    assert_eq!(lexer.current().unwrap().text(), "circle");
    assert_eq!(lexer.column(), 6);
}

#[test]
fn test_end_is_sticky() {
    let mut lexer = Lexer::new("  ");
    assert_eq!(lexer.current().unwrap().kind, TokenKind::End);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::End);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::End);
}
