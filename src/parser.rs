use std::str::FromStr;

use tracing::debug;

use crate::{
    ast::{Expr, PredicateCall, Token, TokenKind},
    error::ParseError,
    lexer::Lexer,
    predicate::ZonePredicate,
};

/// Recursive-descent parser for zone specifications.
///
/// ```text
/// spec      ::= or_expr END
/// or_expr   ::= xor_expr ( '|' xor_expr )*
/// xor_expr  ::= and_expr ( '^' and_expr )*
/// and_expr  ::= primary  ( '&' primary  )*
/// primary   ::= predicate | '(' or_expr ')' | '!' primary
/// predicate ::= IDENT '(' ( arg (',' arg)* )? ')'
/// arg       ::= NUMBER | STRING
/// ```
///
/// Predicate calls are validated against the registry as soon as their
/// closing parenthesis has been read.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    fn current(&mut self) -> Result<Token, ParseError> {
        self.lexer.current().cloned()
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.lexer.next()?;
        Ok(())
    }

    fn check(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.lexer.current()?.is(kind))
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.current()?;
        if !token.is(expected) {
            return Err(unexpected(token, expected.describe()));
        }
        self.advance()?;
        Ok(token)
    }

    /// Parse primary expressions: predicate calls, groups and negations
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current()?;
        match token.kind {
            TokenKind::Ident => self.parse_predicate(token),
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_or()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Not => {
                self.advance()?;
                let operand = self.parse_primary()?;
                Ok(Expr::Not(Box::new(operand)))
            }
            _ => Err(unexpected(token, "a predicate, '(' or '!'")),
        }
    }

    fn parse_argument(&mut self) -> Result<Token, ParseError> {
        let token = self.current()?;
        match token.kind {
            TokenKind::Number | TokenKind::String => {
                self.advance()?;
                Ok(token)
            }
            TokenKind::Ident => Err(ParseError::new(
                format!(
                    "expected a number or string argument but found {} (did you forget to quote a string?)",
                    token
                ),
                token,
            )),
            _ => Err(unexpected(token, "a number or string argument")),
        }
    }

    fn parse_predicate(&mut self, name: Token) -> Result<Expr, ParseError> {
        self.advance()?; // name
        self.expect(TokenKind::LParen)?;

        let mut arg_tokens = Vec::new();
        if !self.check(TokenKind::RParen)? {
            loop {
                arg_tokens.push(self.parse_argument()?);
                if !self.check(TokenKind::Comma)? {
                    break;
                }
                self.advance()?;
            }
        }
        let close = self.expect(TokenKind::RParen)?;

        let predicate = ZonePredicate::lookup(name.text()).ok_or_else(|| {
            ParseError::new(format!("unknown predicate '{}'", name.text()), name.clone())
        })?;

        let parameters = predicate.parameters();
        if arg_tokens.len() != parameters.len() {
            return Err(ParseError::new(
                format!(
                    "{} expects {} but {} given",
                    predicate,
                    count(parameters.len(), "argument", "arguments"),
                    count(arg_tokens.len(), "was", "were"),
                ),
                close,
            ));
        }

        for (index, (token, parameter)) in arg_tokens.iter().zip(parameters).enumerate() {
            if !parameter.kind.accepts(token.kind) {
                return Err(ParseError::new(
                    format!(
                        "{}: argument {} expects a {}",
                        predicate,
                        index + 1,
                        parameter.kind
                    ),
                    token.clone(),
                ));
            }
        }

        let mut args = arg_tokens
            .iter()
            .map(literal)
            .collect::<Result<Vec<_>, _>>()?;

        predicate.validate(&mut args).map_err(|err| {
            let token = arg_tokens.get(err.index).cloned().unwrap_or(close);
            ParseError::new(format!("{}: {}", predicate, err), token)
        })?;

        Ok(Expr::Predicate(PredicateCall {
            predicate,
            name: name.text().to_string(),
            args,
        }))
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_primary()?;
        let mut rest = Vec::new();

        while self.check(TokenKind::And)? {
            self.advance()?;
            rest.push(self.parse_primary()?);
        }
        Ok(fold(first, rest, Expr::And))
    }

    fn parse_xor(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_and()?;
        let mut rest = Vec::new();

        while self.check(TokenKind::Xor)? {
            self.advance()?;
            rest.push(self.parse_and()?);
        }
        Ok(fold(first, rest, Expr::Xor))
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_xor()?;
        let mut rest = Vec::new();

        while self.check(TokenKind::Or)? {
            self.advance()?;
            rest.push(self.parse_xor()?);
        }
        Ok(fold(first, rest, Expr::Or))
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    /// Parse a complete specification; trailing input is an error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::End)?;
        Ok(expr)
    }
}

/// Compile specification text into a reusable expression tree.
///
/// # Examples
///
/// ```
/// use zonespec::{parse, Expr};
///
/// let expr = parse(r#"circle(0,0,500) & !biome("DESERT")"#).unwrap();
/// assert!(matches!(expr, Expr::And(ref children) if children.len() == 2));
///
/// let err = parse("circle(0,0,-5)").unwrap_err();
/// assert_eq!(err.message, "circle: radius must be greater than 0");
/// ```
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let expr = Parser::new(Lexer::new(text)).parse()?;
    debug!(spec = text, nodes = expr.node_count(), "parsed zone specification");
    Ok(expr)
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn unexpected(token: Token, expected: &str) -> ParseError {
    let message = if token.is(TokenKind::End) {
        format!("unexpected end of input, expected {}", expected)
    } else {
        format!("expected {} but found {}", expected, token)
    };
    ParseError::new(message, token)
}

fn fold(first: Expr, mut rest: Vec<Expr>, build: fn(Vec<Expr>) -> Expr) -> Expr {
    if rest.is_empty() {
        return first;
    }
    rest.insert(0, first);
    build(rest)
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    match n {
        1 => format!("1 {}", singular),
        _ => format!("{} {}", n, plural),
    }
}

fn literal(token: &Token) -> Result<Expr, ParseError> {
    match token.kind {
        TokenKind::Number => match token.text().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Expr::Number(n)),
            Ok(_) => Err(ParseError::new("number out of range", token.clone())),
            Err(_) => Err(ParseError::new(
                format!("invalid number {}", token),
                token.clone(),
            )),
        },
        _ => Ok(Expr::String(token.text().to_string())),
    }
}
