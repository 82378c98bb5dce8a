use crate::ast::Node;
use crate::token::{Lexeme, Token, TokenType};

mod parse_error;
pub use parse_error::ParseError;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses the first expression in `tokens`. Anything after it is ignored.
pub fn parse(tokens: Vec<Token>) -> Result<Option<Node>> {
    Parser::new(tokens).parse()
}

pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    cur_token: Token,
    max_depth: Option<usize>,
    depth: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new<T: IntoIterator<Item = Token, IntoIter = I>>(tokens: T) -> Self {
        let mut tokens = tokens.into_iter();
        let cur_token = tokens
            .next()
            .unwrap_or_else(|| Token::new(Lexeme::EndOfInput, 1, 1));

        Self {
            tokens,
            cur_token,
            max_depth: None,
            depth: 0,
        }
    }

    /// Rejects expressions nested deeper than `max_depth`; `None` means
    /// unlimited.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Advances and returns the token that was current. A stream that ends
    /// without `EndOfInput` behaves as if it had one.
    fn next_token(&mut self) -> Token {
        let (line, column) = (self.cur_token.line, self.cur_token.column);
        let next = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::new(Lexeme::EndOfInput, line, column));
        std::mem::replace(&mut self.cur_token, next)
    }

    pub fn parse(mut self) -> Result<Option<Node>> {
        if self.cur_token.is(TokenType::EndOfInput) {
            return Ok(None);
        }
        self.parse_expression().map(Some)
    }

    fn parse_expression(&mut self) -> Result<Node> {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                return Err(ParseError::TooDeeplyNested {
                    limit,
                    token: self.cur_token.clone(),
                });
            }
        }

        self.depth += 1;
        let node = match self.cur_token.token_type() {
            TokenType::LeftParen => self.parse_list(),
            TokenType::Quote => self.parse_quote(),
            TokenType::EndOfInput => Err(ParseError::UnexpectedEndOfInput {
                token: self.cur_token.clone(),
            }),
            _ => self.parse_atom(),
        };
        self.depth -= 1;
        node
    }

    fn parse_list(&mut self) -> Result<Node> {
        self.expect(TokenType::LeftParen)?;

        let mut elements = vec![];
        while !self.cur_token.is(TokenType::RightParen) {
            if self.cur_token.is(TokenType::EndOfInput) {
                return Err(ParseError::UnclosedParenthesis {
                    token: self.cur_token.clone(),
                });
            }
            elements.push(self.parse_expression()?);
        }

        self.expect(TokenType::RightParen)?;
        Ok(Node::List(elements))
    }

    fn parse_quote(&mut self) -> Result<Node> {
        self.expect(TokenType::Quote)?;
        Ok(Node::quote(self.parse_expression()?))
    }

    fn parse_atom(&mut self) -> Result<Node> {
        let token = self.next_token();

        Ok(match token.lexeme {
            Lexeme::Number(n) => Node::Number(n),
            Lexeme::String(s) => Node::String(s),
            Lexeme::Boolean(b) => Node::Boolean(b),
            Lexeme::Symbol(name) => Node::Symbol(name),
            lexeme => {
                return Err(ParseError::UnexpectedToken {
                    token: Token { lexeme, ..token },
                })
            }
        })
    }

    fn expect(&mut self, expected: TokenType) -> Result<Token> {
        if self.cur_token.is(expected) {
            Ok(self.next_token())
        } else {
            Err(ParseError::TokenMismatch {
                expected,
                got: self.cur_token.clone(),
            })
        }
    }
}
