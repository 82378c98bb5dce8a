use crate::token::{Token, TokenType};
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ParseError

    UnclosedParenthesis{token: Token} = "unclosed parenthesis: reached {token}",
    UnexpectedEndOfInput{token: Token} = "unexpected end of input at {token}",
    UnexpectedToken{token: Token} = "unexpected token: {token}",
    TokenMismatch{expected: TokenType, got: Token} = "expected {expected}, got {got}",
    TooDeeplyNested{limit: usize, token: Token} = "expression nested deeper than {limit} levels at {token}",
}

impl ParseError {
    /// The token the parser was looking at when it gave up.
    pub fn token(&self) -> &Token {
        match self {
            Self::UnclosedParenthesis { token }
            | Self::UnexpectedEndOfInput { token }
            | Self::UnexpectedToken { token }
            | Self::TooDeeplyNested { token, .. } => token,
            Self::TokenMismatch { got, .. } => got,
        }
    }
}
