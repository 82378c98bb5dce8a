use std::fmt;
use strum_macros::{Display, EnumDiscriminants};

#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(TokenType))]
pub enum Lexeme {
    // Delimiters
    LeftParen,
    RightParen,
    Quote,

    // Literals
    Number(f64),
    String(String),
    Boolean(bool),
    Symbol(String),

    EndOfInput,
}

impl From<&str> for Lexeme {
    fn from(text: &str) -> Self {
        match text {
            "#t" => Self::Boolean(true),
            "#f" => Self::Boolean(false),
            symbol => Self::Symbol(symbol.to_owned()),
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::LeftParen => write!(f, "LeftParen"),
            Self::RightParen => write!(f, "RightParen"),
            Self::Quote => write!(f, "Quote"),
            Self::Number(n) => write!(f, "Number({})", n),
            Self::String(s) => write!(f, "String({:?})", s),
            Self::Boolean(b) => write!(f, "Boolean({})", b),
            Self::Symbol(s) => write!(f, "Symbol({})", s),
            Self::EndOfInput => write!(f, "EndOfInput"),
        }
    }
}

/// A lexeme together with the 1-based line and column of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub lexeme: Lexeme,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}:{}", self.lexeme, self.line, self.column)
    }
}

impl Token {
    pub fn new(lexeme: Lexeme, line: usize, column: usize) -> Self {
        Self {
            lexeme,
            line,
            column,
        }
    }

    pub fn token_type(&self) -> TokenType {
        TokenType::from(&self.lexeme)
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type() == token_type
    }
}
