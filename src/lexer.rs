use crate::token::{Lexeme, Token, TokenType};

pub struct Lexer {
    input: String,
    position: usize,
    line: usize,
    column: usize,
    finished: bool,
}

fn is_delimiter(c: char) -> bool {
    c == '(' || c == ')' || c.is_whitespace()
}

/// Parses the longest prefix of a digit/dot run that forms a float, so
/// `1.2.3` reads as `1.2`.
fn parse_number(text: &str) -> f64 {
    let end = text
        .match_indices('.')
        .nth(1)
        .map_or(text.len(), |(index, _)| index);
    // The run always starts with a digit, so the prefix is a valid float.
    text[..end].parse().unwrap_or_default()
}

/// Converts source text into tokens, always ending with `EndOfInput`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is(TokenType::EndOfInput);
        Some(token)
    }
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            position: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    fn ch(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn read_char(&mut self) {
        if let Some(c) = self.ch() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let lexeme = match self.ch() {
            None => Lexeme::EndOfInput,
            Some('(') => {
                self.read_char();
                Lexeme::LeftParen
            }
            Some(')') => {
                self.read_char();
                Lexeme::RightParen
            }
            Some('\'') => {
                self.read_char();
                Lexeme::Quote
            }
            Some('"') => Lexeme::String(self.read_string()),
            Some(c) if c.is_ascii_digit() => Lexeme::Number(parse_number(self.read_number())),
            Some(_) => Lexeme::from(self.read_symbol()),
        };
        Token::new(lexeme, line, column)
    }

    /// Reads a string literal verbatim. An unterminated literal runs to the
    /// end of input.
    fn read_string(&mut self) -> String {
        self.read_char();
        let start = self.position;
        while self.ch().map_or(false, |c| c != '"') {
            self.read_char();
        }
        let end = self.position;
        self.read_char();
        self.input[start..end].to_owned()
    }

    fn read_number(&mut self) -> &str {
        let start = self.position;
        while self.ch().map_or(false, |c| c.is_ascii_digit() || c == '.') {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn read_symbol(&mut self) -> &str {
        let start = self.position;
        while self.ch().map_or(false, |c| !is_delimiter(c)) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.ch() {
            if c == ';' {
                while self.ch().map_or(false, |c| c != '\n') {
                    self.read_char();
                }
            } else if c.is_whitespace() {
                self.read_char();
            } else {
                break;
            }
        }
    }
}
