pub mod ast;
pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod repl;
pub mod token;
pub mod value;

pub use ast::Node;
pub use environment::Environment;
pub use evaluator::{eval, Evaluator};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, ParseError, Parser};
pub use pipeline::{run, run_with, Options, Outcome};
pub use token::{Lexeme, Token, TokenType};
pub use value::{EvalError, Value};
