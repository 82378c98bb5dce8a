use crate::ast::Node;
use crate::builtins::Builtin;
use std::fmt::{self, Display, Formatter};

mod eval_error;
pub use eval_error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    /// A quoted symbol's name.
    Symbol(String),
    List(Vec<Value>),
    Builtin(Builtin),
    /// A syntax node passed through without evaluation: elements of a quoted
    /// list, and the tail of a list whose head is not callable.
    Node(Node),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Boolean(true) => write!(f, "#t"),
            Self::Boolean(false) => write!(f, "#f"),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::List(values) => {
                let values: Vec<String> = values.iter().map(Value::to_string).collect();

                write!(f, "({})", values.join(" "))
            }
            Self::Builtin(builtin) => write!(f, "#<procedure {}>", builtin.name),
            Self::Node(node) => write!(f, "{}", node),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        s.to_owned().into()
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::String(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Symbol(_) => "SYMBOL",
            Self::List(_) => "LIST",
            Self::Builtin(_) => "BUILTIN",
            Self::Node(_) => "SYNTAX",
        }
    }

    /// Everything except `#f` counts as true.
    pub fn truth_value(&self) -> bool {
        match self {
            Self::Boolean(false) => false,
            _ => true,
        }
    }
}
