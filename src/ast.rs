use std::fmt::{self, Display, Formatter};

/// One parsed expression. Trees are built once by the parser and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    String(String),
    Boolean(bool),
    Symbol(String),
    /// A call or data list; element 0 is the head when evaluated as a call.
    List(Vec<Node>),
    Quote(Box<Node>),
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            // Literals too large for f64 read as infinity; print a digit run
            // that reads back the same way.
            Self::Number(n) if n.is_infinite() => write!(f, "1{}", "0".repeat(309)),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Boolean(true) => write!(f, "#t"),
            Self::Boolean(false) => write!(f, "#f"),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::List(elements) => {
                let elements: Vec<String> = elements.iter().map(Node::to_string).collect();

                write!(f, "({})", elements.join(" "))
            }
            Self::Quote(quoted) => write!(f, "'{}", quoted),
        }
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl Node {
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_owned())
    }

    pub fn quote(node: Node) -> Self {
        Self::Quote(Box::new(node))
    }
}
