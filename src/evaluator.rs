use crate::ast::Node;
use crate::environment::Environment;
use crate::value::{EvalError, Result, Value};
use std::iter;

/// Evaluates `node` with no recursion limit.
pub fn eval(node: &Node, env: &Environment) -> Result<Value> {
    Evaluator::default().eval(node, env)
}

#[derive(Debug, Default)]
pub struct Evaluator {
    max_depth: Option<usize>,
    depth: usize,
}

impl Evaluator {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            depth: 0,
        }
    }

    pub fn eval(&mut self, node: &Node, env: &Environment) -> Result<Value> {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                return Err(EvalError::RecursionLimit { limit });
            }
        }

        self.depth += 1;
        let result = self.eval_node(node, env);
        self.depth -= 1;
        result
    }

    fn eval_node(&mut self, node: &Node, env: &Environment) -> Result<Value> {
        match node {
            Node::Number(n) => Ok(Value::Number(*n)),
            Node::String(s) => Ok(Value::String(s.clone())),
            Node::Boolean(b) => Ok(Value::Boolean(*b)),
            Node::Symbol(name) => env
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedSymbol { name: name.clone() }),
            Node::List(elements) => self.eval_list(elements, env),
            Node::Quote(quoted) => Ok(quoted_value(quoted)),
        }
    }

    /// Applies the head when it evaluates to a procedure. Otherwise the list
    /// is data: the evaluated head followed by the tail nodes as written.
    fn eval_list(&mut self, elements: &[Node], env: &Environment) -> Result<Value> {
        let (head, tail) = match elements.split_first() {
            Some(parts) => parts,
            None => return Ok(Value::List(vec![])),
        };

        match self.eval(head, env)? {
            Value::Builtin(builtin) => {
                let args = tail
                    .iter()
                    .map(|arg| self.eval(arg, env))
                    .collect::<Result<Vec<_>>>()?;
                builtin.apply(args)
            }
            head => Ok(Value::List(
                iter::once(head)
                    .chain(tail.iter().cloned().map(Value::Node))
                    .collect(),
            )),
        }
    }
}

/// The raw payload of a quoted node. Nested expressions stay unevaluated.
fn quoted_value(node: &Node) -> Value {
    match node {
        Node::Number(n) => Value::Number(*n),
        Node::String(s) => Value::String(s.clone()),
        Node::Boolean(b) => Value::Boolean(*b),
        Node::Symbol(name) => Value::Symbol(name.clone()),
        Node::List(elements) => Value::List(elements.iter().cloned().map(Value::Node).collect()),
        Node::Quote(inner) => Value::Node((**inner).clone()),
    }
}
