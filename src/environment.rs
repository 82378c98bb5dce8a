use crate::builtins::BUILTINS;
use crate::value::{EvalError, Result, Value};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref STANDARD: Environment<'static> = {
        let mut env = Environment::new();
        for builtin in BUILTINS.values() {
            env.define(builtin.name, Value::Builtin(*builtin));
        }
        env
    };
}

/// One frame of bindings. Lookups fall through to the enclosing frame, and
/// a frame can only borrow frames that already exist, so chains are acyclic.
#[derive(Debug, Default, Clone)]
pub struct Environment<'a> {
    store: HashMap<String, Value>,
    outer: Option<&'a Environment<'a>>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// The shared root frame holding the builtin procedures.
    pub fn standard() -> &'static Environment<'static> {
        &STANDARD
    }

    pub fn with_enclosed(outer: &'a Environment<'a>) -> Self {
        Self {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store
            .get(name)
            .or_else(|| self.outer.and_then(|outer| outer.get(name)))
    }

    pub fn lookup(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| EvalError::UndefinedVariable {
            name: name.to_owned(),
        })
    }

    pub fn define(&mut self, name: &str, val: Value) {
        self.store.insert(name.to_owned(), val);
    }
}
