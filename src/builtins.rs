use crate::value::{EvalError, Result, Value};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};

pub type BuiltinFn = fn(Vec<Value>) -> Result<Value>;

/// A named procedure from the standard table.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub fn new(name: &'static str, func: BuiltinFn) -> Self {
        Self { name, func }
    }

    pub fn apply(&self, args: Vec<Value>) -> Result<Value> {
        (self.func)(args)
    }
}

impl Debug for Builtin {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{}", n),
            Self::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

fn unary(fn_name: &'static str, args: Vec<Value>) -> Result<Value> {
    let got = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(x), None) => Ok(x),
        _ => Err(EvalError::IncorrectArity {
            fn_name,
            got,
            want: Arity::Exact(1),
        }),
    }
}

fn binary(fn_name: &'static str, args: Vec<Value>) -> Result<(Value, Value)> {
    let got = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next()) {
        (Some(x), Some(y), None) => Ok((x, y)),
        _ => Err(EvalError::IncorrectArity {
            fn_name,
            got,
            want: Arity::Exact(2),
        }),
    }
}

fn number(fn_name: &'static str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::UnsupportedArgType {
            fn_name,
            type_name: other.type_name(),
        }),
    }
}

/// Left fold over numeric arguments. Without a seed the first argument is
/// the initial accumulator, so at least one argument is required.
fn fold_numbers(
    fn_name: &'static str,
    args: Vec<Value>,
    seed: Option<f64>,
    op: fn(f64, f64) -> f64,
) -> Result<Value> {
    let mut numbers = args.iter().map(|arg| number(fn_name, arg));
    let init = match seed {
        Some(seed) => seed,
        None => match numbers.next() {
            Some(first) => first?,
            None => {
                return Err(EvalError::IncorrectArity {
                    fn_name,
                    got: 0,
                    want: Arity::AtLeast(1),
                })
            }
        },
    };

    numbers
        .try_fold(init, |acc, n| n.map(|n| op(acc, n)))
        .map(Value::Number)
}

fn add(args: Vec<Value>) -> Result<Value> {
    fold_numbers("+", args, Some(0.0), |x, y| x + y)
}

fn subtract(args: Vec<Value>) -> Result<Value> {
    fold_numbers("-", args, None, |x, y| x - y)
}

fn multiply(args: Vec<Value>) -> Result<Value> {
    fold_numbers("*", args, Some(1.0), |x, y| x * y)
}

fn divide(args: Vec<Value>) -> Result<Value> {
    fold_numbers("/", args, None, |x, y| x / y)
}

fn equal(args: Vec<Value>) -> Result<Value> {
    let (x, y) = binary("=", args)?;
    Ok(Value::Boolean(x == y))
}

fn compare(
    fn_name: &'static str,
    args: Vec<Value>,
    numbers: fn(f64, f64) -> bool,
    strings: fn(&str, &str) -> bool,
) -> Result<Value> {
    match binary(fn_name, args)? {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Boolean(numbers(x, y))),
        (Value::String(x), Value::String(y)) => Ok(Value::Boolean(strings(&x, &y))),
        (Value::Number(_), other) | (Value::String(_), other) | (other, _) => {
            Err(EvalError::UnsupportedArgType {
                fn_name,
                type_name: other.type_name(),
            })
        }
    }
}

fn less_than(args: Vec<Value>) -> Result<Value> {
    compare("<", args, |x, y| x < y, |x, y| x < y)
}

fn greater_than(args: Vec<Value>) -> Result<Value> {
    compare(">", args, |x, y| x > y, |x, y| x > y)
}

fn cons(args: Vec<Value>) -> Result<Value> {
    Ok(Value::List(match binary("cons", args)? {
        (head, Value::List(mut tail)) => {
            tail.insert(0, head);
            tail
        }
        (head, tail) => vec![head, tail],
    }))
}

fn car(args: Vec<Value>) -> Result<Value> {
    match unary("car", args)? {
        Value::List(values) => values
            .into_iter()
            .next()
            .ok_or(EvalError::EmptyList { fn_name: "car" }),
        other => Err(EvalError::UnsupportedArgType {
            fn_name: "car",
            type_name: other.type_name(),
        }),
    }
}

fn cdr(args: Vec<Value>) -> Result<Value> {
    match unary("cdr", args)? {
        Value::List(values) => Ok(Value::List(values.into_iter().skip(1).collect())),
        other => Err(EvalError::UnsupportedArgType {
            fn_name: "cdr",
            type_name: other.type_name(),
        }),
    }
}

fn list(args: Vec<Value>) -> Result<Value> {
    Ok(Value::List(args))
}

fn is_null(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(match unary("null?", args)? {
        Value::List(values) => values.is_empty(),
        _ => false,
    }))
}

fn is_number(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(match unary("number?", args)? {
        Value::Number(_) => true,
        _ => false,
    }))
}

fn is_boolean(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(match unary("boolean?", args)? {
        Value::Boolean(_) => true,
        _ => false,
    }))
}

fn is_string(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(match unary("string?", args)? {
        Value::String(_) => true,
        _ => false,
    }))
}

/// Quoted symbols count, and so does any string that does not spell one of
/// the type names `number`, `boolean` or `string`.
fn is_symbol(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(match unary("symbol?", args)? {
        Value::Symbol(_) => true,
        Value::String(s) => !["number", "boolean", "string"].contains(&s.as_str()),
        _ => false,
    }))
}

fn not(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(!unary("not", args)?.truth_value()))
}

fn and(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(args.iter().all(Value::truth_value)))
}

fn or(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Boolean(args.iter().any(Value::truth_value)))
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, Builtin> = vec![
        Builtin::new("+", add),
        Builtin::new("-", subtract),
        Builtin::new("*", multiply),
        Builtin::new("/", divide),
        Builtin::new("=", equal),
        Builtin::new("<", less_than),
        Builtin::new(">", greater_than),
        Builtin::new("cons", cons),
        Builtin::new("car", car),
        Builtin::new("cdr", cdr),
        Builtin::new("list", list),
        Builtin::new("null?", is_null),
        Builtin::new("number?", is_number),
        Builtin::new("boolean?", is_boolean),
        Builtin::new("string?", is_string),
        Builtin::new("symbol?", is_symbol),
        Builtin::new("not", not),
        Builtin::new("and", and),
        Builtin::new("or", or),
    ]
    .into_iter()
    .map(|builtin| (builtin.name, builtin))
    .collect();
}

#[cfg(test)]
mod test {
    use super::*;

    fn call(name: &str, args: Vec<Value>) -> Result<Value> {
        BUILTINS[name].apply(args)
    }

    fn numbers(ns: &[f64]) -> Vec<Value> {
        ns.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_arithmetic() {
        let cases = vec![
            ("+", numbers(&[]), 0.0),
            ("+", numbers(&[1.0, 2.0, 3.5]), 6.5),
            ("-", numbers(&[10.0, 4.0, 1.0]), 5.0),
            ("-", numbers(&[5.0]), 5.0),
            ("*", numbers(&[]), 1.0),
            ("*", numbers(&[2.0, 3.0, 4.0]), 24.0),
            ("/", numbers(&[12.0, 2.0, 3.0]), 2.0),
            ("/", numbers(&[8.0]), 8.0),
        ];

        for (name, args, expected) in cases.into_iter() {
            assert_eq!(call(name, args), Ok(Value::Number(expected)), "({} ...)", name);
        }
    }

    #[test]
    fn test_unseeded_folds_need_an_argument() {
        for name in vec!["-", "/"] {
            assert_eq!(
                call(name, vec![]),
                Err(EvalError::IncorrectArity {
                    fn_name: name,
                    got: 0,
                    want: Arity::AtLeast(1),
                })
            );
        }
    }

    #[test]
    fn test_arithmetic_rejects_non_numbers() {
        assert_eq!(
            call("+", vec![Value::from(1.0), Value::from("2")]),
            Err(EvalError::UnsupportedArgType {
                fn_name: "+",
                type_name: "STRING",
            })
        );
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert_eq!(
            call("/", numbers(&[1.0, 0.0])),
            Ok(Value::Number(f64::INFINITY))
        );
    }

    #[test]
    fn test_comparisons() {
        let cases = vec![
            ("=", numbers(&[1.0, 1.0]), true),
            ("=", vec![Value::from("a"), Value::from("a")], true),
            ("=", vec![Value::from(1.0), Value::from("1")], false),
            ("=", vec![Value::List(numbers(&[1.0, 2.0])), Value::List(numbers(&[1.0, 2.0]))], true),
            ("<", numbers(&[1.0, 2.0]), true),
            ("<", numbers(&[2.0, 2.0]), false),
            (">", numbers(&[3.0, 2.0]), true),
            (">", vec![Value::from("b"), Value::from("a")], true),
        ];

        for (name, args, expected) in cases.into_iter() {
            assert_eq!(call(name, args), Ok(Value::Boolean(expected)), "({} ...)", name);
        }
    }

    #[test]
    fn test_comparison_errors() {
        assert_eq!(
            call("<", vec![Value::from(1.0), Value::from(true)]),
            Err(EvalError::UnsupportedArgType {
                fn_name: "<",
                type_name: "BOOLEAN",
            })
        );
        assert_eq!(
            call("=", numbers(&[1.0])),
            Err(EvalError::IncorrectArity {
                fn_name: "=",
                got: 1,
                want: Arity::Exact(2),
            })
        );
    }

    #[test]
    fn test_list_operations() {
        assert_eq!(
            call("cons", vec![Value::from(1.0), Value::List(numbers(&[2.0, 3.0]))]),
            Ok(Value::List(numbers(&[1.0, 2.0, 3.0])))
        );
        assert_eq!(
            call("cons", numbers(&[1.0, 2.0])),
            Ok(Value::List(numbers(&[1.0, 2.0])))
        );
        assert_eq!(
            call("car", vec![Value::List(numbers(&[7.0, 8.0]))]),
            Ok(Value::from(7.0))
        );
        assert_eq!(
            call("cdr", vec![Value::List(numbers(&[7.0, 8.0]))]),
            Ok(Value::List(numbers(&[8.0])))
        );
        assert_eq!(
            call("cdr", vec![Value::List(vec![])]),
            Ok(Value::List(vec![]))
        );
        assert_eq!(
            call("list", numbers(&[1.0, 2.0])),
            Ok(Value::List(numbers(&[1.0, 2.0])))
        );
    }

    #[test]
    fn test_list_operation_errors() {
        assert_eq!(
            call("car", vec![Value::List(vec![])]),
            Err(EvalError::EmptyList { fn_name: "car" })
        );
        assert_eq!(
            call("cdr", vec![Value::from(1.0)]),
            Err(EvalError::UnsupportedArgType {
                fn_name: "cdr",
                type_name: "NUMBER",
            })
        );
        assert_eq!(
            call("car", vec![]),
            Err(EvalError::IncorrectArity {
                fn_name: "car",
                got: 0,
                want: Arity::Exact(1),
            })
        );
    }

    #[test]
    fn test_predicates() {
        let cases = vec![
            ("null?", Value::List(vec![]), true),
            ("null?", Value::List(numbers(&[1.0])), false),
            ("null?", Value::from(false), false),
            ("number?", Value::from(1.0), true),
            ("number?", Value::from("1"), false),
            ("boolean?", Value::from(false), true),
            ("boolean?", Value::from(0.0), false),
            ("string?", Value::from("s"), true),
            ("string?", Value::Symbol("s".to_owned()), false),
            ("symbol?", Value::Symbol("s".to_owned()), true),
            ("symbol?", Value::from("hello"), true),
            ("symbol?", Value::from("number"), false),
            ("symbol?", Value::from("string"), false),
            ("symbol?", Value::from(1.0), false),
        ];

        for (name, arg, expected) in cases.into_iter() {
            assert_eq!(
                call(name, vec![arg.clone()]),
                Ok(Value::Boolean(expected)),
                "({} {})",
                name,
                arg
            );
        }
    }

    #[test]
    fn test_logic() {
        let cases = vec![
            ("not", vec![Value::from(false)], true),
            ("not", vec![Value::from(0.0)], false),
            ("and", vec![], true),
            ("and", vec![Value::from(1.0), Value::from(true)], true),
            ("and", vec![Value::from(1.0), Value::from(false)], false),
            ("or", vec![], false),
            ("or", vec![Value::from(false), Value::from("x")], true),
            ("or", vec![Value::from(false), Value::from(false)], false),
        ];

        for (name, args, expected) in cases.into_iter() {
            assert_eq!(call(name, args), Ok(Value::Boolean(expected)), "({} ...)", name);
        }
    }
}
