use crate::ast::Node;
use crate::environment::Environment;
use crate::evaluator::Evaluator;
use crate::lexer::tokenize;
use crate::parser::{ParseError, Parser};
use crate::token::Token;
use crate::value::{EvalError, Value};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Options {
    /// Nesting limit applied to both parsing and evaluation.
    pub max_depth: Option<usize>,
}

/// Everything one run of the pipeline produced. Parsing and evaluation are
/// reported separately so a tree that parsed can still be shown when
/// evaluating it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub tokens: Vec<Token>,
    pub ast: Result<Option<Node>, ParseError>,
    /// `None` unless parsing produced a tree.
    pub value: Option<Result<Value, EvalError>>,
}

pub fn run(source: &str) -> Outcome {
    run_with(source, Options::default())
}

pub fn run_with(source: &str, options: Options) -> Outcome {
    let tokens = tokenize(source);
    let ast = Parser::new(tokens.clone())
        .with_max_depth(options.max_depth)
        .parse();

    let value = match &ast {
        Ok(Some(node)) => {
            let env = Environment::with_enclosed(Environment::standard());
            Some(Evaluator::new(options.max_depth).eval(node, &env))
        }
        _ => None,
    };

    Outcome { tokens, ast, value }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::TokenType;

    #[test]
    fn test_successful_run() {
        let outcome = run("(+ (* 2 4) 3) ; trailing comment");

        assert_eq!(outcome.tokens.len(), 10);
        assert_eq!(
            outcome.ast.map(|ast| ast.map(|node| node.to_string())),
            Ok(Some("(+ (* 2 4) 3)".to_owned()))
        );
        assert_eq!(outcome.value, Some(Ok(Value::from(11.0))));
    }

    #[test]
    fn test_empty_source() {
        let outcome = run("   ");

        assert_eq!(outcome.ast, Ok(None));
        assert_eq!(outcome.value, None);
    }

    #[test]
    fn test_parse_failure_skips_evaluation() {
        let outcome = run("(+ 1 2");

        match outcome.ast {
            Err(ParseError::UnclosedParenthesis { ref token }) => {
                assert!(token.is(TokenType::EndOfInput))
            }
            ref other => panic!("expected unclosed parenthesis, got {:?}", other),
        }
        assert_eq!(outcome.value, None);
    }

    #[test]
    fn test_evaluation_failure_keeps_tree() {
        let outcome = run("(foo 1)");

        assert_eq!(
            outcome.ast,
            Ok(Some(Node::List(vec![Node::symbol("foo"), Node::from(1.0)])))
        );
        assert_eq!(
            outcome.value,
            Some(Err(EvalError::UndefinedSymbol {
                name: "foo".to_owned()
            }))
        );
    }

    #[test]
    fn test_depth_option() {
        let options = Options { max_depth: Some(2) };

        assert_eq!(
            run_with("(list 1)", options).value,
            Some(Ok(Value::List(vec![Value::from(1.0)])))
        );
        match run_with("(list (list 1))", options).ast {
            Err(ParseError::TooDeeplyNested { limit: 2, .. }) => {}
            other => panic!("expected nesting error, got {:?}", other),
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let first = run("(list 1 \"a\")");
        let second = run("(list 1 \"a\")");

        assert_eq!(first, second);
    }
}
