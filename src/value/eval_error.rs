use crate::builtins::Arity;
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EvalError

    UndefinedSymbol{name: String} = "undefined symbol: {name}",
    UndefinedVariable{name: String} = "undefined variable: {name}",
    IncorrectArity{fn_name: &'static str, got: usize, want: Arity} = "wrong number of arguments to `{fn_name}`. got={got}, want={want}",
    UnsupportedArgType{fn_name: &'static str, type_name: &'static str} = "argument to `{fn_name}` not supported, got {type_name}",
    EmptyList{fn_name: &'static str} = "`{fn_name}` applied to an empty list",
    RecursionLimit{limit: usize} = "evaluation nested deeper than {limit} levels",
}
