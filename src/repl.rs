use crate::pipeline::{self, Options};
use std::env;
use std::io::{self, Write};

static PROMPT: &str = ">> ";

/// REPL settings, read from the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    pub options: Options,
    pub show_tokens: bool,
    pub show_ast: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let max_depth = match env::var("SCHEME_MAX_DEPTH") {
            Ok(value) => match value.parse() {
                Ok(depth) => Some(depth),
                Err(_) => {
                    eprintln!("ignoring SCHEME_MAX_DEPTH={:?}: not a number", value);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            options: Options { max_depth },
            show_tokens: env::var("SCHEME_SHOW_TOKENS").is_ok(),
            show_ast: env::var("SCHEME_SHOW_AST").is_ok(),
        }
    }
}

pub fn start(config: Config) {
    loop {
        print!("{}", PROMPT);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let outcome = pipeline::run_with(&line, config.options);

        if config.show_tokens {
            for token in outcome.tokens.iter() {
                println!("\t{}", token);
            }
        }

        match outcome.ast {
            Err(err) => println!("\t{}", err),
            Ok(None) => {}
            Ok(Some(ast)) => {
                if config.show_ast {
                    println!("AST: {}", ast);
                }
                match outcome.value {
                    Some(Ok(val)) => println!("{}", val),
                    Some(Err(err)) => println!("ERROR: {}", err),
                    None => {}
                }
            }
        }
    }
}
