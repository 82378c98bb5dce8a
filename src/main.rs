use scheme_pipeline::repl;

fn main() {
    println!("Hello! This is a small Scheme evaluator.");
    println!("Feel free to type in expressions");
    repl::start(repl::Config::from_env())
}
