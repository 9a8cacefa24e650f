pub mod args;
mod print;
pub mod repl;
