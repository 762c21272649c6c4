use clap::Parser;
use heuristic_search::console::{self, Console};
use std::io;
use std::process;

#[derive(Parser)]
#[command(name = "n-queens")]
#[command(about = "Place N queens on an N by N board so that none attack each other")]
struct Args {}

fn main() {
    env_logger::init();
    let _args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Console::new(stdin.lock(), stdout.lock());

    let result = console::queens_session(&mut terminal);
    drop(terminal);

    match result {
        Ok(status) => process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
