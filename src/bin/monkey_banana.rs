use clap::Parser;
use heuristic_search::console::{self, Console, GridSessionOptions};
use heuristic_search::{FrontierPolicy, SearchConfig};
use std::io;
use std::process;

#[derive(Parser)]
#[command(name = "monkey-banana")]
#[command(about = "Find the cheapest route from the monkey to the banana on a grid")]
struct Args {
    /// Drop frontier nodes made stale by a cheaper route instead of expanding them
    #[arg(long)]
    discard_stale: bool,

    /// Print the cells along the route
    #[arg(long)]
    show_path: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let frontier_policy = if args.discard_stale {
        FrontierPolicy::DiscardStale
    } else {
        FrontierPolicy::ExpandStale
    };
    let options = GridSessionOptions {
        config: SearchConfig { frontier_policy },
        show_path: args.show_path,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Console::new(stdin.lock(), stdout.lock());

    let result = console::grid_session(&mut terminal, options);
    drop(terminal);

    match result {
        Ok(status) => process::exit(status.exit_code()),
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
