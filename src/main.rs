use std::io;

use clap::{ArgAction, Parser};
use log::{LevelFilter, error};
use quadcalc::{
    run_session,
    session::config::{DEFAULT_QUIT_TOKEN, SessionConfig},
};

/// quadcalc is an interactive calculator for the four basic arithmetic
/// operations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input that ends the session when entered instead of an operator.
    #[arg(short, long, default_value = DEFAULT_QUIT_TOKEN)]
    quit_token: String,

    /// Do not print prompts. Useful when piping input into quadcalc.
    #[arg(short, long)]
    no_prompt: bool,

    /// Log more details to stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let mut config = SessionConfig::default().with_quit_token(&args.quit_token);
    if args.no_prompt {
        config = config.without_prompts();
    }

    if let Err(e) = run_session(io::stdin().lock(), io::stdout().lock(), config) {
        error!("console failure: {e:?}");
        eprintln!("quadcalc: {e}");
        std::process::exit(1);
    }
}
