//! Bookshelf: interactive book library entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse command-line flags
//!   3. Load config and apply env / flag overrides
//!   4. Init logger at the configured level
//!   5. Build the configured store and run the shell until `exit`

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing::info;

use bookshelf::config;
use bookshelf::error::AppError;
use bookshelf::library::stores;
use bookshelf::logger;
use bookshelf::{LibraryManager, SessionEnd, Shell, TracingSink};

const USAGE: &str = "\
usage: bookshelf [--config <path>] [--store <type>]

Flags:
  --config <path>   config file (default: config/default.toml)
  --store <type>    store type: basic | catalog (overrides config)
  --help, -h        print this help

Commands at the prompt: add, remove, show, search, exit";

// ── CLI arg parsing ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    store: Option<String>,
}

enum ArgsOutcome {
    Run(Args),
    Help,
    Invalid(String),
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> ArgsOutcome {
    let mut args = Args::default();
    let mut iter = raw.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return ArgsOutcome::Help,
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => return ArgsOutcome::Invalid("--config requires a path".into()),
            },
            "--store" => match iter.next() {
                Some(store) => args.store = Some(store),
                None => return ArgsOutcome::Invalid("--store requires a type".into()),
            },
            other => return ArgsOutcome::Invalid(format!("unknown argument: {other}")),
        }
    }
    ArgsOutcome::Run(args)
}

fn main() {
    // Load .env if present; ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = match parse_args(std::env::args().skip(1)) {
        ArgsOutcome::Run(args) => args,
        ArgsOutcome::Help => {
            println!("{USAGE}");
            return;
        }
        ArgsOutcome::Invalid(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let cli = config::Overrides { log_level: None, store: args.store };
    let config = config::load(args.config.as_deref(), cli)?;

    logger::parse_level(&config.log_level)?;
    let prefer_level = std::env::var_os("BOOKSHELF_LOG_LEVEL").is_some();
    logger::init(&config.log_level, prefer_level, config.log_file.as_deref())?;

    info!(
        name = %config.name,
        store = %config.library.store,
        log_level = %config.log_level,
        "config loaded"
    );

    let library = stores::build(&config.library.store)?;
    let mut manager = LibraryManager::new(library, Arc::new(TracingSink));

    let stdin = std::io::stdin();
    let mut shell = Shell::new(stdin.lock(), std::io::stdout(), config.shell.echo_prompts);
    match shell.run(&mut manager)? {
        SessionEnd::Exit => info!("session ended"),
        SessionEnd::InputClosed => info!("session ended at end of input"),
    }
    Ok(())
}
