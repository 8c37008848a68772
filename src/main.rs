use std::{fs::File, io, path::PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use account_ledger::{
    Engine, ingestion::CsvScript, menu::MenuSource, output::ConsoleReporter,
};

/// Single-account ledger driven from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "account_ledger", version, about)]
struct Args {
    /// Replay operations from a CSV file (`type,amount`) instead of prompting
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the session transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let reporter = ConsoleReporter::new(io::stdout());

    match args.script {
        Some(path) => {
            info!(path = %path.display(), "replaying script");
            let file = File::open(&path)?;
            Engine::new(CsvScript::new(file), reporter).process()?;
        }
        None => {
            let menu = MenuSource::new(io::stdin().lock(), io::stdout());
            Engine::new(menu, reporter).process()?;
        }
    }

    Ok(())
}
