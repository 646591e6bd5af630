//! jsonl-union - merge two JSONL datasets
//!
//! Reads two line-delimited JSON files, indexes each by the lower-cased value
//! of a key field and writes their union. Records from the first file take
//! priority whenever both files carry the same key.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod index;
mod loader;
mod merge;
mod record;
mod ui;
mod writer;

use cli::{Cli, Commands};
use ui::Verbosity;

fn main() {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Merge(args) => commands::merge::run(args, verbosity),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
