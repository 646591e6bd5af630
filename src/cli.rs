//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::record::DEFAULT_KEY_FIELD;

/// File name used for the merged output when `--output` is not given
pub const DEFAULT_OUTPUT_FILE: &str = "merged_union.jsonl";

/// jsonl-union - merge two JSONL datasets by a case-insensitive name
#[derive(Parser, Debug)]
#[command(
    name = "jsonl-union",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge two line-delimited JSON datasets without duplicates",
    long_about = "jsonl-union reads two line-delimited JSON files, indexes each by the \
                  lower-cased value of a key field (`name` by default) and writes their \
                  union. Records from the first file win whenever both files share a key.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  jsonl-union merge myths.jsonl fake_news.jsonl\n    \
                  jsonl-union merge myths.jsonl fake_news.jsonl -o union.jsonl\n    \
                  jsonl-union merge a.jsonl b.jsonl --key title --summary json"
)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge two datasets into one
    Merge(MergeArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How the merge summary is printed on stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// Human-readable counts and example names
    #[default]
    Text,
    /// Counts as a single JSON object
    Json,
}

/// Arguments for the merge command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Merge, writing merged_union.jsonl next to the first file:\n    \
                  jsonl-union merge myths.jsonl fake_news.jsonl\n\n\
                  Merge into an explicit output file:\n    \
                  jsonl-union merge myths.jsonl fake_news.jsonl -o union.jsonl\n\n\
                  Deduplicate by a different field:\n    \
                  jsonl-union merge a.jsonl b.jsonl --key title\n\n\
                  Only show what would be merged:\n    \
                  jsonl-union merge a.jsonl b.jsonl --dry-run")]
pub struct MergeArgs {
    /// Priority dataset; its records win on duplicate keys
    pub primary: PathBuf,

    /// Secondary dataset; only fills keys missing from the primary
    pub secondary: PathBuf,

    /// Output file (defaults to merged_union.jsonl beside the primary dataset)
    #[arg(long, short = 'o', env = "JSONL_UNION_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Field holding the case-insensitive identity key
    #[arg(long, short = 'k', default_value = DEFAULT_KEY_FIELD)]
    pub key: String,

    /// Number of merged names to list after the summary (0 disables)
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub preview: usize,

    /// Summary format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,

    /// Merge and report, but do not write the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl MergeArgs {
    /// Resolve the output path, falling back to the primary dataset's directory
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.primary.parent().map_or_else(
                || PathBuf::from(DEFAULT_OUTPUT_FILE),
                |dir| dir.join(DEFAULT_OUTPUT_FILE),
            ),
        }
    }
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    jsonl-union completions --shell bash > ~/.bash_completion.d/jsonl-union\n\n\
                  Generate zsh completions:\n    jsonl-union completions --shell zsh > ~/.zfunc/_jsonl-union\n\n\
                  Generate fish completions:\n    jsonl-union completions --shell fish > ~/.config/fish/completions/jsonl-union.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
