//! Merge command implementation
//!
//! Runs the whole pipeline strictly in sequence:
//! load primary, index primary, load secondary, index secondary, merge, write.
//! Any error aborts the run before the output file is touched.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{MergeArgs, SummaryFormat};
use crate::error::{Result, UnionError};
use crate::index::RecordIndex;
use crate::loader::load_jsonl;
use crate::merge::{MergeStats, merge};
use crate::record::display_key;
use crate::ui::{ConsoleReporter, Reporter, Verbosity};
use crate::writer::write_jsonl;

const PRIMARY_LABEL: &str = "primary";
const SECONDARY_LABEL: &str = "secondary";

/// Outcome of a merge run, used to render the summary
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    #[serde(flatten)]
    pub stats: MergeStats,
    /// Records dropped for a missing key, per dataset
    pub dropped_primary: usize,
    pub dropped_secondary: usize,
    /// Output file, `None` on a dry run
    pub output: Option<PathBuf>,
    /// Key values of the first merged records
    #[serde(skip)]
    pub preview: Vec<String>,
}

/// Run merge command
pub fn run(args: MergeArgs, verbosity: Verbosity) -> Result<()> {
    let mut reporter = ConsoleReporter::new(verbosity);
    let (_, summary) = execute(&args, &mut reporter)?;
    print!("{summary}");
    Ok(())
}

/// Execute the merge pipeline, reporting progress through `reporter`.
///
/// Returns the report together with its rendered stdout summary. The summary
/// is rendered before the output file is written, so a run that fails never
/// leaves a freshly written output behind.
pub fn execute(args: &MergeArgs, reporter: &mut dyn Reporter) -> Result<(MergeReport, String)> {
    let primary = load_index(&args.primary, &args.key, PRIMARY_LABEL, reporter)?;
    let secondary = load_index(&args.secondary, &args.key, SECONDARY_LABEL, reporter)?;

    reporter.status(&format!(
        "After filtering: {} {PRIMARY_LABEL}, {} {SECONDARY_LABEL} records",
        primary.len(),
        secondary.len()
    ));

    let dropped_primary = primary.dropped();
    let dropped_secondary = secondary.dropped();
    let (merged, stats) = merge(primary, secondary);

    let preview = merged
        .records()
        .take(args.preview)
        .filter_map(|record| display_key(record, &args.key))
        .map(str::to_string)
        .collect();

    let report = MergeReport {
        stats,
        dropped_primary,
        dropped_secondary,
        output: (!args.dry_run).then(|| args.output_path()),
        preview,
    };
    let summary = render_summary(&report, args.summary)?;

    match &report.output {
        None => reporter.status("Dry run: no output written"),
        Some(target) => {
            reporter.status(&format!(
                "Saving {} merged records to {}...",
                merged.len(),
                target.display()
            ));
            write_jsonl(merged.records(), target)?;
            reporter.status("Done!");
        }
    }

    Ok((report, summary))
}

fn load_index(
    path: &std::path::Path,
    key: &str,
    label: &str,
    reporter: &mut dyn Reporter,
) -> Result<RecordIndex> {
    reporter.status(&format!("Loading {label} records from {}...", path.display()));
    let dataset = load_jsonl(path)?;
    reporter.status(&format!("Loaded {} {label} records.", dataset.len()));

    let index = RecordIndex::build(dataset, key, label, reporter)?;
    if index.overwritten() > 0 {
        reporter.detail(&format!(
            "{} {label} records replaced earlier ones with the same key",
            index.overwritten()
        ));
    }
    reporter.detail(&format!(
        "Indexed {} {label} records under {} keys",
        index.indexed(),
        index.len()
    ));
    Ok(index)
}

/// Render the stdout summary for a finished run
pub fn render_summary(report: &MergeReport, format: SummaryFormat) -> Result<String> {
    match format {
        SummaryFormat::Json => {
            let mut line = serde_json::to_string(report).map_err(|e| UnionError::SummaryFailed {
                reason: e.to_string(),
            })?;
            line.push('\n');
            Ok(line)
        }
        SummaryFormat::Text => Ok(render_text_summary(report)),
    }
}

fn render_text_summary(report: &MergeReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    let _ = writeln!(out, "Union contains {} records:", stats.total);
    let _ = writeln!(out, "- {} from {PRIMARY_LABEL} dataset", stats.primary);
    let _ = writeln!(
        out,
        "- {} unique records from {SECONDARY_LABEL} dataset",
        stats.unique_secondary
    );
    let _ = writeln!(
        out,
        "- {} duplicate records (in both datasets)",
        stats.duplicates
    );

    if !report.preview.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Examples from the merged data:");
        for (i, name) in report.preview.iter().enumerate() {
            let _ = writeln!(out, "{}. {name}", i + 1);
        }
    }

    out
}
