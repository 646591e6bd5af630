//! Line-delimited JSON loading
//!
//! Each non-blank line of an input file must hold one JSON object. Blank
//! lines (after trimming whitespace) are skipped. The first malformed line
//! aborts the load; nothing is skipped silently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, fs as fs_error, record as record_error};
use crate::record::Record;

/// A record together with the input line it came from
#[derive(Debug, Clone)]
pub struct Entry {
    /// 1-based line number in the source file
    pub line: usize,
    pub record: Record,
}

/// Ordered records read from one input file
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path the records were read from
    pub path: PathBuf,
    /// Records in file order
    pub entries: Vec<Entry>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the records in file order
    #[allow(dead_code)]
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|entry| &entry.record)
    }
}

/// Load a JSONL file into a [`Dataset`]
pub fn load_jsonl(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| fs_error::read_failed(path, e))?;
    read_jsonl(BufReader::new(file), path)
}

/// Read JSONL records from any buffered reader. `path` is used for error
/// messages and recorded on the dataset.
pub fn read_jsonl<R: BufRead>(reader: R, path: &Path) -> Result<Dataset> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| fs_error::read_failed(path, format!("line {line_no}: {e}")))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(trimmed)
            .map_err(|e| record_error::parse_failed(path, line_no, e))?;
        let Value::Object(record) = value else {
            return Err(record_error::not_an_object(path, line_no));
        };

        entries.push(Entry {
            line: line_no,
            record,
        });
    }

    Ok(Dataset {
        path: path.to_path_buf(),
        entries,
    })
}
