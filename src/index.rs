//! Per-dataset key index
//!
//! Maps each normalized key to the record that carries it. Within a single
//! dataset a later record replaces an earlier one with the same key, but the
//! key keeps the position where it was first seen.

use indexmap::IndexMap;

use crate::error::{Result, record as record_error};
use crate::loader::Dataset;
use crate::record::{KeyField, Record, key_field, normalize_key};
use crate::ui::Reporter;

/// Records of one dataset keyed by lower-cased key field
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    entries: IndexMap<String, Record>,
    /// Records that carried a usable key, overwritten ones included
    indexed: usize,
    /// Records dropped for a missing or null key
    dropped: usize,
    /// Records that replaced an earlier record with the same key
    overwritten: usize,
}

impl RecordIndex {
    /// Index a dataset by `field`.
    ///
    /// Records whose key field is absent or null are reported through
    /// `reporter` and left out. A key field with any other non-text value
    /// fails the whole build.
    pub fn build(
        dataset: Dataset,
        field: &str,
        label: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<Self> {
        let mut index = RecordIndex::default();

        for entry in dataset.entries {
            let key = match key_field(&entry.record, field) {
                KeyField::Text(text) => normalize_key(text),
                KeyField::Missing => {
                    reporter.warn(&format!(
                        "Found a {label} record with missing or null '{field}' field ({}:{})",
                        dataset.path.display(),
                        entry.line
                    ));
                    index.dropped += 1;
                    continue;
                }
                KeyField::Invalid(value) => {
                    return Err(record_error::invalid_key(
                        &dataset.path,
                        entry.line,
                        field,
                        value,
                    ));
                }
            };

            index.indexed += 1;
            if index.entries.insert(key.clone(), entry.record).is_some() {
                index.overwritten += 1;
                reporter.detail(&format!(
                    "{label} line {} replaces an earlier record for '{key}'",
                    entry.line
                ));
            }
        }

        Ok(index)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn indexed(&self) -> usize {
        self.indexed
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key)
    }

    /// Consume the index, yielding its key → record map in index order
    pub fn into_entries(self) -> IndexMap<String, Record> {
        self.entries
    }
}
