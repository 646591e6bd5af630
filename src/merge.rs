//! Union of two record indexes
//!
//! The primary index is taken whole. Secondary records only fill keys the
//! primary does not have; on a collision the primary record is kept as is.
//!
//! ```text
//! Primary:   {"foo": {"name":"Foo","x":1}}
//! Secondary: {"foo": {"name":"foo","x":2}, "bar": {"name":"Bar","x":3}}
//! Merged:    {"foo": {"name":"Foo","x":1}, "bar": {"name":"Bar","x":3}}
//!                     ^^^^^^^^^^^^^^^^^^^
//!                     primary wins on "foo"
//! ```
//!
//! Merged order is every primary key in primary order, then each newly added
//! secondary key in secondary order.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::index::RecordIndex;
use crate::record::Record;

/// Counts describing a merge
///
/// `primary + unique_secondary == total` and
/// `unique_secondary + duplicates == |secondary index|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MergeStats {
    /// Keys taken from the primary index
    pub primary: usize,
    /// Secondary keys absent from the primary index
    pub unique_secondary: usize,
    /// Secondary keys already present in the primary index
    pub duplicates: usize,
    /// Keys in the merged set
    pub total: usize,
}

/// Key → record map produced by [`merge`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedSet {
    records: IndexMap<String, Record>,
}

impl MergedSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    /// Keys in merged order
    #[allow(dead_code)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in merged order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

/// Merge two indexes, giving `primary` priority on key collisions
pub fn merge(primary: RecordIndex, secondary: RecordIndex) -> (MergedSet, MergeStats) {
    let mut records = primary.into_entries();
    let mut stats = MergeStats {
        primary: records.len(),
        ..MergeStats::default()
    };

    for (key, record) in secondary.into_entries() {
        match records.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                stats.unique_secondary += 1;
            }
            Entry::Occupied(_) => stats.duplicates += 1,
        }
    }

    stats.total = records.len();
    (MergedSet { records }, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_jsonl;
    use crate::ui::SilentReporter;
    use serde_json::json;
    use std::io::Cursor;
    use std::path::Path;

    fn index(content: &str) -> RecordIndex {
        let dataset = read_jsonl(Cursor::new(content), Path::new("set.jsonl")).unwrap();
        RecordIndex::build(dataset, "name", "test", &mut SilentReporter).unwrap()
    }

    fn assert_count_identity(stats: &MergeStats, secondary_len: usize, merged: &MergedSet) {
        assert_eq!(stats.primary + stats.unique_secondary, merged.len());
        assert_eq!(stats.unique_secondary + stats.duplicates, secondary_len);
        assert_eq!(stats.total, merged.len());
    }

    #[test]
    fn test_primary_wins_on_collision() {
        let a = index("{\"name\":\"Foo\",\"x\":1}\n");
        let b = index("{\"name\":\"foo\",\"x\":2}\n{\"name\":\"Bar\",\"x\":3}\n");
        let b_len = b.len();

        let (merged, stats) = merge(a, b);

        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.get("foo").unwrap(),
            json!({"name": "Foo", "x": 1}).as_object().unwrap()
        );
        assert_eq!(
            merged.get("bar").unwrap(),
            json!({"name": "Bar", "x": 3}).as_object().unwrap()
        );
        assert_eq!(
            stats,
            MergeStats {
                primary: 1,
                unique_secondary: 1,
                duplicates: 1,
                total: 2,
            }
        );
        assert_count_identity(&stats, b_len, &merged);
    }

    #[test]
    fn test_merge_with_itself_equals_index() {
        let content = "{\"name\":\"a\",\"v\":1}\n{\"name\":\"B\"}\n{\"name\":\"c\",\"v\":[1,2]}\n";
        let expected = index(content);

        let (merged, stats) = merge(index(content), index(content));

        assert_eq!(stats.duplicates, expected.len());
        assert_eq!(stats.unique_secondary, 0);
        assert_count_identity(&stats, expected.len(), &merged);
        assert_eq!(merged.records, expected.into_entries());
    }

    #[test]
    fn test_every_key_appears_once() {
        let a = index("{\"name\":\"x\"}\n{\"name\":\"Y\"}\n{\"title\":\"dropped\"}\n");
        let b = index("{\"name\":\"y\"}\n{\"name\":\"Z\"}\n{\"name\":\"w\"}\n");
        let b_len = b.len();

        let (merged, stats) = merge(a, b);

        let keys: Vec<_> = merged.keys().collect();
        assert_eq!(keys, vec!["x", "y", "z", "w"]);
        assert_count_identity(&stats, b_len, &merged);
    }

    #[test]
    fn test_order_is_primary_then_new_secondary() {
        let a = index("{\"name\":\"m\"}\n{\"name\":\"a\"}\n");
        let b = index("{\"name\":\"z\"}\n{\"name\":\"a\"}\n{\"name\":\"b\"}\n");
        let b_len = b.len();

        let (merged, stats) = merge(a, b);

        let keys: Vec<_> = merged.keys().collect();
        assert_eq!(keys, vec!["m", "a", "z", "b"]);
        assert_count_identity(&stats, b_len, &merged);
    }

    #[test]
    fn test_disjoint_sets() {
        let a = index("{\"name\":\"a\"}\n");
        let b = index("{\"name\":\"b\"}\n");
        let b_len = b.len();

        let (merged, stats) = merge(a, b);

        assert_eq!(merged.len(), 2);
        assert_eq!(stats.duplicates, 0);
        assert_eq!(stats.unique_secondary, 1);
        assert_count_identity(&stats, b_len, &merged);
    }

    #[test]
    fn test_empty_inputs() {
        let (merged, stats) = merge(index(""), index(""));
        assert!(merged.is_empty());
        assert_eq!(stats, MergeStats::default());
        assert_count_identity(&stats, 0, &merged);
    }

    #[test]
    fn test_empty_primary_takes_all_secondary() {
        let b = index("{\"name\":\"a\"}\n{\"name\":\"b\"}\n");
        let b_len = b.len();
        let (merged, stats) = merge(index(""), b);
        assert_eq!(merged.len(), 2);
        assert_eq!(stats.primary, 0);
        assert_eq!(stats.unique_secondary, 2);
        assert_count_identity(&stats, b_len, &merged);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = MergeStats {
            primary: 3,
            unique_secondary: 2,
            duplicates: 1,
            total: 5,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({"primary": 3, "unique_secondary": 2, "duplicates": 1, "total": 5})
        );
    }
}
