//! Command implementations for jsonl-union CLI

pub mod completions;
pub mod merge;
pub mod version;
