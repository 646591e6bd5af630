//! File system errors

use std::path::Path;

use super::UnionError;

/// Creates a file read error for an input path
pub fn read_failed(path: &Path, reason: impl ToString) -> UnionError {
    UnionError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error for an output path
pub fn write_failed(path: &Path, reason: impl ToString) -> UnionError {
    UnionError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
