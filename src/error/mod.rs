//! Error types and handling for jsonl-union
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: reading inputs and writing the merged output
//! - [`record`]: malformed lines and unusable key values
//!
//! Records without a key are not errors. They are reported through
//! [`crate::ui::Reporter::warn`] and dropped from the index.

pub mod fs;
pub mod record;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for jsonl-union operations
#[derive(Error, Diagnostic, Debug)]
pub enum UnionError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(
        code(jsonl_union::fs::read_failed),
        help("Check that the input path exists and is readable")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(jsonl_union::fs::write_failed),
        help("Check that the output directory exists and is writable")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(jsonl_union::fs::io_error))]
    IoError { message: String },

    // Record errors
    #[error("Invalid JSON in {path} at line {line}: {reason}")]
    #[diagnostic(
        code(jsonl_union::record::parse_failed),
        help("Every non-blank line must hold exactly one JSON object")
    )]
    ParseFailed {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Expected a JSON object in {path} at line {line}")]
    #[diagnostic(
        code(jsonl_union::record::not_an_object),
        help("Every non-blank line must hold exactly one JSON object")
    )]
    NotAnObject { path: String, line: usize },

    #[error("Field '{field}' in {path} at line {line} must be a string, found {found}")]
    #[diagnostic(
        code(jsonl_union::record::invalid_key),
        help("The key field must be text, null, or absent")
    )]
    InvalidKey {
        path: String,
        line: usize,
        field: String,
        found: String,
    },

    #[error("Failed to render summary: {reason}")]
    #[diagnostic(
        code(jsonl_union::summary::render_failed),
        help("The JSON summary needs a UTF-8 output path; use --summary text otherwise")
    )]
    SummaryFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(jsonl_union::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for UnionError {
    fn from(err: std::io::Error) -> Self {
        UnionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UnionError>;
