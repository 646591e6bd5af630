//! Common test utilities for jsonl-union integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding input and output datasets
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write records as one JSON line each
    #[allow(dead_code)]
    pub fn write_jsonl(&self, path: &str, records: &[serde_json::Value]) {
        let mut content = String::new();
        for record in records {
            content.push_str(&record.to_string());
            content.push('\n');
        }
        self.write_file(path, &content);
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a JSONL file back as values, one per line
    #[allow(dead_code)]
    pub fn read_jsonl(&self, path: &str) -> Vec<serde_json::Value> {
        self.read_file(path)
            .lines()
            .map(|line| serde_json::from_str(line).expect("Output line is not valid JSON"))
            .collect()
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real jsonl-union binary, run inside `workspace`
#[allow(deprecated)]
pub fn union_cmd_for_workspace(workspace: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("jsonl-union").expect("Failed to find jsonl-union binary");
    // Ignore any developer overrides during tests
    cmd.env_remove("JSONL_UNION_OUTPUT");
    cmd.current_dir(workspace);
    cmd
}
