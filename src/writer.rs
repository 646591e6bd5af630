//! Line-delimited JSON output
//!
//! Records are written into a temporary file next to the destination and
//! renamed over it once everything is flushed. A failed write never leaves a
//! truncated or partial file at the destination.
//!
//! An existing destination keeps its permissions, and a symlinked destination
//! is written through: the file the link points at is replaced, the link
//! stays.

use std::fs::{self, Permissions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};
use crate::record::Record;

/// Mode given to a newly created output file
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Write records as JSONL to `target`, replacing any existing file.
///
/// Returns the number of records written.
pub fn write_jsonl<'a, I>(records: I, target: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let (destination, permissions) = resolve_destination(target)?;
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(dir).map_err(|e| fs_error::write_failed(target, e))?;
    let mut out = BufWriter::new(temp);
    let mut written = 0;

    for record in records {
        serde_json::to_writer(&mut out, record).map_err(|e| fs_error::write_failed(target, e))?;
        out.write_all(b"\n")
            .map_err(|e| fs_error::write_failed(target, e))?;
        written += 1;
    }

    let temp = out
        .into_inner()
        .map_err(|e| fs_error::write_failed(target, e.error()))?;
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| fs_error::write_failed(target, e))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| fs_error::write_failed(target, e))?;
    temp.persist(&destination)
        .map_err(|e| fs_error::write_failed(target, e.error))?;

    Ok(written)
}

/// Resolve the file actually replaced and the permissions it should end up
/// with. Symlinks are followed so the link itself is left alone.
fn resolve_destination(target: &Path) -> Result<(PathBuf, Option<Permissions>)> {
    if target.exists() {
        let destination = fs::canonicalize(target).map_err(|e| fs_error::write_failed(target, e))?;
        let permissions = fs::metadata(&destination)
            .map_err(|e| fs_error::write_failed(target, e))?
            .permissions();
        Ok((destination, Some(permissions)))
    } else {
        Ok((target.to_path_buf(), new_file_permissions()))
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
