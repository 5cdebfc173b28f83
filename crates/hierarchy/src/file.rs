// ABOUTME: Applies the hierarchy fix to a file on disk.
// ABOUTME: Reads the whole file, fixes it, and replaces it via a temp file and atomic rename.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FixError;
use crate::fixer::fix_text;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixOutcome {
    pub lines: usize,
    pub indented: usize,
    /// False when the file already had the right shape and was not rewritten.
    pub changed: bool,
}

/// Fix the file at `path` in place.
pub fn fix_file(path: &Path) -> Result<FixOutcome, FixError> {
    let original = fs::read_to_string(path).map_err(|e| FixError::read(path, e))?;
    let (fixed, stats) = fix_text(&original);
    let changed = fixed != original;

    if changed {
        write_atomic(path, &fixed)?;
    }

    tracing::debug!(
        path = %path.display(),
        lines = stats.lines,
        indented = stats.indented,
        changed,
        "fixed file"
    );

    Ok(FixOutcome {
        lines: stats.lines,
        indented: stats.indented,
        changed,
    })
}

/// Replace `path` with `contents`.
///
/// The data goes to a temp file next to the target, which is renamed over
/// it only after a successful write. The temp file is removed on any error.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FixError> {
    // Write through symlinks to the file they point at.
    let target = fs::canonicalize(path).map_err(|e| FixError::write(path, e))?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FixError::write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| FixError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| FixError::write(path, e))?;

    let permissions = fs::metadata(&target)
        .map_err(|e| FixError::write(path, e))?
        .permissions();
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(|e| FixError::write(path, e))?;

    tmp.persist(&target)
        .map_err(|e| FixError::write(path, e.error))?;
    Ok(())
}
