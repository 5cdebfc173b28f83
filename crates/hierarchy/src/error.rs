// ABOUTME: Error types for the hierarchy fixer.
// ABOUTME: FixError separates the recoverable NotFound case from fatal read/write failures.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while fixing a file.
#[derive(Debug, Error)]
pub enum FixError {
    /// The path does not exist. Callers skip it and carry on.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    /// Classify a read failure, mapping `NotFound` to its own variant.
    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FixError::NotFound(path.to_path_buf())
        } else {
            FixError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        FixError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if this error only skips the current path.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FixError::NotFound(_))
    }
}
