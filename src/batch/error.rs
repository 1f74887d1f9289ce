//! Per-file error types.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while optimizing a single page.
///
/// Contained by the batch runner: it is reported and the next file is
/// processed.
#[derive(Debug, Error)]
pub enum FileError {
    /// Unreadable, not UTF-8, or not a regular file.
    #[error("read failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Renaming the temporary file over the page failed (atomic mode).
    #[error("replace failed: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Page the error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Persist { path, .. } => path,
        }
    }

    /// Underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } | Self::Persist { source, .. } => {
                source.kind()
            }
        }
    }
}
