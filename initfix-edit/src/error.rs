//! Error types for initfix-edit.
//!
//! Every variant is a runtime failure that aborts the batch (exit code 1).
//! A file without the boilerplate is not an error.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// The error type for reading, rewriting, and writing a single file.
#[derive(Debug, Error)]
pub enum FixError {
    /// The file is missing, unreadable, or not permitted.
    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid UTF-8 text.
    #[error("decode {path} as UTF-8")]
    Decode {
        path: Utf8PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The rewritten contents could not be written back.
    #[error("write {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixError {
    /// The absolute path the failure occurred on.
    pub fn path(&self) -> &Utf8Path {
        match self {
            FixError::Read { path, .. }
            | FixError::Decode { path, .. }
            | FixError::Write { path, .. } => path,
        }
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias using FixError.
pub type FixResult<T> = Result<T, FixError>;
