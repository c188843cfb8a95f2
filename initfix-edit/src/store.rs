//! Text storage seam for the files being fixed.

use crate::error::{FixError, FixResult};
use camino::Utf8Path;
use fs_err as fs;

/// Source and sink of the files being fixed.
pub trait TextStore {
    fn read_text(&self, path: &Utf8Path) -> FixResult<String>;
    fn write_text(&self, path: &Utf8Path, contents: &str) -> FixResult<()>;
}

/// Reads and overwrites files on disk as UTF-8.
#[derive(Debug, Clone, Default)]
pub struct FsTextStore;

impl TextStore for FsTextStore {
    fn read_text(&self, path: &Utf8Path) -> FixResult<String> {
        let bytes = fs::read(path).map_err(|source| FixError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|source| FixError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Utf8Path, contents: &str) -> FixResult<()> {
        fs::write(path, contents).map_err(|source| FixError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
