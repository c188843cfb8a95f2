//! Default port implementations.

use crate::ports::{ProgressSink, TextStore, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use initfix_edit::{FixError, FixResult};
use std::collections::BTreeMap;
use std::io;
use std::sync::Mutex;

pub use initfix_edit::FsTextStore;

/// In-memory file store for embedding and testing.
///
/// Reading a path that was never inserted fails like a missing file.
#[derive(Debug, Default)]
pub struct InMemoryTextStore {
    files: Mutex<BTreeMap<Utf8PathBuf, String>>,
}

impl InMemoryTextStore {
    pub fn new<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<Utf8PathBuf>,
        S: Into<String>,
    {
        let files = files
            .into_iter()
            .map(|(p, s)| (p.into(), s.into()))
            .collect();
        Self {
            files: Mutex::new(files),
        }
    }

    pub fn get(&self, path: &Utf8Path) -> Option<String> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
    }
}

impl TextStore for InMemoryTextStore {
    fn read_text(&self, path: &Utf8Path) -> FixResult<String> {
        self.get(path).ok_or_else(|| FixError::Read {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }

    fn write_text(&self, path: &Utf8Path, contents: &str) -> FixResult<()> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Prints `Processed: <path>` per file and `Done!` at the end.
#[derive(Debug, Clone, Default)]
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn processed(&mut self, rel: &Utf8Path) {
        println!("{}", processed_line(rel));
    }

    fn done(&mut self) {
        println!("{}", DONE_LINE);
    }
}

pub const DONE_LINE: &str = "Done!";

pub fn processed_line(rel: &Utf8Path) -> String {
    format!("Processed: {}", rel)
}

/// Collects progress lines instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
}

impl ProgressSink for RecordingProgress {
    fn processed(&mut self, rel: &Utf8Path) {
        self.lines.push(processed_line(rel));
    }

    fn done(&mut self) {
        self.lines.push(DONE_LINE.to_string());
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }
}
