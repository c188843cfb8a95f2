//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;

// Re-export the edit engine's file seam so callers don't need initfix-edit directly.
pub use initfix_edit::TextStore;

/// Progress notifications, one per processed file and one at the end.
pub trait ProgressSink {
    fn processed(&mut self, rel: &Utf8Path);
    fn done(&mut self);
}

/// File-system write operations for artifacts.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}
