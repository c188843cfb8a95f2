//! Clap-free settings for the fix pipeline.

use camino::Utf8PathBuf;

/// Directory the relative file list is resolved against.
pub const DEFAULT_BASE_DIR: &str = "../projects/TaskFlow";

/// Files known to carry the auto-initialize block, in processing order.
pub const DEFAULT_FILES: &[&str] = &[
    "js/taskManager.js",
    "js/taskUI.js",
    "js/eventScheduler.js",
    "js/calendarUI.js",
    "js/notifications.js",
];

/// Settings for the fix pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSettings {
    pub base_dir: Utf8PathBuf,
    pub files: Vec<Utf8PathBuf>,

    /// Compute rewrites and report them without touching the files.
    pub dry_run: bool,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            base_dir: Utf8PathBuf::from(DEFAULT_BASE_DIR),
            files: default_files(),
            dry_run: false,
        }
    }
}

pub fn default_files() -> Vec<Utf8PathBuf> {
    DEFAULT_FILES.iter().map(Utf8PathBuf::from).collect()
}
