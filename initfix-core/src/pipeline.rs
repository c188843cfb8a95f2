//! The batch fix pipeline, extracted from the CLI.
//!
//! This entry point is I/O-agnostic: file reads and writes go through
//! [`TextStore`], progress goes through [`ProgressSink`].

use crate::ports::{ProgressSink, TextStore, WritePort};
use crate::report::{FixReport, ToolInfo};
use crate::settings::FixSettings;
use anyhow::Context;
use camino::Utf8Path;
use initfix_edit::{FixError, FixOptions, FixedFile, fix_file, render_patch};
use tracing::debug;

/// Error type for pipeline results.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("no files to process")]
    NoFiles,
    #[error(transparent)]
    Fix(#[from] FixError),
}

impl ToolError {
    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolError::NoFiles => 1,
            ToolError::Fix(err) => err.exit_code(),
        }
    }
}

/// Outcome of `run_fix`.
#[derive(Debug)]
pub struct FixOutcome {
    pub report: FixReport,
    pub patch: String,
}

/// Strip the boilerplate from every listed file, in list order.
///
/// Files are handled one at a time: read, strip, write back, report progress.
/// The first failure aborts the run; files already rewritten stay rewritten
/// and `ProgressSink::done` is not called.
pub fn run_fix(
    settings: &FixSettings,
    store: &dyn TextStore,
    progress: &mut dyn ProgressSink,
    tool: ToolInfo,
) -> Result<FixOutcome, ToolError> {
    if settings.files.is_empty() {
        return Err(ToolError::NoFiles);
    }

    debug!(
        base_dir = %settings.base_dir,
        files = settings.files.len(),
        dry_run = settings.dry_run,
        "starting fix run"
    );

    let mut report = FixReport::new(tool, settings.base_dir.to_string(), settings.dry_run);
    let mut fixed_files: Vec<FixedFile> = Vec::with_capacity(settings.files.len());
    let opts = FixOptions {
        dry_run: settings.dry_run,
    };

    for rel in &settings.files {
        let fixed = fix_file(store, &settings.base_dir, rel, &opts)?;
        report.record(fixed.outcome.clone());
        fixed_files.push(fixed);
        progress.processed(rel);
    }

    progress.done();
    report.finish();

    Ok(FixOutcome {
        report,
        patch: render_patch(&fixed_files),
    })
}

/// Write the JSON report and/or the unified patch, when a path is given.
pub fn write_fix_artifacts(
    outcome: &FixOutcome,
    report_out: Option<&Utf8Path>,
    patch_out: Option<&Utf8Path>,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    if let Some(path) = report_out {
        let json = serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
        writer.write_file(path, json.as_bytes())?;
    }

    if let Some(path) = patch_out {
        writer.write_file(path, outcome.patch.as_bytes())?;
    }

    Ok(())
}
