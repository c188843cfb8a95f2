//! Embeddable core library for initfix.
//!
//! Provides a clap-free, I/O-abstracted entry point for the batch fixer.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`TextStore`](ports::TextStore): read and overwrite the listed files
//! - [`ProgressSink`](ports::ProgressSink): per-file and final progress
//! - [`WritePort`](ports::WritePort): write report and patch artifacts
//!
//! The [`adapters`] module provides default filesystem and stdout
//! implementations, plus in-memory ones for embedding and tests.
//!
//! # Entry points
//!
//! - [`run_fix`](pipeline::run_fix): strip every listed file, in order
//! - [`write_fix_artifacts`](pipeline::write_fix_artifacts): persist report/patch

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod report;
pub mod settings;

// Re-export the edit outcome so embedders don't need initfix-edit directly.
pub use initfix_edit::{FileOutcome, FixError};
