mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use config::ConfigMerger;
use initfix_core::adapters::{FsTextStore, FsWritePort, StdoutProgress};
use initfix_core::pipeline::{ToolError, run_fix, write_fix_artifacts};
use initfix_core::report::ToolInfo;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "initfix",
    version,
    about = "Strip the auto-initialize boilerplate block from a fixed set of JavaScript files."
)]
struct Cli {
    /// Directory the file list is resolved against (default: ../projects/TaskFlow).
    #[arg(long)]
    base_dir: Option<Utf8PathBuf>,

    /// Relative path to process; repeat to build the list (default: the TaskFlow modules).
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<Utf8PathBuf>,

    /// Config file (default: ./initfix.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Report what would change without writing any listed file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Write a JSON report of every processed file to this path.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Write a unified diff of all changes to this path.
    #[arg(long)]
    patch_out: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; --help/--version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // stdout carries the progress lines; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main(cli) {
        error!("{:?}", e);
        return ExitCode::from(exit_code(&e));
    }
    ExitCode::SUCCESS
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ToolError>().map_or(1, ToolError::exit_code)
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new("."))
            .context("load initfix.toml config")?,
    };
    let settings = ConfigMerger::new(file_config).merge_cli_args(
        cli.base_dir,
        cli.files,
        cli.dry_run,
    );

    debug!(
        "merged config: base_dir={}, files={:?}, dry_run={}",
        settings.base_dir, settings.files, settings.dry_run
    );

    let mut progress = StdoutProgress;
    let outcome =
        run_fix(&settings, &FsTextStore, &mut progress, tool_info()).context("fix files")?;

    write_fix_artifacts(
        &outcome,
        cli.report_out.as_deref(),
        cli.patch_out.as_deref(),
        &FsWritePort,
    )?;

    info!(
        files = outcome.report.summary.files_processed,
        changed = outcome.report.summary.files_changed,
        removed = outcome.report.summary.blocks_removed,
        "fixed files under {}",
        settings.base_dir
    );
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "initfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
