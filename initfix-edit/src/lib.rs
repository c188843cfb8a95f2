//! Edit engine for initfix.
//!
//! Responsibilities:
//! - Match and strip the auto-initialization boilerplate (`pattern`).
//! - Read, rewrite, and write a single file in place.
//! - Generate a unified diff preview of the rewrite.

pub mod error;
pub mod pattern;
pub mod store;

pub use error::{FixError, FixResult};
pub use pattern::{Stripped, boilerplate_regex, contains_auto_init, strip_auto_init};
pub use store::{FsTextStore, TextStore};

use camino::{Utf8Path, Utf8PathBuf};
use diffy::PatchFormatter;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Compute the rewrite but leave the file untouched.
    pub dry_run: bool,
}

/// Per-file record of what the rewrite did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path relative to the base directory, as listed.
    pub path: String,
    pub removed: u64,
    pub before_bytes: u64,
    pub after_bytes: u64,
    pub sha256_before: String,
    pub sha256_after: String,
    /// False on dry runs.
    pub written: bool,
}

/// A rewritten file: its outcome plus both texts, for patch rendering.
#[derive(Debug, Clone)]
pub struct FixedFile {
    pub outcome: FileOutcome,
    pub before: String,
    pub after: String,
}

impl FixedFile {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Strip the boilerplate from `before` and describe the result.
///
/// `written` is left false; the caller sets it once the text has hit disk.
pub fn fix_text(rel: &Utf8Path, before: String) -> FixedFile {
    let stripped = strip_auto_init(&before);
    if stripped.removed == 0 {
        debug!(path = %rel, "no auto-initialize block found");
    } else {
        debug!(path = %rel, removed = stripped.removed, "stripped auto-initialize block");
    }

    let after = stripped.content;
    let outcome = FileOutcome {
        path: rel.to_string(),
        removed: stripped.removed,
        before_bytes: before.len() as u64,
        after_bytes: after.len() as u64,
        sha256_before: sha256_hex(before.as_bytes()),
        sha256_after: sha256_hex(after.as_bytes()),
        written: false,
    };

    FixedFile {
        outcome,
        before,
        after,
    }
}

/// Rewrite one file in place: read, strip, write back.
///
/// The file is written even when nothing matched, unless `opts.dry_run`.
pub fn fix_file(
    store: &dyn TextStore,
    base_dir: &Utf8Path,
    rel: &Utf8Path,
    opts: &FixOptions,
) -> FixResult<FixedFile> {
    let abs = abs_path(base_dir, rel);
    debug!(path = %abs, "processing");

    let before = store.read_text(&abs)?;
    let mut fixed = fix_text(rel, before);

    if opts.dry_run {
        debug!(path = %abs, "dry-run: not written");
    } else {
        store.write_text(&abs, &fixed.after)?;
        fixed.outcome.written = true;
    }

    Ok(fixed)
}

pub fn abs_path(base_dir: &Utf8Path, rel: &Utf8Path) -> Utf8PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        base_dir.join(rel)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Render a unified diff over every file whose text changed.
///
/// Each file gets one `diff --git` header and one `a/`/`b/` name pair, so the
/// output applies with `git apply`.
pub fn render_patch(files: &[FixedFile]) -> String {
    let mut out = String::new();
    let formatter = PatchFormatter::new();

    for file in files {
        if !file.changed() {
            continue;
        }
        let path = &file.outcome.path;

        out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
        out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

        let patch = diffy::create_patch(&file.before, &file.after);
        let formatted = formatter.fmt_patch(&patch).to_string();
        out.push_str(hunks_only(&formatted));
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

/// Drop diffy's own `--- original`/`+++ modified` header lines.
fn hunks_only(formatted: &str) -> &str {
    if formatted.starts_with("@@") {
        return formatted;
    }
    match formatted.find("\n@@") {
        Some(idx) => &formatted[idx + 1..],
        None => "",
    }
}
