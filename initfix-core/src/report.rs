//! Machine-readable run report.

use chrono::{DateTime, Utc};
use initfix_edit::FileOutcome;
use serde::{Deserialize, Serialize};

pub const INITFIX_REPORT_V1: &str = "initfix.report.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSummary {
    pub files_processed: u64,
    pub files_changed: u64,
    pub blocks_removed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub base_dir: String,
    pub dry_run: bool,
    #[serde(default)]
    pub files: Vec<FileOutcome>,
    pub summary: FixSummary,
}

impl FixReport {
    pub fn new(tool: ToolInfo, base_dir: String, dry_run: bool) -> Self {
        Self {
            schema: INITFIX_REPORT_V1.to_string(),
            tool,
            run: RunInfo {
                started_at: Some(Utc::now()),
                ended_at: None,
            },
            base_dir,
            dry_run,
            files: vec![],
            summary: FixSummary::default(),
        }
    }

    /// Append a file outcome and fold it into the summary.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.summary.files_processed += 1;
        if outcome.sha256_before != outcome.sha256_after {
            self.summary.files_changed += 1;
        }
        self.summary.blocks_removed += outcome.removed;
        self.files.push(outcome);
    }

    pub fn finish(&mut self) {
        self.run.ended_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(path: &str, removed: u64) -> FileOutcome {
        FileOutcome {
            path: path.to_string(),
            removed,
            before_bytes: 10,
            after_bytes: 10,
            sha256_before: "aa".to_string(),
            sha256_after: if removed > 0 { "bb" } else { "aa" }.to_string(),
            written: true,
        }
    }

    #[test]
    fn record_accumulates_summary() {
        let tool = ToolInfo {
            name: "initfix".to_string(),
            version: None,
        };
        let mut report = FixReport::new(tool, "base".to_string(), false);
        report.record(outcome("js/a.js", 2));
        report.record(outcome("js/b.js", 0));
        report.finish();

        assert_eq!(
            report.summary,
            FixSummary {
                files_processed: 2,
                files_changed: 1,
                blocks_removed: 2,
            }
        );
        assert_eq!(report.files[1].path, "js/b.js");
        assert!(report.run.ended_at.is_some());
    }

    #[test]
    fn serializes_schema_and_omits_missing_version() {
        let tool = ToolInfo {
            name: "initfix".to_string(),
            version: None,
        };
        let report = FixReport::new(tool, "base".to_string(), true);
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["schema"], INITFIX_REPORT_V1);
        assert_eq!(json["dry_run"], true);
        assert!(json["tool"].get("version").is_none());
    }
}
