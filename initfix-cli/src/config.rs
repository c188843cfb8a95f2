//! Configuration file loading for initfix.
//!
//! Discovers and loads `initfix.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use initfix_core::settings::FixSettings;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "initfix.toml";

/// Top-level configuration from initfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitfixConfig {
    /// Directory the file list is resolved against.
    pub base_dir: Option<Utf8PathBuf>,

    /// Relative paths to process, in order. Empty means the built-in list.
    pub files: Vec<Utf8PathBuf>,

    /// Compute rewrites without writing them.
    pub dry_run: bool,
}

/// Discover the initfix.toml config file.
///
/// Returns `None` if `dir` has no config file.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse an initfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<InitfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<InitfixConfig> {
    let config: InitfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<InitfixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(InitfixConfig::default()),
    }
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: InitfixConfig,
}

impl ConfigMerger {
    pub fn new(config: InitfixConfig) -> Self {
        Self { config }
    }

    /// Merge with CLI arguments into pipeline settings.
    ///
    /// A CLI base directory or non-empty file list replaces the config value;
    /// `dry_run` is set if either side asks for it.
    pub fn merge_cli_args(
        self,
        cli_base_dir: Option<Utf8PathBuf>,
        cli_files: Vec<Utf8PathBuf>,
        cli_dry_run: bool,
    ) -> FixSettings {
        let defaults = FixSettings::default();

        let base_dir = cli_base_dir
            .or(self.config.base_dir)
            .unwrap_or(defaults.base_dir);

        let files = if !cli_files.is_empty() {
            cli_files
        } else if !self.config.files.is_empty() {
            self.config.files
        } else {
            defaults.files
        };

        FixSettings {
            base_dir,
            files,
            dry_run: cli_dry_run || self.config.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use initfix_core::settings::{DEFAULT_BASE_DIR, default_files};
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let contents = r#"
base_dir = "../projects/Other"
files = ["js/app.js", "js/utils.js"]
dry_run = true
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(Utf8Path::new("../projects/Other")));
        assert_eq!(config.files, vec!["js/app.js", "js/utils.js"]);
        assert!(config.dry_run);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.base_dir.is_none());
        assert!(config.files.is_empty());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = parse_config("pattern = \"x\"\n").expect_err("unknown key");
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_merge_defaults_when_nothing_set() {
        let settings = ConfigMerger::new(InitfixConfig::default()).merge_cli_args(None, vec![], false);

        assert_eq!(settings.base_dir, DEFAULT_BASE_DIR);
        assert_eq!(settings.files, default_files());
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_merge_config_over_defaults() {
        let config = InitfixConfig {
            base_dir: Some(Utf8PathBuf::from("cfg")),
            files: vec![Utf8PathBuf::from("js/a.js")],
            dry_run: true,
        };

        let settings = ConfigMerger::new(config).merge_cli_args(None, vec![], false);

        assert_eq!(settings.base_dir, "cfg");
        assert_eq!(settings.files, vec![Utf8PathBuf::from("js/a.js")]);
        assert!(settings.dry_run);
    }

    #[test]
    fn test_merge_cli_over_config() {
        let config = InitfixConfig {
            base_dir: Some(Utf8PathBuf::from("cfg")),
            files: vec![Utf8PathBuf::from("js/a.js")],
            dry_run: false,
        };

        let settings = ConfigMerger::new(config).merge_cli_args(
            Some(Utf8PathBuf::from("cli")),
            vec![Utf8PathBuf::from("js/b.js"), Utf8PathBuf::from("js/c.js")],
            true,
        );

        assert_eq!(settings.base_dir, "cli");
        assert_eq!(
            settings.files,
            vec![Utf8PathBuf::from("js/b.js"), Utf8PathBuf::from("js/c.js")]
        );
        assert!(settings.dry_run);
    }

    #[test]
    fn test_discover_config_some_and_none() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        assert!(discover_config(&root).is_none());

        std::fs::write(root.join(CONFIG_FILE_NAME), "").expect("write config");
        assert!(discover_config(&root).is_some());
    }

    #[test]
    fn test_load_or_default_returns_default_when_missing() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        let cfg = load_or_default(&root).expect("load default");
        assert!(cfg.base_dir.is_none());
        assert!(cfg.files.is_empty());
    }
}
