//! Optional `webpify.toml` configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [head], [write]
//! ├── error      # ConfigError
//! └── mod.rs     # OptimizeConfig (this file)
//! ```
//!
//! Nothing is required: without a config file every value has its default,
//! and CLI flags override whatever the file sets.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{HeadConfig, HeadGuard, WriteConfig};

use crate::{cli::Cli, debug, log};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing webpify.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizeConfig {
    /// Directory whose `*.html` files are processed (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Path the config file was looked up at (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Head hint settings
    #[serde(default)]
    pub head: HeadConfig,

    /// Write-back settings
    #[serde(default)]
    pub write: WriteConfig,
}

impl OptimizeConfig {
    /// Load configuration for the directory named on the command line.
    ///
    /// A relative `--config` path is resolved against that directory.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let root = cli.dir.clone();
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            root.join(&cli.config)
        };

        let mut config = if config_path.is_file() {
            debug!("config"; "loading {}", config_path.display());
            Self::from_path(&config_path)?
        } else {
            debug!("config"; "no {} found, using defaults", config_path.display());
            Self::default()
        };

        config.root = root;
        config.config_path = config_path;
        config.apply_cli(cli);
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// CLI flags take precedence over the config file.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(guard) = cli.head_guard {
            self.head.guard = guard;
        }
        if let Some(atomic) = cli.atomic {
            self.write.atomic = atomic;
        }
        if let Some(dry_run) = cli.dry_run {
            self.write.dry_run = dry_run;
        }
    }

    /// Get the directory being processed
    pub fn get_root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(content: &str) -> OptimizeConfig {
        let (parsed, ignored) = OptimizeConfig::parse_with_ignored(content).unwrap();
        assert!(
            ignored.is_empty(),
            "test config has unknown fields: {:?}",
            ignored
        );
        parsed
    }

    #[test]
    fn test_defaults() {
        let config = parse("");
        assert_eq!(config.head.guard, HeadGuard::Legacy);
        assert!(!config.write.atomic);
        assert!(!config.write.dry_run);
    }

    #[test]
    fn test_sections() {
        let config = parse("[head]\nguard = \"missing\"\n[write]\natomic = true\ndry_run = true");
        assert_eq!(config.head.guard, HeadGuard::Missing);
        assert!(config.write.atomic);
        assert!(config.write.dry_run);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            OptimizeConfig::parse_with_ignored("[head]\nguard = \"off\"\nextra = 1\n[other]\nx = 2")
                .unwrap();
        assert_eq!(config.head.guard, HeadGuard::Off);
        assert_eq!(ignored.len(), 2);
        assert!(ignored.contains(&"head.extra".to_string()));
        assert!(ignored.contains(&"other".to_string()));
    }

    #[test]
    fn test_invalid_guard() {
        let err = OptimizeConfig::parse_with_ignored("[head]\nguard = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_without_file() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::parse_from(["webpify", dir.path().to_str().unwrap()]);
        let config = OptimizeConfig::load(&cli).unwrap();

        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.config_path, dir.path().join("webpify.toml"));
        assert_eq!(config.head.guard, HeadGuard::Legacy);
    }

    #[test]
    fn test_load_file_then_cli_override() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("webpify.toml"),
            "[head]\nguard = \"missing\"\n[write]\natomic = true",
        )
        .unwrap();

        let root = dir.path().to_str().unwrap();
        let config = OptimizeConfig::load(&Cli::parse_from(["webpify", root])).unwrap();
        assert_eq!(config.head.guard, HeadGuard::Missing);
        assert!(config.write.atomic);

        let cli = Cli::parse_from(["webpify", root, "--head-guard", "off", "--atomic", "false"]);
        let config = OptimizeConfig::load(&cli).unwrap();
        assert_eq!(config.head.guard, HeadGuard::Off);
        assert!(!config.write.atomic);
    }

    #[test]
    fn test_load_bad_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("webpify.toml"), "[head\n").unwrap();

        let cli = Cli::parse_from(["webpify", dir.path().to_str().unwrap()]);
        assert!(OptimizeConfig::load(&cli).is_err());
    }
}
