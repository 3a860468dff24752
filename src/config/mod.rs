//! Configuration management for `pressroom.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── feed       # [feed]
//! │   ├── serve      # [serve]
//! │   ├── site       # [site]
//! │   └── storage    # [storage]
//! ├── error          # ConfigError
//! └── mod.rs         # PressConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[site]`    | Production origin, display name, admin page      |
//! | `[serve]`   | HTTP server (interface, port, workers, body cap) |
//! | `[storage]` | Public dir, data dir, index and sitemap files    |
//! | `[feed]`    | Homepage feed size                               |
//!
//! The file is optional. Precedence, highest first: CLI flags, the `PORT`
//! environment variable, the config file, built-in defaults.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{FeedConfig, ServeConfig, SiteConfig, StorageConfig, StoragePaths};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, parse_port};

/// Environment variable consulted for the listening port.
pub const PORT_ENV: &str = "PORT";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pressroom.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PressConfig {
    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub feed: FeedConfig,
}

impl PressConfig {
    /// Load configuration from CLI arguments and the process environment.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when there is no file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        let port = std::env::var(PORT_ENV).ok();
        config.apply_env_port(port.as_deref())?;
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
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
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Apply the `PORT` environment value, if any.
    pub fn apply_env_port(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.serve.port = parse_port(value).ok_or_else(|| ConfigError::Port(value.to_string()))?;
        }
        Ok(())
    }

    /// Apply command-specific CLI overrides.
    pub fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Serve { interface, port } = &cli.command {
            if let Some(interface) = interface {
                self.serve.interface = *interface;
            }
            if let Some(port) = port {
                self.serve.port = *port;
            }
        }
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()?;

        let checks = [
            (self.serve.workers == 0, "serve.workers must be at least 1"),
            (self.serve.body_limit == 0, "serve.body_limit must be at least 1 byte"),
            (self.feed.limit == 0, "feed.limit must be at least 1"),
            (
                self.storage.posts.trim_matches('/').is_empty(),
                "storage.posts must not be empty",
            ),
        ];
        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, message)) => Err(ConfigError::Validation((*message).to_string())),
            None => Ok(()),
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Resolved artifact locations.
    pub fn paths(&self) -> StoragePaths {
        self.storage.resolve(&self.root)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PressConfig {
    let (parsed, ignored) = PressConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> PressConfig {
    PressConfig {
        root: root.to_path_buf(),
        ..PressConfig::default()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<PressConfig, _> = toml::from_str("[site\nurl = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = PressConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.serve.port, 3000);
        assert_eq!(config.feed.limit, 10);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = PressConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_env_port_overrides_file() {
        let mut config = test_parse_config("[serve]\nport = 4000");
        config.apply_env_port(Some("5000")).unwrap();
        assert_eq!(config.serve.port, 5000);

        config.apply_env_port(None).unwrap();
        assert_eq!(config.serve.port, 5000);

        config.apply_env_port(Some("")).unwrap();
        assert_eq!(config.serve.port, 5000);
    }

    #[test]
    fn test_env_port_invalid() {
        let mut config = PressConfig::default();
        let err = config.apply_env_port(Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::Port(ref v) if v == "eighty"));
    }

    #[test]
    fn test_cli_overrides_env_port() {
        let cli = Cli::parse_from(["pressroom", "serve", "--port", "9000"]);
        let mut config = PressConfig::default();
        config.apply_env_port(Some("5000")).unwrap();
        config.apply_command_options(&cli);
        assert_eq!(config.serve.port, 9000);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        for content in [
            "[serve]\nworkers = 0",
            "[serve]\nbody_limit = 0",
            "[feed]\nlimit = 0",
            "[storage]\nposts = \"/\"",
        ] {
            let config = test_parse_config(content);
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "expected validation failure for {content:?}"
            );
        }
    }
}
