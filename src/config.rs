//! Application configuration management.
//!
//! Settings live in `config.toml` under the platform configuration
//! directory (for example `~/.config/conscious-choice/config.toml` on
//! Linux). Every key is optional:
//!
//! ```toml
//! site_root = "/srv/conscious-choice"
//! theme = "dark"
//! shuffle_seed = 42
//! ```
//!
//! Command-line flags override these values.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ThemeArg;

/// Site root used when neither the CLI nor the config names one.
pub const DEFAULT_SITE_ROOT: &str = ".";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory containing `data/`
    pub site_root: Option<PathBuf>,
    /// Preferred TUI theme
    pub theme: ThemeArg,
    /// Fixed seed for option shuffling
    pub shuffle_seed: Option<u64>,
}

impl Config {
    /// Load the configuration from the default platform-specific path.
    ///
    /// A missing or unreadable file yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        let loaded = Self::config_path().and_then(|path| {
            if path.exists() {
                Self::load_from(&path)
            } else {
                Ok(Self::default())
            }
        });
        match loaded {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    /// for this structure.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Save the configuration to the default platform-specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Site root, preferring the CLI value.
    #[must_use]
    pub fn resolve_site_root(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.site_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT))
    }

    /// Shuffle seed, preferring the CLI value.
    #[must_use]
    pub fn resolve_seed(&self, cli: Option<u64>) -> Option<u64> {
        cli.or(self.shuffle_seed)
    }

    /// Theme, preferring the CLI value.
    #[must_use]
    pub fn resolve_theme(&self, cli: Option<ThemeArg>) -> ThemeArg {
        cli.unwrap_or(self.theme)
    }

    /// Get the default platform-specific configuration path.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("org", "consciouschoice", "conscious-choice")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeArg::Auto);
        assert_eq!(config.site_root, None);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme, ThemeArg::Light);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config {
            site_root: Some(PathBuf::from("/srv/site")),
            theme: ThemeArg::Dark,
            shuffle_seed: Some(7),
        };
        assert_eq!(config.resolve_site_root(None), PathBuf::from("/srv/site"));
        assert_eq!(
            config.resolve_site_root(Some(PathBuf::from("other"))),
            PathBuf::from("other")
        );
        assert_eq!(config.resolve_seed(None), Some(7));
        assert_eq!(config.resolve_seed(Some(1)), Some(1));
        assert_eq!(config.resolve_theme(None), ThemeArg::Dark);
        assert_eq!(config.resolve_theme(Some(ThemeArg::Light)), ThemeArg::Light);
    }

    #[test]
    fn test_default_site_root() {
        assert_eq!(Config::default().resolve_site_root(None), PathBuf::from("."));
    }
}
