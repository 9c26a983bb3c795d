//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Interactive session settings.
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// chrono `strftime` format for roster timestamps.
    pub timestamp_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timestamp_format: rollcall_core::application::DEFAULT_TIMESTAMP_FORMAT.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; `None` means
    /// the default location.  A missing file yields the built-in defaults; an
    /// unreadable or malformed file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Write the configuration to `path` as TOML, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let serialised = toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serialised)?;
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.rollcall.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "rollcall", "rollcall")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".rollcall.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timestamp_format_is_date_and_time() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.session.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let missing = PathBuf::from("/nonexistent/rollcall/config.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn partial_file_falls_back_to_defaults_per_field() {
        let cfg: AppConfig = toml::from_str("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.session.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
