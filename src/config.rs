//! Configuration file handling.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/scanrecord/config.toml`
//! - macOS: `~/Library/Application Support/scanrecord/config.toml`
//! - Windows: `%APPDATA%\scanrecord\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! default_format = "table"
//!
//! [filter]
//! keep_root_license_findings = true
//! license_files = ["LICENSE*", "COPYING*", "NOTICE*"]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::LicenseFilePatterns;

/// Application configuration.
///
/// ```no_run
/// use scanrecord::Config;
///
/// let config = Config::load().unwrap();
/// println!("Default format: {}", config.default_format);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "table", "json"
    pub default_format: String,

    /// How scan results are narrowed to a project.
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep findings from license files at the root of the tree when
    /// narrowing results to a project directory.
    pub keep_root_license_findings: bool,

    /// File name patterns of root license files (`*` wildcard, case-insensitive).
    pub license_files: LicenseFilePatterns,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keep_root_license_findings: true,
            license_files: LicenseFilePatterns::default(),
        }
    }
}

impl FilterConfig {
    /// The patterns to retain during path filtering, honouring
    /// [`keep_root_license_findings`](Self::keep_root_license_findings).
    pub fn effective_license_files(&self) -> LicenseFilePatterns {
        if self.keep_root_license_findings {
            self.license_files.clone()
        } else {
            LicenseFilePatterns::none()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: "table".to_string(),
            filter: FilterConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file, or the defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scanrecord")
            .join("config.toml")
    }

    /// Renders the default configuration as TOML.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
