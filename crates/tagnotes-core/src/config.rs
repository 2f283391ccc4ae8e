// SPDX-License-Identifier: Apache-2.0

//! Configuration management for tagnotes.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `TAGNOTES_`)
//! 2. Config file: `~/.config/tagnotes/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Override the inclusion label via environment variable
//! TAGNOTES_RELEASE__LABEL=changelog tagnotes publish --tag v1/2.0.0
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::TagnotesError;
use crate::resolver::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, PageOptions};

/// Largest page size the releases endpoint honours.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Release notes settings.
    pub release: ReleaseConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_timeout_seconds: 10,
        }
    }
}

/// Release notes settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Inclusion label. Empty includes every pull request.
    pub label: String,
    /// Releases requested per listing page.
    pub page_size: u8,
    /// Listing pages fetched before giving up.
    pub max_pages: u32,
    /// Discussion category opened for newly created releases.
    pub discussion_category: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            discussion_category: None,
        }
    }
}

impl ReleaseConfig {
    /// Pagination options for the previous-release search.
    #[must_use]
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            page_size: self.page_size,
            max_pages: self.max_pages,
        }
    }

    fn validate(&self) -> Result<(), TagnotesError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(TagnotesError::Config {
                message: format!(
                    "release.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                    self.page_size
                ),
            });
        }
        if self.max_pages == 0 {
            return Err(TagnotesError::Config {
                message: "release.max_pages must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the tagnotes configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/tagnotes`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("tagnotes");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("tagnotes")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `TAGNOTES_` and double underscore
/// for nested keys (e.g., `TAGNOTES_RELEASE__LABEL`).
///
/// # Errors
///
/// Returns `TagnotesError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, TagnotesError> {
    load_config_from(&config_file_path())
}

/// Load configuration from an explicit file path plus environment variables.
///
/// # Errors
///
/// Returns `TagnotesError::Config` if the file is invalid or a value is out
/// of range.
pub fn load_config_from(path: &Path) -> Result<AppConfig, TagnotesError> {
    let config = Config::builder()
        // Optional; may not exist
        .add_source(File::with_name(path.to_string_lossy().as_ref()).required(false))
        .add_source(
            Environment::with_prefix("TAGNOTES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.release.validate()?;

    Ok(app_config)
}
