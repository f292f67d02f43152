//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_CHANGELOG_FILE, DEFAULT_EOL_DOC, DEFAULT_GITHUB_API_URL, DEFAULT_SUPPORT_DAYS,
    DEFAULT_TOKEN_ENV,
};

/// Main configuration for ccgen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// GitHub API configuration
    pub github: GitHubConfig,

    /// EOL table configuration
    pub eol: EolConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Inline banner placed before the first release block
    pub banner: Option<String>,

    /// File holding the banner; takes precedence over `banner`
    pub banner_template: Option<PathBuf>,

    /// File holding the release entry template
    pub entry_template: Option<PathBuf>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            banner: None,
            banner_template: None,
            entry_template: None,
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API
    pub api_url: String,

    /// Environment variable consulted when no token is passed
    pub token_env: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl GitHubConfig {
    /// Read the token from the configured environment variable
    pub fn token_from_env(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|t| !t.is_empty())
    }
}

/// EOL table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EolConfig {
    /// Document holding the maintenance table
    pub doc: PathBuf,

    /// Days between a release and its end of life
    pub support_days: i64,
}

impl Default for EolConfig {
    fn default() -> Self {
        Self {
            doc: PathBuf::from(DEFAULT_EOL_DOC),
            support_days: DEFAULT_SUPPORT_DAYS,
        }
    }
}
