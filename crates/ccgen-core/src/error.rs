//! Error types for ccgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CcgenError
pub type Result<T> = std::result::Result<T, CcgenError>;

/// Main error type for ccgen operations
#[derive(Debug, Error)]
pub enum CcgenError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// GitHub API errors
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// Documentation table errors
    #[error(transparent)]
    Doc(#[from] DocError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors, including invalid command-line combinations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Two options that cannot be used together
    #[error("Cannot specify {first} together with {second}. {hint}")]
    Conflict {
        first: String,
        second: String,
        hint: String,
    },

    /// Missing required option
    #[error("Missing required option: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Repository has no tags to diff against
    #[error("No tags found in repository at {0}")]
    NoTags(PathBuf),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// Configured template file does not exist
    #[error("Template not found at {0}")]
    TemplateNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Non-success response from the API
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body could not be decoded
    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

/// Documentation table errors
#[derive(Debug, Error)]
pub enum DocError {
    /// Document file not found
    #[error("Document not found at {0}")]
    FileNotFound(PathBuf),

    /// A required table marker is missing
    #[error("No table marker could be located: {0}")]
    MarkerNotFound(String),

    /// Release string is not `major.minor.bugfix`
    #[error("Invalid release version '{0}': expected major.minor.bugfix")]
    InvalidVersion(String),

    /// A computed date or version does not fit its type
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
