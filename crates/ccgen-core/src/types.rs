//! Core types for ccgen

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the items of a new changelog entry come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One bullet per filtered commit
    #[default]
    Git,
    /// One bullet per pull request associated with a filtered commit
    Prs,
}

impl Strategy {
    /// Returns the string representation of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Prs => "prs",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git" => Ok(Self::Git),
            "prs" => Ok(Self::Prs),
            _ => Err(format!("Unknown strategy: {} (expected git or prs)", s)),
        }
    }
}

/// A remote repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSlug {
    /// Account or organization that owns the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSlug {
    /// Create a new slug
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl std::str::FromStr for RepoSlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(ConfigError::InvalidValue {
                field: "repo".to_string(),
                message: format!("'{}' is not in owner/name form", s),
            }),
        }
    }
}

/// A pull request associated with a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Web URL of the pull request
    pub html_url: Option<String>,
    /// Commit the pull request was resolved from
    pub commit: String,
}

impl PullRequest {
    /// Create a new pull request
    pub fn new(number: u64, title: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            html_url: None,
            commit: commit.into(),
        }
    }

    /// Set the web URL
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = Some(url.into());
        self
    }
}
