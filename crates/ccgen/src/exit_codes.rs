//! Exit codes for the CLI

use ccgen_core::error::{CcgenError, ConfigError, DocError, GitError, GitHubError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error, including conflicting options
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// GitHub API error
pub const GITHUB_ERROR: i32 = 4;

/// Document table error
pub const DOC_ERROR: i32 = 5;

/// Exit code for the first recognised error in the chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<GitHubError>() {
            return GITHUB_ERROR;
        }
        if cause.is::<DocError>() {
            return DOC_ERROR;
        }
        if let Some(err) = cause.downcast_ref::<CcgenError>() {
            return match err {
                CcgenError::Config(_) => CONFIG_ERROR,
                CcgenError::Git(_) => GIT_ERROR,
                CcgenError::GitHub(_) => GITHUB_ERROR,
                CcgenError::Doc(_) => DOC_ERROR,
                _ => ERROR,
            };
        }
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_mapping() {
        let err = anyhow::Error::new(ConfigError::MissingField("--token".to_string()));
        assert_eq!(for_error(&err), CONFIG_ERROR);

        let err = anyhow::Error::new(GitError::NoTags(PathBuf::from(".")));
        assert_eq!(for_error(&err), GIT_ERROR);

        let err = anyhow::Error::new(GitHubError::Http("timeout".to_string()));
        assert_eq!(for_error(&err), GITHUB_ERROR);

        let err = anyhow::Error::new(DocError::MarkerNotFound("table".to_string()));
        assert_eq!(for_error(&err), DOC_ERROR);

        let err = anyhow::anyhow!("something else");
        assert_eq!(for_error(&err), ERROR);
    }

    #[test]
    fn test_exit_code_through_wrappers() {
        let err = anyhow::Error::new(CcgenError::from(ConfigError::MissingField("x".into())))
            .context("loading config");
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }
}
