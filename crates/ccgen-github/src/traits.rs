//! Pull request lookup trait

use ccgen_core::types::{PullRequest, RepoSlug};

use crate::Result;

/// Source of the pull requests associated with a commit
#[async_trait::async_trait]
pub trait PullRequestLookup: Send + Sync {
    /// Pull requests containing `sha`, in the order the source returns them
    async fn pulls_for_commit(&self, repo: &RepoSlug, sha: &str) -> Result<Vec<PullRequest>>;
}
