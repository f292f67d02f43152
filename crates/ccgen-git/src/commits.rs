//! Commit history operations

use git2::{Oid, Sort};
use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits after the latest tag up to and including HEAD.
    ///
    /// Equivalent to `git rev-list <latest-tag>..HEAD`: newest first.
    #[instrument(skip(self))]
    pub fn commits_since_latest_tag(&self) -> Result<Vec<CommitInfo>> {
        let tag = self.latest_tag()?;
        info!(tag = %tag.name, "collecting commits since tag");
        let since = Oid::from_str(&tag.commit_hash)?;
        self.commits_since_oid(since)
    }

    /// Commits reachable from HEAD but not from `since`
    pub fn commits_since_oid(&self, since: Oid) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(head.id())?;
        revwalk.hide(since)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "collected commits");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
    CommitInfo::new(commit.id().to_string(), message)
}
