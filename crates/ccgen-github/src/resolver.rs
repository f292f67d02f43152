//! Commit to pull request resolution

use tracing::{info, instrument};

use ccgen_core::types::{PullRequest, RepoSlug};

use crate::traits::PullRequestLookup;
use crate::Result;

/// Look up the pull requests of each commit, one call at a time.
///
/// The first failure aborts the whole resolution.
#[instrument(skip(lookup, repo, shas), fields(repo = %repo, commits = shas.len()))]
pub async fn resolve_pull_requests<L, S>(
    lookup: &L,
    repo: &RepoSlug,
    shas: &[S],
) -> Result<Vec<PullRequest>>
where
    L: PullRequestLookup + ?Sized,
    S: AsRef<str> + Sync,
{
    let mut pulls = Vec::new();
    for sha in shas {
        pulls.extend(lookup.pulls_for_commit(repo, sha.as_ref()).await?);
    }
    info!(count = pulls.len(), "resolved pull requests");
    Ok(pulls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccgen_core::error::GitHubError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FakeLookup {
        pulls: HashMap<String, Vec<PullRequest>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeLookup {
        fn new(entries: &[(&str, &[(u64, &str)])]) -> Self {
            let pulls = entries
                .iter()
                .map(|(sha, prs)| {
                    let prs = prs
                        .iter()
                        .map(|(n, title)| PullRequest::new(*n, *title, *sha))
                        .collect();
                    (sha.to_string(), prs)
                })
                .collect();
            Self {
                pulls,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl PullRequestLookup for FakeLookup {
        async fn pulls_for_commit(&self, _repo: &RepoSlug, sha: &str) -> Result<Vec<PullRequest>> {
            self.calls.lock().unwrap().push(sha.to_string());
            self.pulls.get(sha).cloned().ok_or(GitHubError::Api {
                status: 422,
                message: format!("No commit found for SHA: {}", sha),
            })
        }
    }

    fn repo() -> RepoSlug {
        RepoSlug::new("owner", "name")
    }

    #[tokio::test]
    async fn test_flattens_in_commit_then_api_order() {
        let lookup = FakeLookup::new(&[
            ("c1", &[(3, "third"), (1, "first")]),
            ("c2", &[]),
            ("c3", &[(2, "second")]),
        ]);

        let pulls = resolve_pull_requests(&lookup, &repo(), &["c1", "c2", "c3"])
            .await
            .unwrap();

        let titles: Vec<_> = pulls.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first", "second"]);
        assert_eq!(*lookup.calls.lock().unwrap(), vec!["c1", "c2", "c3"]);
    }

    #[tokio::test]
    async fn test_shared_pull_request_is_not_deduplicated() {
        let lookup = FakeLookup::new(&[("c1", &[(5, "shared")]), ("c2", &[(5, "shared")])]);

        let pulls = resolve_pull_requests(&lookup, &repo(), &["c1", "c2"])
            .await
            .unwrap();

        assert_eq!(pulls.len(), 2);
        assert_eq!(pulls[0].commit, "c1");
        assert_eq!(pulls[1].commit, "c2");
    }

    #[tokio::test]
    async fn test_first_failure_aborts() {
        let lookup = FakeLookup::new(&[("c1", &[(1, "ok")]), ("c3", &[(3, "never")])]);

        let result = resolve_pull_requests(&lookup, &repo(), &["c1", "missing", "c3"]).await;

        assert!(matches!(result, Err(GitHubError::Api { status: 422, .. })));
        assert_eq!(*lookup.calls.lock().unwrap(), vec!["c1", "missing"]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let lookup = FakeLookup::new(&[]);
        let shas: [&str; 0] = [];
        let pulls = resolve_pull_requests(&lookup, &repo(), &shas).await.unwrap();
        assert!(pulls.is_empty());
    }
}
