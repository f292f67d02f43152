//! GitHub API payloads

use serde::Deserialize;

use ccgen_core::types::PullRequest;

/// Subset of a pull request object from `GET /repos/{owner}/{repo}/commits/{sha}/pulls`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: Option<String>,
}

impl ApiPullRequest {
    pub fn into_pull_request(self, commit: &str) -> PullRequest {
        let pull = PullRequest::new(self.number, self.title, commit);
        match self.html_url {
            Some(url) => pull.with_html_url(url),
            None => pull,
        }
    }
}

/// Error body returned by the API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
