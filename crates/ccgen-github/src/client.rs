//! GitHub REST client

use reqwest::header::LINK;
use reqwest::Client;
use tracing::{debug, instrument};

use ccgen_core::error::GitHubError;
use ccgen_core::types::{PullRequest, RepoSlug};

use crate::traits::PullRequestLookup;
use crate::types::{ApiErrorBody, ApiPullRequest};
use crate::Result;

const USER_AGENT: &str = concat!("ccgen/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: u32 = 100;

/// GitHub REST API client
pub struct GitHubClient {
    api_url: String,
    token: String,
    client: Client,
}

impl GitHubClient {
    /// Create a client for `api_url` authenticated with `token`
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitHubError::Http(e.to_string()))?;

        Ok(Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// First page of the pull requests associated with a commit
    pub fn commit_pulls_url(&self, repo: &RepoSlug, sha: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}/pulls?per_page={}",
            self.api_url, repo.owner, repo.name, sha, PER_PAGE
        )
    }
}

#[async_trait::async_trait]
impl PullRequestLookup for GitHubClient {
    #[instrument(skip(self, repo), fields(repo = %repo))]
    async fn pulls_for_commit(&self, repo: &RepoSlug, sha: &str) -> Result<Vec<PullRequest>> {
        let mut pulls = Vec::new();
        let mut next = Some(self.commit_pulls_url(repo, sha));

        // Follow `Link: rel="next"` until the last page.
        while let Some(url) = next {
            debug!(url = %url, "querying pull requests for commit");

            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Accept", ACCEPT)
                .header("X-GitHub-Api-Version", API_VERSION)
                .send()
                .await
                .map_err(|e| GitHubError::Http(e.to_string()))?;

            let status = response.status();
            next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_url);
            let body = response
                .text()
                .await
                .map_err(|e| GitHubError::Http(e.to_string()))?;

            if !status.is_success() {
                return Err(api_error(status.as_u16(), &body));
            }

            pulls.extend(decode_pulls(&body, sha)?);
        }

        debug!(sha, count = pulls.len(), "pull requests found");
        Ok(pulls)
    }
}

/// Target of the `rel="next"` entry of a `Link` header
fn next_page_url(link: &str) -> Option<String> {
    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|param| param.trim() == r#"rel="next""#);
        if !is_next {
            return None;
        }
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        Some(target.to_string())
    })
}

fn decode_pulls(body: &str, sha: &str) -> Result<Vec<PullRequest>> {
    let pulls: Vec<ApiPullRequest> =
        serde_json::from_str(body).map_err(|e| GitHubError::Decode(e.to_string()))?;
    Ok(pulls
        .into_iter()
        .map(|p| p.into_pull_request(sha))
        .collect())
}

fn api_error(status: u16, body: &str) -> GitHubError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string());
    GitHubError::Api { status, message }
}
