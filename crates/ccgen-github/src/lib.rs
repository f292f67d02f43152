//! ccgen GitHub - map commits to their pull requests
//!
//! One API call per commit, sequentially, with no retries. Results are
//! flattened in commit order and are not deduplicated: a pull request shared
//! by two commits appears twice.

mod client;
mod resolver;
mod traits;
mod types;

pub use client::GitHubClient;
pub use resolver::resolve_pull_requests;
pub use traits::PullRequestLookup;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, ccgen_core::error::GitHubError>;
