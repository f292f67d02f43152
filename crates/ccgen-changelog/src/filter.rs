//! Conventional Commits filter
//!
//! A commit is changelog-worthy when its message starts with a `fix`, `feat`
//! or `perf` type (optionally scoped), when it carries a `!` breaking marker
//! after any type, or when `BREAKING CHANGE` appears anywhere in it.
//! See https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use ccgen_git::CommitInfo;

/// Prefix rules, anchored at the start of the message, tried in order
static PREFIX_RULES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"^fix(\(.*\))?:").expect("Invalid regex"),
        Regex::new(r"^feat(\(.*\))?:").expect("Invalid regex"),
        Regex::new(r"^perf(\(.*\))?:").expect("Invalid regex"),
        Regex::new(r"^\w+(\(.*\))?!").expect("Invalid regex"),
    ]
});

const BREAKING_TOKEN: &str = "BREAKING CHANGE";

/// Whether a commit message belongs in the changelog
pub fn is_changelog_worthy(message: &str) -> bool {
    PREFIX_RULES.iter().any(|rule| rule.is_match(message)) || message.contains(BREAKING_TOKEN)
}

/// Keep the changelog-worthy commits, in their original order
pub fn filter_commits(commits: &[CommitInfo]) -> Vec<&CommitInfo> {
    let worthy: Vec<_> = commits
        .iter()
        .filter(|c| is_changelog_worthy(&c.message))
        .collect();
    tracing::debug!(
        total = commits.len(),
        kept = worthy.len(),
        "filtered commits"
    );
    worthy
}
