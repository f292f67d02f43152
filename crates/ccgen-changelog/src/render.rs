//! Release entry rendering

use std::path::Path;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, info, instrument};

use ccgen_core::error::ChangelogError;
use ccgen_core::types::PullRequest;
use ccgen_git::CommitInfo;

use crate::types::ReleaseEntry;
use crate::Result;

/// Default AsciiDoc release entry.
///
/// `{items}` expands to one `* <item>\n` line per item, possibly none.
pub const DEFAULT_ENTRY_TEMPLATE: &str =
    "[[release-notes-{release}]]\n==== {release} - {date}\n\n{items}\n";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(release|date|items)\}").expect("Invalid regex"));

/// Renders the block for a new release
#[derive(Debug, Clone)]
pub struct EntryRenderer {
    template: String,
}

impl EntryRenderer {
    /// Renderer using the built-in template
    pub fn new() -> Self {
        Self {
            template: DEFAULT_ENTRY_TEMPLATE.to_string(),
        }
    }

    /// Renderer using a template file; a missing file is an error
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn from_template_file(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading entry template");
        let template = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChangelogError::TemplateNotFound(path.to_path_buf())
            } else {
                ChangelogError::Io(e)
            }
        })?;
        Ok(Self { template })
    }

    /// Built-in template unless a template file is given
    pub fn with_optional_template(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_template_file(path),
            None => Ok(Self::new()),
        }
    }

    /// One bullet per commit, using the first line of its message
    pub fn render_commits(
        &self,
        release: &str,
        commits: &[&CommitInfo],
        date: NaiveDate,
    ) -> ReleaseEntry {
        self.render(release, commits.iter().map(|c| c.summary()), date)
    }

    /// One bullet per pull request title, in the given order
    pub fn render_pull_requests(
        &self,
        release: &str,
        pulls: &[PullRequest],
        date: NaiveDate,
    ) -> ReleaseEntry {
        self.render(release, pulls.iter().map(|p| p.title.as_str()), date)
    }

    fn render<'a>(
        &self,
        release: &str,
        items: impl Iterator<Item = &'a str>,
        date: NaiveDate,
    ) -> ReleaseEntry {
        let bullets: String = items.map(|item| format!("* {}\n", item)).collect();
        let date = date.format("%Y-%m-%d").to_string();

        let text = PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures<'_>| match &caps[1] {
                "release" => release.to_string(),
                "date" => date.clone(),
                _ => bullets.clone(),
            })
            .into_owned();

        debug!(release, output_len = text.len(), "release entry rendered");
        ReleaseEntry::new(release, text)
    }
}

impl Default for EntryRenderer {
    fn default() -> Self {
        Self::new()
    }
}
