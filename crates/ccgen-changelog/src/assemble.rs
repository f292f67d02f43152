//! Full changelog assembly

use std::path::Path;

use tracing::{debug, info, instrument};

use ccgen_core::error::ChangelogError;

use crate::types::{ReleaseBlock, ReleaseEntry};
use crate::Result;

/// Boilerplate placed before the first release block
pub const DEFAULT_BANNER: &str = "\
ifdef::env-github[]
NOTE: Release notes are best read in our documentation at
https://www.elastic.co/guide/en/apm/agent/nodejs/current/release-notes.html[elastic.co]
endif::[]

";

/// Builds the complete changelog document
#[derive(Debug, Clone)]
pub struct ChangelogAssembler {
    banner: String,
}

impl ChangelogAssembler {
    /// Assembler with the default banner
    pub fn new() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
        }
    }

    /// Use a custom inline banner
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Load the banner from a file; a missing file is an error
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn with_banner_file(self, path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading banner template");
        let banner = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChangelogError::TemplateNotFound(path.to_path_buf())
            } else {
                ChangelogError::Io(e)
            }
        })?;
        Ok(self.with_banner(banner))
    }

    /// Banner, new entry, previous blocks verbatim, then a closing newline
    #[instrument(skip_all, fields(release = %entry.release, previous = previous.len()))]
    pub fn assemble(&self, entry: &ReleaseEntry, previous: &[ReleaseBlock]) -> String {
        let mut output = String::with_capacity(self.banner.len() + entry.text.len());

        output.push_str(&self.banner);
        output.push_str(&entry.text);
        for block in previous {
            output.push_str(&block.reconstitute());
        }
        output.push('\n');

        debug!(output_len = output.len(), "changelog assembled");
        output
    }
}

impl Default for ChangelogAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_commits;
    use crate::parser::extract_releases;
    use crate::render::EntryRenderer;
    use ccgen_git::CommitInfo;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_assemble_single_entry() {
        let entry = ReleaseEntry::new(
            "9.9.9",
            "[[release-notes-9.9.9]]\n\
             ==== 9.9.9 - 2020-04-15\n\
             \n\
             * fix(package): bump stackman to ^4.0.1\n\
             \n",
        );

        let expected = "ifdef::env-github[]
NOTE: Release notes are best read in our documentation at
https://www.elastic.co/guide/en/apm/agent/nodejs/current/release-notes.html[elastic.co]
endif::[]

[[release-notes-9.9.9]]
==== 9.9.9 - 2020-04-15

* fix(package): bump stackman to ^4.0.1


";
        assert_eq!(ChangelogAssembler::new().assemble(&entry, &[]), expected);
    }

    #[test]
    fn test_end_to_end_preserves_old_blocks() {
        let old_block = "[[release-notes-1.0.0]]\n==== 1.0.0 - 2020-04-15\n\n* old fix\n\n";
        let existing = format!("{}{}", DEFAULT_BANNER, old_block);

        let commits = vec![
            CommitInfo::new("b", "chore: noise"),
            CommitInfo::new("a", "fix: bump dep"),
        ];
        let worthy = filter_commits(&commits);
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let entry = EntryRenderer::new().render_commits("1.1.0", &worthy, today);

        let output = ChangelogAssembler::new().assemble(&entry, &extract_releases(&existing));

        let new_block = "[[release-notes-1.1.0]]\n==== 1.1.0 - 2026-10-19\n\n* fix: bump dep\n\n";
        assert_eq!(
            output,
            format!("{}{}{}\n", DEFAULT_BANNER, new_block, old_block)
        );
        assert!(output.starts_with(DEFAULT_BANNER));
    }

    #[test]
    fn test_custom_banner() {
        let entry = ReleaseEntry::new("1.0.0", "[[release-notes-1.0.0]]\n");
        let output = ChangelogAssembler::new()
            .with_banner("= Changelog\n\n")
            .assemble(&entry, &[]);
        assert_eq!(output, "= Changelog\n\n[[release-notes-1.0.0]]\n\n");
    }

    #[test]
    fn test_missing_banner_file() {
        let temp = TempDir::new().unwrap();
        let result = ChangelogAssembler::new().with_banner_file(&temp.path().join("banner.adoc"));
        assert!(matches!(result, Err(ChangelogError::TemplateNotFound(_))));
    }
}
