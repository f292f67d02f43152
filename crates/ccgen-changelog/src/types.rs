//! Changelog types

use serde::{Deserialize, Serialize};

use crate::parser::RELEASE_MARKER_PREFIX;

/// The verbatim lines of one historical release in the changelog.
///
/// Every line keeps its trailing newline so joining them reproduces the
/// original text byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseBlock {
    lines: Vec<String>,
}

impl ReleaseBlock {
    /// Start a block from its marker line
    pub(crate) fn start(marker: &str) -> Self {
        Self {
            lines: vec![marker.to_string()],
        }
    }

    pub(crate) fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Raw lines of the block
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Version named by the `[[release-notes-<version>]]` marker
    pub fn version(&self) -> Option<&str> {
        let marker = self.lines.first()?;
        marker
            .strip_prefix(RELEASE_MARKER_PREFIX)?
            .split("]]")
            .next()
    }

    /// Join the lines back into the original text
    pub fn reconstitute(&self) -> String {
        self.lines.concat()
    }
}

/// The rendered text of the release being generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    /// Release the entry describes
    pub release: String,
    /// Rendered block, header through trailing blank line
    pub text: String,
}

impl ReleaseEntry {
    /// Create a new entry
    pub fn new(release: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            text: text.into(),
        }
    }

    /// Rendered text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for ReleaseEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstitute_release_block() {
        let mut block = ReleaseBlock::start("first line\n");
        block.push("second line\n");
        block.push("third line\n");

        assert_eq!(block.reconstitute(), "first line\nsecond line\nthird line\n");
    }

    #[test]
    fn test_block_version() {
        let block = ReleaseBlock::start("[[release-notes-3.6.0]]\n");
        assert_eq!(block.version(), Some("3.6.0"));

        let block = ReleaseBlock::start("not a marker\n");
        assert_eq!(block.version(), None);
    }
}
