//! Splits an existing changelog into release blocks

use std::path::Path;

use tracing::{debug, info, instrument};

use ccgen_core::error::ChangelogError;

use crate::types::ReleaseBlock;
use crate::Result;

/// Every release section starts with an anchor line beginning with this
pub const RELEASE_MARKER_PREFIX: &str = "[[release-notes-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideBlock,
    InsideBlock,
}

/// Split changelog text into release blocks.
///
/// Lines before the first `[[release-notes-` marker are dropped. Each marker
/// closes the previous block and opens a new one.
pub fn extract_releases(text: &str) -> Vec<ReleaseBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<ReleaseBlock> = None;
    let mut state = ScanState::OutsideBlock;

    for line in text.split_inclusive('\n') {
        if line.starts_with(RELEASE_MARKER_PREFIX) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(ReleaseBlock::start(line));
            state = ScanState::InsideBlock;
        } else if state == ScanState::InsideBlock {
            if let Some(block) = current.as_mut() {
                block.push(line);
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    debug!(count = blocks.len(), "extracted release blocks");
    blocks
}

/// Read a changelog file and split it into release blocks
#[instrument(skip(path), fields(path = %path.display()))]
pub fn read_releases(path: &Path) -> Result<Vec<ReleaseBlock>> {
    info!(path = %path.display(), "reading changelog");
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ChangelogError::FileNotFound(path.to_path_buf())
        } else {
            ChangelogError::Io(e)
        }
    })?;
    Ok(extract_releases(&text))
}
