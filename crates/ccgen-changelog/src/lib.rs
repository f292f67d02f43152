//! ccgen Changelog - AsciiDoc changelog generation
//!
//! This crate decides which commits are worth a changelog line, splits an
//! existing changelog into release blocks, renders the new release entry and
//! assembles the full document.

pub mod assemble;
pub mod filter;
pub mod parser;
pub mod render;
pub mod types;

pub use assemble::ChangelogAssembler;
pub use filter::{filter_commits, is_changelog_worthy};
pub use parser::{extract_releases, read_releases};
pub use render::EntryRenderer;
pub use types::{ReleaseBlock, ReleaseEntry};

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, ccgen_core::error::ChangelogError>;
