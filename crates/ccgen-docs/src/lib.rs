//! ccgen Docs - end-of-life table maintenance
//!
//! Inserts the row for a new release into the `|Agent version |EOL Date
//! |Maintained until` table of an AsciiDoc document.

pub mod eol;

pub use eol::{generate_eol_entry, is_major, update_eol_file, update_eol_table, ReleaseVersion};

/// Result type for document operations
pub type Result<T> = std::result::Result<T, ccgen_core::error::DocError>;
