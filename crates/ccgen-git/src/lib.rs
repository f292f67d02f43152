//! ccgen Git - commit history between the latest tag and HEAD
//!
//! Tags are ordered by reference name, the way a plain ref listing returns
//! them. The "latest" tag is the last one in that order, not the highest
//! semantic version.

mod commits;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
