//! ccgen Core - shared types, errors and configuration
//!
//! This crate provides the error taxonomy, configuration loading and the
//! small set of types shared by the changelog, git, GitHub and docs crates.

pub mod config;
pub mod error;
pub mod types;

pub use error::{CcgenError, Result};
pub use types::{PullRequest, RepoSlug, Strategy};
