//! CLI commands

mod changelog;
mod eol;

pub use changelog::ChangelogCommand;
pub use eol::EolCommand;
