//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{ChangelogCommand, EolCommand};

/// ccgen - changelog and EOL table maintenance for CI
#[derive(Debug, Parser)]
#[command(name = "ccgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Produce a CHANGELOG entry from a repository adhering to Conventional Commits
    Changelog(ChangelogCommand),

    /// Add the EOL row for a release to the maintenance table
    Eol(EolCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match &self.command {
            Commands::Changelog(cmd) => cmd.execute(self),
            Commands::Eol(cmd) => cmd.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccgen_core::types::Strategy;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_changelog_defaults() {
        let cli = Cli::try_parse_from([
            "ccgen",
            "changelog",
            "--repo",
            "elastic/apm-agent-nodejs",
            "--release",
            "3.6.0",
        ])
        .unwrap();

        let Commands::Changelog(cmd) = cli.command else {
            panic!("expected changelog command");
        };
        assert_eq!(cmd.strategy, Strategy::Git);
        assert!(!cmd.preview);
        assert!(cmd.token.is_none());
        assert_eq!(cmd.repo.to_string(), "elastic/apm-agent-nodejs");
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let result = Cli::try_parse_from([
            "ccgen",
            "changelog",
            "--repo",
            "o/r",
            "--release",
            "1.0.0",
            "--strategy",
            "svn",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_requires_repo_and_release() {
        assert!(Cli::try_parse_from(["ccgen", "changelog", "--release", "1.0.0"]).is_err());
        assert!(Cli::try_parse_from(["ccgen", "changelog", "--repo", "o/r"]).is_err());
        let bad_repo = ["ccgen", "changelog", "--repo", "bad", "--release", "1.0.0"];
        assert!(Cli::try_parse_from(bad_repo).is_err());
    }

    #[test]
    fn test_parse_eol() {
        let cli = Cli::try_parse_from(["ccgen", "-q", "eol", "--release", "4.0.0"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Eol(_)));
    }
}
