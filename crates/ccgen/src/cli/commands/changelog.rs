//! Changelog command

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use tracing::{debug, info};

use ccgen_changelog::{filter_commits, read_releases, ChangelogAssembler, EntryRenderer};
use ccgen_core::config::{load_config_or_default, resolve_relative, Config};
use ccgen_core::error::ConfigError;
use ccgen_core::types::{RepoSlug, Strategy};
use ccgen_git::GitRepo;
use ccgen_github::{resolve_pull_requests, GitHubClient};

use crate::cli::{output, Cli};

/// Where the bullets of the new entry come from
#[derive(Debug, PartialEq, Eq)]
enum ItemSource {
    Commits,
    PullRequests { token: String },
}

/// Produce a CHANGELOG entry from a repository adhering to Conventional Commits
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// GitHub repository, as owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: RepoSlug,

    /// GitHub token, only valid with --strategy prs (falls back to GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Where entry lines come from: commit subjects or pull request titles
    #[arg(long, default_value = "git", value_name = "git|prs")]
    pub strategy: Strategy,

    /// Version of the release being prepared
    #[arg(long)]
    pub release: String,

    /// Path to the git working tree
    #[arg(long, value_name = "PATH")]
    pub tree: Option<PathBuf>,

    /// Print only the new release entry
    #[arg(long)]
    pub preview: bool,

    /// Existing changelog (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!(
            repo = %self.repo,
            release = %self.release,
            strategy = %self.strategy,
            preview = self.preview,
            "executing changelog command"
        );
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;

        let source = self.preflight(config.github.token_from_env())?;
        let today = chrono::Local::now().date_naive();

        let document = self.generate(&cwd, &config, config_path.as_deref(), source, today)?;
        print!("{}", document);
        Ok(())
    }

    /// Reject option combinations before touching the repository
    fn preflight(&self, env_token: Option<String>) -> Result<ItemSource, ConfigError> {
        semver::Version::parse(&self.release).map_err(|e| ConfigError::InvalidValue {
            field: "release".to_string(),
            message: format!("'{}' is not a semantic version: {}", self.release, e),
        })?;

        match self.strategy {
            Strategy::Git if self.token.is_some() => Err(ConfigError::Conflict {
                first: "--token".to_string(),
                second: "--strategy git".to_string(),
                hint: "The token is only used to look up pull requests; pass --strategy prs."
                    .to_string(),
            }),
            Strategy::Git => Ok(ItemSource::Commits),
            Strategy::Prs => self
                .token
                .clone()
                .or(env_token)
                .filter(|token| !token.is_empty())
                .map(|token| ItemSource::PullRequests { token })
                .ok_or_else(|| {
                    ConfigError::MissingField(
                        "a GitHub token (--token or GITHUB_TOKEN) is required for --strategy prs"
                            .to_string(),
                    )
                }),
        }
    }

    /// Build the document to print; nothing is written to disk
    fn generate(
        &self,
        cwd: &Path,
        config: &Config,
        config_path: Option<&Path>,
        source: ItemSource,
        today: NaiveDate,
    ) -> anyhow::Result<String> {
        let changelog_path = match &self.changelog {
            Some(path) => cwd.join(path),
            None => cwd.join(resolve_relative(&config.changelog.file, config_path)),
        };

        let template = config
            .changelog
            .entry_template
            .as_ref()
            .map(|path| cwd.join(resolve_relative(path, config_path)));
        let renderer = EntryRenderer::with_optional_template(template.as_deref())?;

        let mut assembler = ChangelogAssembler::new();
        if let Some(banner) = &config.changelog.banner {
            assembler = assembler.with_banner(banner.clone());
        }
        if let Some(path) = &config.changelog.banner_template {
            assembler = assembler.with_banner_file(&cwd.join(resolve_relative(path, config_path)))?;
        }

        let previous = read_releases(&changelog_path)
            .with_context(|| format!("reading {}", changelog_path.display()))?;
        debug!(blocks = previous.len(), "parsed existing changelog");

        let tree = self
            .tree
            .as_ref()
            .map(|tree| cwd.join(tree))
            .unwrap_or_else(|| cwd.to_path_buf());
        let repo = GitRepo::open(&tree)?;
        let commits = repo.commits_since_latest_tag()?;
        let worthy = filter_commits(&commits);
        info!(total = commits.len(), worthy = worthy.len(), "filtered commits");

        if worthy.is_empty() {
            output::warning("No changelog-worthy commits since the latest tag.");
        }

        let entry = match source {
            ItemSource::Commits => renderer.render_commits(&self.release, &worthy, today),
            ItemSource::PullRequests { token } => {
                let client = GitHubClient::new(config.github.api_url.clone(), token)?;
                let shas: Vec<&str> = worthy.iter().map(|c| c.hash.as_str()).collect();

                let rt = tokio::runtime::Runtime::new()?;
                let pulls = rt.block_on(resolve_pull_requests(&client, &self.repo, &shas))?;
                info!(pulls = pulls.len(), "resolved pull requests");
                renderer.render_pull_requests(&self.release, &pulls, today)
            }
        };

        if self.preview {
            return Ok(entry.as_str().to_string());
        }
        Ok(assembler.assemble(&entry, &previous))
    }
}
