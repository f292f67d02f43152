//! EOL command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use ccgen_core::config::{load_config_or_default, resolve_relative};
use ccgen_docs::{is_major, update_eol_file, ReleaseVersion};

use crate::cli::Cli;

/// Add the EOL row for a release to the maintenance table
#[derive(Debug, Args)]
pub struct EolCommand {
    /// Release being published, as major.minor.bugfix
    #[arg(long)]
    pub release: String,

    /// Document holding the EOL table (defaults to the configured document)
    #[arg(long, value_name = "PATH")]
    pub doc: Option<PathBuf>,
}

impl EolCommand {
    /// Execute the eol command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        let release = ReleaseVersion::parse(&self.release)?;
        info!(release = %release, major = is_major(&release), "executing eol command");

        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;
        let doc = match &self.doc {
            Some(path) => cwd.join(path),
            None => cwd.join(resolve_relative(&config.eol.doc, config_path.as_deref())),
        };

        let today = chrono::Local::now().date_naive();
        let updated = update_eol_file(&doc, &release, today, config.eol.support_days)?;
        print!("{}", updated);
        Ok(())
    }
}
