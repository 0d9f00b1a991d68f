//! CLI argument parsing

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use verlife::prelude::*;

/// Show which versions each endpoint of the sample API is served under
#[derive(Parser, Debug)]
#[command(name = "lifecycle-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Oldest version still served (falls back to API_VERSION_START)
    #[arg(long, requires = "current")]
    start: Option<u16>,

    /// Current version (falls back to API_VERSION_CURRENT)
    #[arg(long, requires = "start")]
    current: Option<u16>,

    /// Read environment variables from this file instead of `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Version assigned to controllers without lifecycle attributes
    #[arg(long, default_value_t = 1)]
    default_version: u32,

    /// Leave controllers without lifecycle attributes unversioned
    #[arg(long)]
    no_default: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Cli {
    /// The version window from the command line or the environment
    pub fn versioning_config(&self) -> anyhow::Result<VersioningConfig> {
        if let (Some(start), Some(current)) = (self.start, self.current) {
            return Ok(VersioningConfig::new(start, current));
        }

        match &self.env_file {
            Some(path) => load_dotenv_from(path),
            None => load_dotenv(),
        }

        VersioningConfig::from_env()
            .context("pass --start and --current or set API_VERSION_START and API_VERSION_CURRENT")
    }

    /// The convention builder controllers fall back to when deferred
    pub fn convention_builder(&self) -> ApiVersionConventionBuilder {
        ApiVersionConventionBuilder::new()
            .default_version(ApiVersion::major(self.default_version))
            .assume_default_version(!self.no_default)
    }
}
