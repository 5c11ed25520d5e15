//! Configuration resolution: command-line values, optionally overridden by a
//! TOML file, with defaults for everything else.

mod file_config;

pub use file_config::FileConfig;

use crate::browser::DEFAULT_IGNORED_ARTICLES;
use crate::playlists::DEFAULT_INITIAL_USER;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line values that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub snapshot_path: Option<PathBuf>,
    pub ignored_articles: Option<String>,
    pub initial_user: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub snapshot_path: PathBuf,
    pub ignored_articles: String,
    pub initial_user: String,
    /// Log filter set by the command line or the config file, if any.
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let snapshot_path = file
            .snapshot_path
            .map(PathBuf::from)
            .or_else(|| cli.snapshot_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "snapshot_path must be specified via --snapshot or in config file"
                )
            })?;
        if !snapshot_path.is_file() {
            bail!("Library snapshot does not exist: {:?}", snapshot_path);
        }

        let ignored_articles = file
            .ignored_articles
            .or_else(|| cli.ignored_articles.clone())
            .unwrap_or_else(|| DEFAULT_IGNORED_ARTICLES.to_string());

        let initial_user = file
            .initial_user
            .or_else(|| cli.initial_user.clone())
            .unwrap_or_else(|| DEFAULT_INITIAL_USER.to_string());
        if initial_user.trim().is_empty() {
            bail!("initial_user cannot be empty");
        }

        let log_level = file.log_level.or_else(|| cli.log_level.clone());
        if let Some(log_level) = &log_level {
            EnvFilter::try_new(log_level)
                .with_context(|| format!("Invalid log level: {:?}", log_level))?;
        }

        Ok(Self {
            snapshot_path,
            ignored_articles,
            initial_user,
            log_level,
        })
    }

    /// Filter directives for the log subscriber: the configured level, else
    /// the `LOG_LEVEL` environment value, else [`DEFAULT_LOG_LEVEL`].
    pub fn log_directives(&self, env_log_level: Option<&str>) -> String {
        self.log_level
            .as_deref()
            .or(env_log_level.filter(|value| !value.trim().is_empty()))
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string()
    }
}
