use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sonic_library::config::{AppConfig, CliConfig, FileConfig};
use sonic_library::{Browser, DataStore, LibrarySnapshot, PlaylistManager};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[clap(version)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the JSON library snapshot.
    #[clap(long, value_parser = parse_path)]
    pub snapshot: Option<PathBuf>,

    /// Whitespace separated articles ignored when indexing artists.
    #[clap(long)]
    pub ignored_articles: Option<String>,

    /// User acting on requests that carry no identity.
    #[clap(long)]
    pub initial_user: Option<String>,

    /// Log filter directive. Takes precedence over the LOG_LEVEL environment variable.
    #[clap(long)]
    pub log_level: Option<String>,

    /// The user to act as.
    #[clap(short, long)]
    pub user: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the root media folders.
    Folders,

    /// Show the alphabetic artist index.
    Indexes {
        /// Only build the index if the library changed after this Unix time in milliseconds.
        #[clap(long)]
        if_modified_since: Option<i64>,
    },

    /// List the albums of an artist or the tracks of an album.
    Directory { id: String },

    /// Show a single song.
    Song { id: String },

    /// List all playlists.
    Playlists,

    /// Show a playlist with its tracks.
    Playlist { id: String },

    /// Create a playlist, or replace the tracks of an existing one.
    CreatePlaylist {
        #[clap(long)]
        id: Option<String>,
        #[clap(long)]
        name: Option<String>,
        tracks: Vec<String>,
    },

    /// Rename a playlist, remove tracks by position and append new ones.
    UpdatePlaylist {
        id: String,
        #[clap(long)]
        name: Option<String>,
        #[clap(long = "add")]
        add: Vec<String>,
        #[clap(long = "remove")]
        remove: Vec<usize>,
    },

    /// Delete a playlist.
    DeletePlaylist { id: String },
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::CreatePlaylist { .. }
                | Command::UpdatePlaylist { .. }
                | Command::DeletePlaylist { .. }
        )
    }
}

fn init_logging(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter: {:?}", directives))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        snapshot_path: cli_args.snapshot.clone(),
        ignored_articles: cli_args.ignored_articles.clone(),
        initial_user: cli_args.initial_user.clone(),
        log_level: cli_args.log_level.clone(),
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;
    init_logging(&config.log_directives(std::env::var("LOG_LEVEL").ok().as_deref()))?;

    info!(
        "Loading library snapshot from {:?}...",
        config.snapshot_path
    );
    let store = Arc::new(LibrarySnapshot::load(&config.snapshot_path)?.into_store()?);
    let ds: Arc<dyn DataStore> = store.clone();
    let browser = Browser::new(ds.clone(), &config.ignored_articles);
    let playlists = PlaylistManager::new(ds, config.initial_user.clone());
    let user = cli_args.user.as_deref();

    debug!("Running {:?}", cli_args.command);
    match &cli_args.command {
        Command::Folders => print_json(&browser.media_folders()?)?,
        Command::Indexes { if_modified_since } => {
            let since = match if_modified_since {
                Some(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                    .with_context(|| format!("Invalid timestamp: {}", millis))?,
                None => DateTime::<Utc>::MIN_UTC,
            };
            let (indexes, last_modified) = browser.indexes(since)?;
            print_json(&serde_json::json!({
                "ignoredArticles": browser.ignored_articles(),
                "lastModified": last_modified.timestamp_millis(),
                "index": indexes,
            }))?
        }
        Command::Directory { id } => print_json(&browser.directory(id)?)?,
        Command::Song { id } => print_json(&browser.get_song(id)?)?,
        Command::Playlists => print_json(&playlists.get_all()?)?,
        Command::Playlist { id } => print_json(&playlists.get(id)?)?,
        Command::CreatePlaylist { id, name, tracks } => {
            let id = playlists.create(user, id.as_deref(), name.as_deref(), tracks)?;
            println!("{}", id);
        }
        Command::UpdatePlaylist {
            id,
            name,
            add,
            remove,
        } => playlists.update(user, id, name.as_deref(), add, remove)?,
        Command::DeletePlaylist { id } => playlists.delete(user, id)?,
    }

    if cli_args.command.mutates() {
        LibrarySnapshot::capture(&store)?.save(&config.snapshot_path)?;
        info!("Saved library snapshot to {:?}", config.snapshot_path);
    }
    Ok(())
}
