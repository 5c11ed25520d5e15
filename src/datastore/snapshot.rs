//! JSON snapshot of a whole library, used to seed a [`MemoryDataStore`].

use super::{DataStore, MemoryDataStore};
use crate::model::{Album, Artist, MediaFile, MediaFolder, Playlist};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySnapshot {
    pub media_folders: Vec<MediaFolder>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub media_files: Vec<MediaFile>,
    pub playlists: Vec<Playlist>,
    pub properties: BTreeMap<String, String>,
}

impl LibrarySnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read library snapshot: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse library snapshot: {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize library snapshot")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write library snapshot: {:?}", path))
    }

    /// Builds an in-memory store holding every entity of the snapshot.
    pub fn into_store(self) -> Result<MemoryDataStore> {
        let store = MemoryDataStore::new();
        info!(
            "Seeding library: {} folders, {} artists, {} albums, {} tracks, {} playlists",
            self.media_folders.len(),
            self.artists.len(),
            self.albums.len(),
            self.media_files.len(),
            self.playlists.len()
        );

        for folder in self.media_folders {
            store.add_media_folder(folder)?;
        }
        for artist in self.artists {
            store.add_artist(artist)?;
        }
        for album in self.albums {
            store.add_album(album)?;
        }
        for media_file in self.media_files {
            store.add_media_file(media_file)?;
        }
        for playlist in self.playlists {
            store.add_playlist(playlist)?;
        }
        for (key, value) in &self.properties {
            store.property().put(key, value)?;
        }
        Ok(store)
    }

    /// Captures the current content of a store.
    pub fn capture(store: &MemoryDataStore) -> Result<Self> {
        Ok(Self {
            media_folders: store.media_folder().get_all()?,
            artists: store.all_artists()?,
            albums: store.all_albums()?,
            media_files: store.all_media_files()?,
            playlists: store.all_playlists()?,
            properties: store.all_properties()?,
        })
    }
}
