//! In-memory datastore.
//!
//! Every table is a `Mutex`-guarded map keyed by entity id. Each call locks a
//! single table for its own duration only, so a read-modify-write done by a
//! caller across several calls is not atomic.

use super::trait_def::{
    AlbumRepository, ArtistRepository, DataStore, MediaFileRepository, MediaFolderRepository,
    PlaylistRepository, PropertyRepository, LAST_SCAN_PROPERTY,
};
use crate::model::{Album, Artist, MediaFile, MediaFolder, Playlist, QueryOptions};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

struct Table<T> {
    name: &'static str,
    rows: Mutex<BTreeMap<String, T>>,
}

impl<T: Clone> Table<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: Mutex::new(BTreeMap::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, T>>> {
        self.rows
            .lock()
            .map_err(|_| anyhow!("{} table lock poisoned", self.name))
    }

    fn row(&self, id: &str) -> Result<Option<T>> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn rows(&self) -> Result<Vec<T>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn rows_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Result<Vec<T>> {
        Ok(self
            .lock()?
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect())
    }

    fn insert(&self, id: String, row: T) -> Result<()> {
        self.lock()?.insert(id, row);
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool> {
        Ok(self.lock()?.remove(id).is_some())
    }
}

impl MediaFolderRepository for Table<MediaFolder> {
    fn get_all(&self) -> Result<Vec<MediaFolder>> {
        self.rows()
    }
}

impl ArtistRepository for Table<Artist> {
    fn get(&self, id: &str) -> Result<Option<Artist>> {
        self.row(id)
    }

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Artist>> {
        Ok(options.apply(self.rows()?, |artist, field| match field {
            "id" => Some(artist.id.clone()),
            "name" => Some(artist.name.clone()),
            _ => None,
        }))
    }
}

impl AlbumRepository for Table<Album> {
    fn get(&self, id: &str) -> Result<Option<Album>> {
        self.row(id)
    }

    fn find_by_artist(&self, artist_id: &str) -> Result<Vec<Album>> {
        let mut albums = self.rows_where(|album| album.artist_id == artist_id)?;
        // Albums without a year go last
        albums.sort_by_cached_key(|album| {
            (
                album.year.is_none(),
                album.year,
                album.name.to_lowercase(),
                album.id.clone(),
            )
        });
        Ok(albums)
    }
}

impl MediaFileRepository for Table<MediaFile> {
    fn get(&self, id: &str) -> Result<Option<MediaFile>> {
        self.row(id)
    }

    fn find_by_album(&self, album_id: &str) -> Result<Vec<MediaFile>> {
        let mut tracks = self.rows_where(|track| track.album_id == album_id)?;
        tracks.sort_by(|a, b| {
            (a.disc_number.unwrap_or(0), a.track_number.unwrap_or(0), &a.id).cmp(&(
                b.disc_number.unwrap_or(0),
                b.track_number.unwrap_or(0),
                &b.id,
            ))
        });
        Ok(tracks)
    }
}

struct PlaylistTable {
    playlists: Table<Playlist>,
    media_files: Arc<Table<MediaFile>>,
}

impl PlaylistTable {
    /// Sum of the durations of the tracks that can be resolved.
    fn total_duration(&self, track_ids: &[String]) -> Result<u32> {
        let media_files = self.media_files.lock()?;
        Ok(track_ids
            .iter()
            .filter_map(|id| media_files.get(id))
            .map(|track| track.duration)
            .sum())
    }
}

impl PlaylistRepository for PlaylistTable {
    fn get(&self, id: &str) -> Result<Option<Playlist>> {
        self.playlists.row(id)
    }

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Playlist>> {
        Ok(options.apply(self.playlists.rows()?, |playlist, field| match field {
            "id" => Some(playlist.id.clone()),
            "name" => Some(playlist.name.clone()),
            "owner" => Some(playlist.owner.clone()),
            _ => None,
        }))
    }

    fn put(&self, playlist: &Playlist) -> Result<String> {
        let mut stored = playlist.clone();
        if stored.id.is_empty() {
            stored.id = Uuid::new_v4().to_string();
        }
        stored.duration = self.total_duration(&stored.tracks)?;

        debug!(
            "put playlist {} ({} tracks, {}s)",
            stored.id,
            stored.tracks.len(),
            stored.duration
        );
        let id = stored.id.clone();
        self.playlists.insert(id.clone(), stored)?;
        Ok(id)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        self.playlists.remove(id)
    }
}

impl PropertyRepository for Table<String> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.row(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.insert(key.to_string(), value.to_string())
    }
}

/// A [`DataStore`] kept entirely in memory.
pub struct MemoryDataStore {
    media_folders: Table<MediaFolder>,
    artists: Table<Artist>,
    albums: Table<Album>,
    media_files: Arc<Table<MediaFile>>,
    playlists: PlaylistTable,
    properties: Table<String>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        let media_files = Arc::new(Table::new("media_file"));
        Self {
            media_folders: Table::new("media_folder"),
            artists: Table::new("artist"),
            albums: Table::new("album"),
            media_files: media_files.clone(),
            playlists: PlaylistTable {
                playlists: Table::new("playlist"),
                media_files,
            },
            properties: Table::new("property"),
        }
    }

    pub fn add_media_folder(&self, folder: MediaFolder) -> Result<()> {
        self.media_folders.insert(folder.id.clone(), folder)
    }

    pub fn add_artist(&self, artist: Artist) -> Result<()> {
        self.artists.insert(artist.id.clone(), artist)
    }

    pub fn add_album(&self, album: Album) -> Result<()> {
        self.albums.insert(album.id.clone(), album)
    }

    pub fn add_media_file(&self, media_file: MediaFile) -> Result<()> {
        self.media_files.insert(media_file.id.clone(), media_file)
    }

    /// Stores a playlist as-is, without assigning an id or recomputing its
    /// duration.
    pub fn add_playlist(&self, playlist: Playlist) -> Result<()> {
        if playlist.id.is_empty() {
            return Err(anyhow!("Cannot seed a playlist without an id"));
        }
        self.playlists.playlists.insert(playlist.id.clone(), playlist)
    }

    /// Records the time of the last library scan.
    pub fn set_last_scan(&self, time: DateTime<Utc>) -> Result<()> {
        self.properties
            .insert(LAST_SCAN_PROPERTY.to_string(), time.timestamp_millis().to_string())
    }

    pub(super) fn all_properties(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.properties.lock()?.clone())
    }

    pub(super) fn all_artists(&self) -> Result<Vec<Artist>> {
        self.artists.rows()
    }

    pub(super) fn all_albums(&self) -> Result<Vec<Album>> {
        self.albums.rows()
    }

    pub(super) fn all_media_files(&self) -> Result<Vec<MediaFile>> {
        self.media_files.rows()
    }

    pub(super) fn all_playlists(&self) -> Result<Vec<Playlist>> {
        self.playlists.playlists.rows()
    }
}

impl Default for MemoryDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for MemoryDataStore {
    fn media_folder(&self) -> &dyn MediaFolderRepository {
        &self.media_folders
    }

    fn artist(&self) -> &dyn ArtistRepository {
        &self.artists
    }

    fn album(&self) -> &dyn AlbumRepository {
        &self.albums
    }

    fn media_file(&self) -> &dyn MediaFileRepository {
        self.media_files.as_ref()
    }

    fn playlist(&self) -> &dyn PlaylistRepository {
        &self.playlists
    }

    fn property(&self) -> &dyn PropertyRepository {
        &self.properties
    }
}
