//! Repository trait definitions.
//!
//! Lookups return `Ok(None)` when the entity does not exist and reserve `Err`
//! for actual storage failures.

use crate::model::{Album, Artist, MediaFile, MediaFolder, Playlist, QueryOptions};
use anyhow::Result;

/// Property holding the time of the last library scan, in Unix milliseconds.
pub const LAST_SCAN_PROPERTY: &str = "LastScan";

pub trait MediaFolderRepository: Send + Sync {
    /// Returns all root media folders.
    fn get_all(&self) -> Result<Vec<MediaFolder>>;
}

pub trait ArtistRepository: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<Artist>>;

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Artist>>;
}

pub trait AlbumRepository: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<Album>>;

    /// Returns the albums of an artist, oldest first.
    fn find_by_artist(&self, artist_id: &str) -> Result<Vec<Album>>;
}

pub trait MediaFileRepository: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<MediaFile>>;

    /// Returns the tracks of an album ordered by disc and track number.
    fn find_by_album(&self, album_id: &str) -> Result<Vec<MediaFile>>;
}

pub trait PlaylistRepository: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<Playlist>>;

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Playlist>>;

    /// Inserts or replaces a playlist and returns its id.
    /// A playlist with an empty id gets a freshly generated one.
    fn put(&self, playlist: &Playlist) -> Result<String>;

    /// Deletes a playlist. Returns false if there was nothing to delete.
    fn delete(&self, id: &str) -> Result<bool>;
}

pub trait PropertyRepository: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Access to every repository of a library.
pub trait DataStore: Send + Sync {
    fn media_folder(&self) -> &dyn MediaFolderRepository;

    fn artist(&self) -> &dyn ArtistRepository;

    fn album(&self) -> &dyn AlbumRepository;

    fn media_file(&self) -> &dyn MediaFileRepository;

    fn playlist(&self) -> &dyn PlaylistRepository;

    fn property(&self) -> &dyn PropertyRepository;
}
