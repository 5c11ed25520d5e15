use super::entry::Entry;
use super::index::{ArticleStripper, ArtistIndex};
use crate::datastore::{DataStore, LAST_SCAN_PROPERTY};
use crate::error::{LibraryError, LibraryResult};
use crate::model::{Album, Artist, MediaFile, MediaFolder, QueryOptions};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// An artist's albums or an album's tracks, addressed by a single id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectoryInfo {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
    pub play_count: u32,
    pub user_rating: u8,
    pub starred: Option<DateTime<Utc>>,
    pub entries: Vec<Entry>,
}

impl DirectoryInfo {
    fn for_artist(artist: Artist, albums: &[Album]) -> Self {
        DirectoryInfo {
            id: artist.id,
            name: artist.name,
            parent: None,
            play_count: 0,
            user_rating: 0,
            starred: None,
            entries: albums.iter().map(Entry::from_album).collect(),
        }
    }

    fn for_album(album: Album, tracks: &[MediaFile]) -> Self {
        DirectoryInfo {
            id: album.id,
            name: album.name,
            parent: Some(album.artist_id),
            play_count: album.play_count,
            user_rating: album.rating,
            starred: album.starred_at,
            entries: tracks.iter().map(Entry::from_media_file).collect(),
        }
    }
}

/// Read-only browsing over a library.
pub struct Browser {
    ds: Arc<dyn DataStore>,
    ignored_articles: String,
    stripper: ArticleStripper,
}

impl Browser {
    /// `ignored_articles` is a whitespace separated list, e.g. `"The El La"`.
    pub fn new(ds: Arc<dyn DataStore>, ignored_articles: &str) -> Self {
        Self {
            ds,
            ignored_articles: ignored_articles.to_string(),
            stripper: ArticleStripper::from_config(ignored_articles),
        }
    }

    /// The articles ignored when indexing, as configured.
    pub fn ignored_articles(&self) -> &str {
        &self.ignored_articles
    }

    pub fn media_folders(&self) -> LibraryResult<Vec<MediaFolder>> {
        Ok(self
            .ds
            .media_folder()
            .get_all()
            .context("Failed to list media folders")?)
    }

    /// Builds the artist index unless the library has not changed since
    /// `if_modified_since`, in which case the index list is empty.
    ///
    /// The second value is always the library's last modification time.
    pub fn indexes(
        &self,
        if_modified_since: DateTime<Utc>,
    ) -> LibraryResult<(Vec<ArtistIndex>, DateTime<Utc>)> {
        let last_modified = self.last_modified()?;
        if last_modified <= if_modified_since {
            debug!("indexes: library unchanged since {if_modified_since}");
            return Ok((Vec::new(), last_modified));
        }

        let artists = self
            .ds
            .artist()
            .get_all(&QueryOptions::default())
            .context("Failed to list artists")?;
        let indexes = self.stripper.build_indexes(&artists);
        debug!(
            "indexes: {} artists in {} buckets",
            artists.len(),
            indexes.len()
        );
        Ok((indexes, last_modified))
    }

    /// Resolves `id` to an artist (listing its albums) or an album (listing
    /// its tracks).
    pub fn directory(&self, id: &str) -> LibraryResult<DirectoryInfo> {
        if let Some(artist) = self
            .ds
            .artist()
            .get(id)
            .with_context(|| format!("Failed to load artist {}", id))?
        {
            let albums = self
                .ds
                .album()
                .find_by_artist(id)
                .with_context(|| format!("Failed to list albums of artist {}", id))?;
            debug!("directory({id}): artist with {} albums", albums.len());
            return Ok(DirectoryInfo::for_artist(artist, &albums));
        }

        if let Some(album) = self
            .ds
            .album()
            .get(id)
            .with_context(|| format!("Failed to load album {}", id))?
        {
            let tracks = self
                .ds
                .media_file()
                .find_by_album(id)
                .with_context(|| format!("Failed to list tracks of album {}", id))?;
            debug!("directory({id}): album with {} tracks", tracks.len());
            return Ok(DirectoryInfo::for_album(album, &tracks));
        }

        Err(LibraryError::not_found("directory", id))
    }

    pub fn get_song(&self, id: &str) -> LibraryResult<MediaFile> {
        self.ds
            .media_file()
            .get(id)
            .with_context(|| format!("Failed to load song {}", id))?
            .ok_or_else(|| LibraryError::not_found("song", id))
    }

    fn last_modified(&self) -> LibraryResult<DateTime<Utc>> {
        let Some(value) = self
            .ds
            .property()
            .get(LAST_SCAN_PROPERTY)
            .context("Failed to read last scan time")?
        else {
            return Ok(DateTime::<Utc>::UNIX_EPOCH);
        };

        let millis: i64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} property: {:?}", LAST_SCAN_PROPERTY, value))?;
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            anyhow::anyhow!("{} property out of range: {}", LAST_SCAN_PROPERTY, millis).into()
        })
    }
}
