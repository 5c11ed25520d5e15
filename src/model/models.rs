use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Library content
// =============================================================================

/// Root-level grouping of a library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFolder {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub album_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist_id: String,
    pub artist: String,
    pub album_artist: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover_art_id: Option<String>,
    pub song_count: u32,
    /// Total duration in seconds
    pub duration: u32,
    pub play_count: u32,
    pub rating: u8,
    pub starred_at: Option<DateTime<Utc>>,
}

/// A single track. Most of the metadata is opaque to the browsing and
/// playlist logic and is only carried through to [`crate::Entry`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFile {
    pub id: String,
    pub title: String,
    pub album: String,
    pub album_id: String,
    pub artist: String,
    pub artist_id: String,
    pub album_artist: String,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    /// Duration in seconds
    pub duration: u32,
    /// File size in bytes
    pub size: u64,
    pub suffix: String,
    pub bit_rate: u32,
    pub content_type: String,
    pub path: String,
    pub has_cover_art: bool,
    pub play_count: u32,
    pub play_date: Option<DateTime<Utc>>,
    pub rating: u8,
    pub starred_at: Option<DateTime<Utc>>,
}

// =============================================================================
// User content
// =============================================================================

/// A named, owned, ordered list of track references.
///
/// `tracks` holds media file ids; the same id may appear more than once and
/// the order is the play order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub tracks: Vec<String>,
    pub public: bool,
    pub comment: String,
    /// Total duration in seconds, maintained by the datastore on `put`
    pub duration: u32,
}

impl Playlist {
    pub fn is_owned_by(&self, user: &str) -> bool {
        self.owner == user
    }
}
