use crate::model::{Album, MediaFile};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A child of a directory or a playlist, in the shape the API layer renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub is_dir: bool,
    pub parent: String,
    pub album: String,
    pub year: Option<i32>,
    pub artist: String,
    pub genre: Option<String>,
    pub cover_art: Option<String>,
    pub starred: Option<DateTime<Utc>>,
    pub track: Option<u32>,
    pub disc: Option<u32>,
    pub duration: u32,
    pub size: u64,
    pub suffix: String,
    pub bit_rate: u32,
    pub content_type: String,
    pub path: String,
    pub play_count: u32,
    pub last_played: Option<DateTime<Utc>>,
    pub user_rating: u8,
    pub album_id: String,
    pub artist_id: String,
    /// "music" for tracks, empty for directories
    pub kind: String,
}

impl Entry {
    pub fn from_album(album: &Album) -> Self {
        Entry {
            id: album.id.clone(),
            title: album.name.clone(),
            is_dir: true,
            parent: album.artist_id.clone(),
            album: album.name.clone(),
            year: album.year,
            artist: album.album_artist.clone(),
            genre: album.genre.clone(),
            cover_art: album.cover_art_id.clone(),
            starred: album.starred_at,
            duration: album.duration,
            play_count: album.play_count,
            user_rating: album.rating,
            album_id: album.id.clone(),
            artist_id: album.artist_id.clone(),
            ..Default::default()
        }
    }

    pub fn from_media_file(media_file: &MediaFile) -> Self {
        Entry {
            id: media_file.id.clone(),
            title: media_file.title.clone(),
            is_dir: false,
            parent: media_file.album_id.clone(),
            album: media_file.album.clone(),
            year: media_file.year,
            artist: media_file.artist.clone(),
            genre: media_file.genre.clone(),
            // Tracks carrying embedded art are their own cover
            cover_art: media_file
                .has_cover_art
                .then(|| media_file.id.clone()),
            starred: media_file.starred_at,
            track: media_file.track_number,
            disc: media_file.disc_number,
            duration: media_file.duration,
            size: media_file.size,
            suffix: media_file.suffix.clone(),
            bit_rate: media_file.bit_rate,
            content_type: media_file.content_type.clone(),
            path: media_file.path.clone(),
            play_count: media_file.play_count,
            last_played: media_file.play_date,
            user_rating: media_file.rating,
            album_id: media_file.album_id.clone(),
            artist_id: media_file.artist_id.clone(),
            kind: "music".to_string(),
        }
    }
}
