use crate::browser::Entry;
use crate::model::Playlist;
use serde::Serialize;

/// A playlist with its track references resolved to full entries.
///
/// Built on every read and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub name: String,
    pub entries: Vec<Entry>,
    pub song_count: usize,
    /// Total duration in seconds
    pub duration: u32,
    pub public: bool,
    pub owner: String,
    pub comment: String,
}

impl PlaylistInfo {
    pub(super) fn new(playlist: Playlist, entries: Vec<Entry>) -> Self {
        PlaylistInfo {
            id: playlist.id,
            name: playlist.name,
            song_count: playlist.tracks.len(),
            entries,
            duration: playlist.duration,
            public: playlist.public,
            owner: playlist.owner,
            comment: playlist.comment,
        }
    }
}
