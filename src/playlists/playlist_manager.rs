use super::playlist_models::PlaylistInfo;
use crate::browser::Entry;
use crate::datastore::DataStore;
use crate::error::{LibraryError, LibraryResult};
use crate::model::{Playlist, QueryOptions};
use anyhow::Context;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User acting on requests that carry no identity.
pub const DEFAULT_INITIAL_USER: &str = "admin";

/// Playlist operations on top of a [`DataStore`].
///
/// Every mutation loads the whole playlist, changes it in memory and writes it
/// back with a single `put`. Nothing guards that sequence: two concurrent
/// mutations of the same playlist race and the last writer wins.
pub struct PlaylistManager {
    ds: Arc<dyn DataStore>,
    initial_user: String,
}

impl PlaylistManager {
    pub fn new(ds: Arc<dyn DataStore>, initial_user: impl Into<String>) -> Self {
        Self {
            ds,
            initial_user: initial_user.into(),
        }
    }

    /// The identity a request acts as.
    pub fn acting_user<'a>(&'a self, user: Option<&'a str>) -> &'a str {
        user.unwrap_or(self.initial_user.as_str())
    }

    /// All playlists, regardless of owner.
    pub fn get_all(&self) -> LibraryResult<Vec<Playlist>> {
        Ok(self
            .ds
            .playlist()
            .get_all(&QueryOptions::default())
            .context("Failed to list playlists")?)
    }

    /// Loads a playlist and resolves each of its tracks, keeping their order.
    pub fn get(&self, playlist_id: &str) -> LibraryResult<PlaylistInfo> {
        let playlist = self.load(playlist_id)?;

        debug!(
            "get({playlist_id}) resolving {} tracks...",
            playlist.tracks.len()
        );
        let mut entries = Vec::with_capacity(playlist.tracks.len());
        for track_id in &playlist.tracks {
            let media_file = self
                .ds
                .media_file()
                .get(track_id)
                .with_context(|| format!("Failed to load track {}", track_id))?
                .ok_or_else(|| LibraryError::not_found("track", track_id.as_str()))?;
            entries.push(Entry::from_media_file(&media_file));
        }

        Ok(PlaylistInfo::new(playlist, entries))
    }

    /// Creates a playlist, or replaces all tracks of an existing one when
    /// `playlist_id` is given. Returns the id of the stored playlist.
    ///
    /// When replacing, `name` renames the playlist only if present.
    pub fn create(
        &self,
        user: Option<&str>,
        playlist_id: Option<&str>,
        name: Option<&str>,
        track_ids: &[String],
    ) -> LibraryResult<String> {
        let owner = self.acting_user(user);

        let playlist = match playlist_id.filter(|id| !id.is_empty()) {
            Some(playlist_id) => {
                let mut playlist = self.load(playlist_id)?;
                self.authorize(owner, &playlist)?;
                debug!(
                    "create({playlist_id}) replacing {} tracks with {}",
                    playlist.tracks.len(),
                    track_ids.len()
                );
                if let Some(name) = name {
                    playlist.name = name.to_string();
                }
                playlist.tracks = track_ids.to_vec();
                playlist
            }
            None => Playlist {
                name: name.unwrap_or_default().to_string(),
                owner: owner.to_string(),
                tracks: track_ids.to_vec(),
                ..Default::default()
            },
        };

        let id = self
            .ds
            .playlist()
            .put(&playlist)
            .context("Failed to store playlist")?;
        info!(
            "Stored playlist {} for {} with {} tracks",
            id,
            owner,
            playlist.tracks.len()
        );
        Ok(id)
    }

    /// Renames a playlist and edits its tracks.
    ///
    /// Positions in `idx_to_remove` are 0-based and refer to the track list
    /// before the edit; positions past its end are ignored. Tracks in
    /// `ids_to_add` are appended after the surviving tracks.
    pub fn update(
        &self,
        user: Option<&str>,
        playlist_id: &str,
        name: Option<&str>,
        ids_to_add: &[String],
        idx_to_remove: &[usize],
    ) -> LibraryResult<()> {
        let mut playlist = self.load(playlist_id)?;
        self.authorize(self.acting_user(user), &playlist)?;

        if let Some(name) = name {
            debug!("update({playlist_id}) renaming to {name}");
            playlist.name = name.to_string();
        }

        debug!(
            "update({playlist_id}) removing {} positions, adding {} tracks",
            idx_to_remove.len(),
            ids_to_add.len()
        );
        playlist.tracks = edit_tracks(&playlist.tracks, ids_to_add, idx_to_remove);

        self.ds
            .playlist()
            .put(&playlist)
            .with_context(|| format!("Failed to store playlist {}", playlist_id))?;
        Ok(())
    }

    pub fn delete(&self, user: Option<&str>, playlist_id: &str) -> LibraryResult<()> {
        let playlist = self.load(playlist_id)?;
        self.authorize(self.acting_user(user), &playlist)?;

        let deleted = self
            .ds
            .playlist()
            .delete(playlist_id)
            .with_context(|| format!("Failed to delete playlist {}", playlist_id))?;
        if !deleted {
            return Err(LibraryError::not_found("playlist", playlist_id));
        }
        info!("Deleted playlist {}", playlist_id);
        Ok(())
    }

    fn load(&self, playlist_id: &str) -> LibraryResult<Playlist> {
        self.ds
            .playlist()
            .get(playlist_id)
            .with_context(|| format!("Failed to load playlist {}", playlist_id))?
            .ok_or_else(|| LibraryError::not_found("playlist", playlist_id))
    }

    fn authorize(&self, user: &str, playlist: &Playlist) -> LibraryResult<()> {
        if playlist.is_owned_by(user) {
            return Ok(());
        }
        warn!(
            "User {} is not the owner of playlist {} (owner: {})",
            user, playlist.id, playlist.owner
        );
        Err(LibraryError::NotAuthorized {
            user: user.to_string(),
            playlist_id: playlist.id.clone(),
        })
    }
}

/// Drops the tracks at `idx_to_remove`, then appends `ids_to_add`.
fn edit_tracks(current: &[String], ids_to_add: &[String], idx_to_remove: &[usize]) -> Vec<String> {
    let removed: HashSet<usize> = idx_to_remove.iter().copied().collect();
    current
        .iter()
        .enumerate()
        .filter(|(position, _)| !removed.contains(position))
        .map(|(_, track_id)| track_id.clone())
        .chain(ids_to_add.iter().cloned())
        .collect()
}
