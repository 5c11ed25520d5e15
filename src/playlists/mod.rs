//! User-owned playlists: creation, full replacement, incremental edits and
//! deletion, with ownership enforced on every mutation.

mod playlist_manager;
mod playlist_models;

pub use playlist_manager::{PlaylistManager, DEFAULT_INITIAL_USER};
pub use playlist_models::PlaylistInfo;
