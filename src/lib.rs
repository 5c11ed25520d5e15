//! Sonic Library
//!
//! Browsing and playlist logic for a Subsonic-style music server: alphabetic
//! artist indexes, directory/song lookups and user-owned playlists, all on top
//! of a pluggable [`DataStore`].

pub mod browser;
pub mod config;
pub mod datastore;
pub mod error;
pub mod model;
pub mod playlists;

// Re-export commonly used types for convenience
pub use browser::{ArtistIndex, ArtistInfo, Browser, DirectoryInfo, Entry};
pub use datastore::{DataStore, LibrarySnapshot, MemoryDataStore};
pub use error::LibraryError;
pub use playlists::{PlaylistInfo, PlaylistManager};
