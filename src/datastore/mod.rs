//! Datastore capability set consumed by the browser and playlist manager.
//!
//! The traits describe what the core needs from storage; the storage engine
//! itself lives elsewhere. [`MemoryDataStore`] is the in-process
//! implementation used by the CLI and the tests.

mod memory_store;
mod snapshot;
mod trait_def;

pub use memory_store::MemoryDataStore;
pub use snapshot::LibrarySnapshot;
pub use trait_def::{
    AlbumRepository, ArtistRepository, DataStore, MediaFileRepository, MediaFolderRepository,
    PlaylistRepository, PropertyRepository, LAST_SCAN_PROPERTY,
};
