//! DataStore wrappers that block or fail repository calls.

use anyhow::{bail, Result};
use sonic_library::datastore::{
    AlbumRepository, ArtistRepository, DataStore, MediaFileRepository, MediaFolderRepository,
    PlaylistRepository, PropertyRepository,
};
use sonic_library::model::{Album, Artist, MediaFile, MediaFolder, Playlist, QueryOptions};
use sonic_library::MemoryDataStore;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};

/// Delegates to a [`MemoryDataStore`], but every playlist `get` blocks until
/// `parties` callers have reached it.
///
/// Lets two updates both read the same playlist before either writes.
pub struct BarrierStore {
    inner: Arc<MemoryDataStore>,
    playlists: BarrierPlaylists,
}

struct BarrierPlaylists {
    inner: Arc<MemoryDataStore>,
    barrier: Barrier,
}

impl BarrierStore {
    pub fn new(inner: Arc<MemoryDataStore>, parties: usize) -> Self {
        Self {
            inner: inner.clone(),
            playlists: BarrierPlaylists {
                inner,
                barrier: Barrier::new(parties),
            },
        }
    }
}

impl PlaylistRepository for BarrierPlaylists {
    fn get(&self, id: &str) -> Result<Option<Playlist>> {
        let playlist = self.inner.playlist().get(id)?;
        self.barrier.wait();
        Ok(playlist)
    }

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Playlist>> {
        self.inner.playlist().get_all(options)
    }

    fn put(&self, playlist: &Playlist) -> Result<String> {
        self.inner.playlist().put(playlist)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        self.inner.playlist().delete(id)
    }
}

impl DataStore for BarrierStore {
    fn media_folder(&self) -> &dyn MediaFolderRepository {
        self.inner.media_folder()
    }

    fn artist(&self) -> &dyn ArtistRepository {
        self.inner.artist()
    }

    fn album(&self) -> &dyn AlbumRepository {
        self.inner.album()
    }

    fn media_file(&self) -> &dyn MediaFileRepository {
        self.inner.media_file()
    }

    fn playlist(&self) -> &dyn PlaylistRepository {
        &self.playlists
    }

    fn property(&self) -> &dyn PropertyRepository {
        self.inner.property()
    }
}

/// A table whose repository calls fail in a [`FailingStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    MediaFolders,
    Artists,
    Albums,
    MediaFiles,
    /// Only writes and deletes fail, loads still succeed.
    Playlists,
}

/// Delegates to a [`MemoryDataStore`], except that every call on one of the
/// `failing` tables returns an error.
pub struct FailingStore {
    repos: FaultyRepositories,
}

struct FaultyRepositories {
    inner: Arc<MemoryDataStore>,
    failing: HashSet<Table>,
}

impl FailingStore {
    pub fn new(inner: Arc<MemoryDataStore>, failing: &[Table]) -> Self {
        Self {
            repos: FaultyRepositories {
                inner,
                failing: failing.iter().copied().collect(),
            },
        }
    }
}

impl FaultyRepositories {
    fn check(&self, table: Table) -> Result<()> {
        if self.failing.contains(&table) {
            bail!("{:?} table unavailable", table);
        }
        Ok(())
    }
}

impl MediaFolderRepository for FaultyRepositories {
    fn get_all(&self) -> Result<Vec<MediaFolder>> {
        self.check(Table::MediaFolders)?;
        self.inner.media_folder().get_all()
    }
}

impl ArtistRepository for FaultyRepositories {
    fn get(&self, id: &str) -> Result<Option<Artist>> {
        self.check(Table::Artists)?;
        self.inner.artist().get(id)
    }

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Artist>> {
        self.check(Table::Artists)?;
        self.inner.artist().get_all(options)
    }
}

impl AlbumRepository for FaultyRepositories {
    fn get(&self, id: &str) -> Result<Option<Album>> {
        self.check(Table::Albums)?;
        self.inner.album().get(id)
    }

    fn find_by_artist(&self, artist_id: &str) -> Result<Vec<Album>> {
        self.check(Table::Albums)?;
        self.inner.album().find_by_artist(artist_id)
    }
}

impl MediaFileRepository for FaultyRepositories {
    fn get(&self, id: &str) -> Result<Option<MediaFile>> {
        self.check(Table::MediaFiles)?;
        self.inner.media_file().get(id)
    }

    fn find_by_album(&self, album_id: &str) -> Result<Vec<MediaFile>> {
        self.check(Table::MediaFiles)?;
        self.inner.media_file().find_by_album(album_id)
    }
}

impl PlaylistRepository for FaultyRepositories {
    fn get(&self, id: &str) -> Result<Option<Playlist>> {
        self.inner.playlist().get(id)
    }

    fn get_all(&self, options: &QueryOptions) -> Result<Vec<Playlist>> {
        self.inner.playlist().get_all(options)
    }

    fn put(&self, playlist: &Playlist) -> Result<String> {
        self.check(Table::Playlists)?;
        self.inner.playlist().put(playlist)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        self.check(Table::Playlists)?;
        self.inner.playlist().delete(id)
    }
}

impl DataStore for FailingStore {
    fn media_folder(&self) -> &dyn MediaFolderRepository {
        &self.repos
    }

    fn artist(&self) -> &dyn ArtistRepository {
        &self.repos
    }

    fn album(&self) -> &dyn AlbumRepository {
        &self.repos
    }

    fn media_file(&self) -> &dyn MediaFileRepository {
        &self.repos
    }

    fn playlist(&self) -> &dyn PlaylistRepository {
        &self.repos
    }

    fn property(&self) -> &dyn PropertyRepository {
        self.repos.inner.property()
    }
}
