//! Read-only views over the library: alphabetic artist indexes, directory
//! listings and single song lookups.

mod browser;
mod entry;
mod index;

pub use browser::{Browser, DirectoryInfo};
pub use entry::Entry;
pub use index::{ArticleStripper, ArtistIndex, ArtistInfo, DEFAULT_IGNORED_ARTICLES, FALLBACK_INDEX};
