//! Alphabetic bucketing of artists.

use crate::model::Artist;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_IGNORED_ARTICLES: &str = "The El La Los Las Le Les Os As O A";

/// Bucket for names that do not start with a letter.
pub const FALLBACK_INDEX: &str = "#";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtistInfo {
    pub artist_id: String,
    pub artist: String,
}

/// One alphabetic bucket of artists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtistIndex {
    /// The bucket key, a single upper-case letter or [`FALLBACK_INDEX`].
    pub id: String,
    pub artists: Vec<ArtistInfo>,
}

/// Computes sort keys by removing a leading article from a name.
#[derive(Clone, Debug, Default)]
pub struct ArticleStripper {
    /// Lower-cased articles, in configuration order.
    articles: Vec<String>,
}

impl ArticleStripper {
    pub fn new<I, S>(articles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            articles: articles
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// Parses a whitespace separated list such as `"The El La"`.
    pub fn from_config(articles: &str) -> Self {
        Self::new(articles.split_whitespace())
    }

    pub fn articles(&self) -> &[String] {
        &self.articles
    }

    /// Lower-cased name without its leading article.
    ///
    /// The first configured article followed by whitespace is removed, once.
    /// A name made of the article alone is kept whole.
    pub fn sort_key(&self, name: &str) -> String {
        let lower = name.trim().to_lowercase();
        for article in &self.articles {
            if let Some(rest) = lower.strip_prefix(article.as_str()) {
                if rest.starts_with(char::is_whitespace) {
                    let rest = rest.trim_start();
                    if !rest.is_empty() {
                        return rest.to_string();
                    }
                }
            }
        }
        lower
    }

    /// Bucket key for a sort key.
    pub fn index_key(sort_key: &str) -> String {
        match sort_key.chars().next() {
            Some(c) if c.is_alphabetic() => c.to_uppercase().next().unwrap_or(c).to_string(),
            _ => FALLBACK_INDEX.to_string(),
        }
    }

    /// Groups artists into buckets ordered by key, each bucket ordered by sort
    /// key and then artist id.
    pub fn build_indexes(&self, artists: &[Artist]) -> Vec<ArtistIndex> {
        let mut buckets: BTreeMap<String, Vec<(String, &Artist)>> = BTreeMap::new();
        for artist in artists {
            let sort_key = self.sort_key(&artist.name);
            buckets
                .entry(Self::index_key(&sort_key))
                .or_default()
                .push((sort_key, artist));
        }

        buckets
            .into_iter()
            .map(|(id, mut entries)| {
                entries.sort_by(|(key_a, a), (key_b, b)| {
                    key_a.cmp(key_b).then_with(|| a.id.cmp(&b.id))
                });
                ArtistIndex {
                    id,
                    artists: entries
                        .into_iter()
                        .map(|(_, artist)| ArtistInfo {
                            artist_id: artist.id.clone(),
                            artist: artist.name.clone(),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}
