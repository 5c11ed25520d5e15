use serde::{Deserialize, Serialize};

/// Listing constraints for `get_all` style queries.
///
/// `QueryOptions::default()` means "everything, in the datastore's natural
/// order".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Field to sort by; unknown fields keep the natural order.
    pub sort: Option<String>,
    pub desc: bool,
    pub offset: usize,
    /// Maximum number of results, 0 means unlimited.
    pub size: usize,
}

impl QueryOptions {
    /// Applies sorting and pagination to an already loaded listing.
    ///
    /// `sort_value` maps an item and a field name to the value to sort on, or
    /// `None` if the item has no such field.
    pub fn apply<T, F>(&self, mut items: Vec<T>, sort_value: F) -> Vec<T>
    where
        F: Fn(&T, &str) -> Option<String>,
    {
        if let Some(field) = self.sort.as_deref() {
            items.sort_by_cached_key(|item| sort_value(item, field).map(|v| v.to_lowercase()));
        }
        if self.desc {
            items.reverse();
        }

        let iter = items.into_iter().skip(self.offset);
        if self.size > 0 {
            iter.take(self.size).collect()
        } else {
            iter.collect()
        }
    }
}
