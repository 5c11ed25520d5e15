//! Library entities as stored by the datastore.

mod models;
mod query;

pub use models::*;
pub use query::QueryOptions;
