//! Error kinds surfaced by the browsing and playlist operations.

use thiserror::Error;

/// Errors returned to the API layer.
///
/// Datastore failures that do not mean "absent" travel as `anyhow::Error` and
/// end up in [`LibraryError::Internal`].
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("user {user} is not the owner of playlist {playlist_id}")]
    NotAuthorized { user: String, playlist_id: String },

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl LibraryError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        LibraryError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }

    pub fn is_not_authorized(&self) -> bool {
        matches!(self, LibraryError::NotAuthorized { .. })
    }
}

pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
