//! Storage-specific error type for the in-memory store.

use worldstate_domain::error::WorldError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the world lock.
    #[error("world lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for StorageError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}

impl From<StorageError> for WorldError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
