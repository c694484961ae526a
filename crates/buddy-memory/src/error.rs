use std::time::Duration;

/// Failure talking to the backing store.
///
/// A missing row is not an error: lookups return `Ok(None)` or an empty list.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Unavailable(format!("sqlite task failed: {err}"))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
