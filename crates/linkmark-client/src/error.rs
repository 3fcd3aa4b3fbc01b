use thiserror::Error;

use linkmark_store::StoreError;

/// Infrastructure errors raised by the store facade itself.
///
/// Failures of individual operations (HTTP errors) never surface here; they
/// are recorded in the per-operation buckets on
/// [`AppState`](crate::state::AppState).
#[derive(Error, Debug)]
pub enum ClientError {
    /// A panic elsewhere poisoned the state lock.
    #[error("State lock poisoned")]
    StatePoisoned,

    /// The preferences store failed.
    #[error("Preferences store error: {0}")]
    Store(#[from] StoreError),
}
