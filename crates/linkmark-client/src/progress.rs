//! Progress reporting hook for the UI's loading bar.
//!
//! The UI registers an observer instead of polling the state; every
//! loading-progress transition fans out through it.

/// Receives every change to the shared loading-progress scalar (0-100).
///
/// All in-flight requests report through the same observer; the most recent
/// update wins, so the visible bar tracks whatever request patched the state
/// last rather than any particular logical operation.
pub trait ProgressObserver: Send + Sync {
    fn progress_changed(&self, percent: u8);
}
