//! # linkmark-store
//!
//! Durable client preferences for the linkmark application: the session
//! token and the background color, kept in a small JSON file in the
//! platform-appropriate data directory.
//!
//! Clearing the session only ever touches this file, so no unrelated
//! application data can be lost on logout.

pub mod prefs;

mod error;

pub use error::StoreError;
pub use prefs::PrefsStore;
