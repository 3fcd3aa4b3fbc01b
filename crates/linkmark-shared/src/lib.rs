//! # linkmark-shared
//!
//! Types shared between the client state layer and the layers that consume
//! it: wire types for the bookmark API, notification types with their display
//! defaults, the standardized failure payload recorded in error buckets, and
//! URL normalization for user-entered addresses.

pub mod notify;
pub mod types;
pub mod url_format;

mod error;

pub use error::ApiFailure;
