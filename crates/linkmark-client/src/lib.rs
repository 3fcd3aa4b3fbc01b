//! # linkmark-client
//!
//! Client-side state layer for the linkmark bookmarking application. It
//! holds the authenticated session, the link collection, notifications and
//! the other UI transients, and mediates every read and write against the
//! remote bookmark API.
//!
//! The crate keeps a two-tier discipline: synchronous, I/O-free state
//! *transitions* on [`state::AppState`], invoked only by asynchronous
//! *intents* on [`Store`], each of which performs a single HTTP request.
//! The UI re-renders from the state after every intent; there is no retry,
//! no cancellation and no offline mode.

pub mod api;
pub mod intents;
pub mod progress;
pub mod state;

mod error;

pub use api::ApiClient;
pub use error::ClientError;
pub use intents::Store;
pub use progress::ProgressObserver;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging for host applications that carry no subscriber of
/// their own. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linkmark_client=debug,linkmark_store=info,warn"));

    fmt().with_env_filter(filter).with_target(true).init();
}
