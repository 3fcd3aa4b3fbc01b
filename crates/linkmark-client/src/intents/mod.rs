//! Asynchronous intents and the [`Store`] facade that carries them.
//!
//! An intent performs exactly one HTTP request and applies the resulting
//! state transitions; it never mutates state directly and the state lock is
//! never held across an await. Sub-modules group the intents by domain, the
//! way the UI invokes them.

mod auth;
mod links;
mod ui;

use std::sync::{Arc, Mutex, MutexGuard};

use linkmark_store::PrefsStore;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::progress::ProgressObserver;
use crate::state::AppState;

/// Facade over the client state, constructed once at application start and
/// cloned into whatever contexts the UI needs it in.
///
/// Holds the state behind a mutex, the API client, the preferences store and
/// an optional progress observer. All async methods take `&self`; several
/// intents may be in flight at once and the last response to resolve wins.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<AppState>>,
    prefs: Arc<Mutex<PrefsStore>>,
    api: ApiClient,
    progress: Option<Arc<dyn ProgressObserver>>,
}

impl Store {
    /// Build a store backed by the default preferences location.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::with_prefs(base_url, PrefsStore::new()?))
    }

    /// Build a store on top of an explicit preferences store.
    ///
    /// Useful for tests and for embedding inside custom directory layouts.
    /// The persisted token and background color are mirrored into the
    /// initial state.
    pub fn with_prefs(base_url: &str, prefs: PrefsStore) -> Self {
        let mut state = AppState::new();
        if let Some(token) = prefs.token() {
            state.user.token = token.to_string();
        }
        if let Some(background) = prefs.background() {
            state.background = background.to_string();
        }

        Self {
            state: Arc::new(Mutex::new(state)),
            prefs: Arc::new(Mutex::new(prefs)),
            api: ApiClient::new(base_url),
            progress: None,
        }
    }

    /// Register the observer the UI's progress bar listens on.
    pub fn set_progress_observer(&mut self, observer: Arc<dyn ProgressObserver>) {
        self.progress = Some(observer);
    }

    /// Lock the state for reading or for applying transitions.
    ///
    /// The guard must never live across an await point.
    pub fn state(&self) -> Result<MutexGuard<'_, AppState>, ClientError> {
        self.state.lock().map_err(|_| ClientError::StatePoisoned)
    }

    pub(crate) fn prefs(&self) -> Result<MutexGuard<'_, PrefsStore>, ClientError> {
        self.prefs.lock().map_err(|_| ClientError::StatePoisoned)
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Snapshot of the in-memory session token.
    pub(crate) fn token(&self) -> Result<String, ClientError> {
        Ok(self.state()?.user.token.clone())
    }

    /// Apply a loading-progress transition and fan it out to the observer.
    pub(crate) fn set_progress(&self, percent: u8) -> Result<(), ClientError> {
        self.state()?.set_loading_progress(percent);
        if let Some(observer) = &self.progress {
            observer.progress_changed(percent);
        }
        Ok(())
    }
}
