//! Synchronous UI intents: notifications, search, background preference and
//! keybind/editing guards. These apply a single transition each; only the
//! background preference also writes through to the preferences store.

use tracing::warn;

use linkmark_shared::notify::Notification;

use crate::error::ClientError;
use crate::state::Operation;

use super::Store;

impl Store {
    /// Show a notification banner.
    pub fn notify(&self, notification: Notification) -> Result<(), ClientError> {
        self.state()?.notify(notification);
        Ok(())
    }

    /// Hide the current notification banner.
    pub fn notification_closed(&self) -> Result<(), ClientError> {
        self.state()?.notification_closed();
        Ok(())
    }

    /// Update the search query.
    pub fn set_query(&self, query: &str) -> Result<(), ClientError> {
        self.state()?.set_query(query);
        Ok(())
    }

    /// Record and persist the background color. Applying the matching page
    /// class is left to the view layer.
    pub fn set_background(&self, color: &str) -> Result<(), ClientError> {
        self.state()?.set_background(color);
        if let Err(e) = self.prefs()?.set_background(color) {
            warn!(color, error = %e, "failed to persist background color");
        }
        Ok(())
    }

    /// Reset the add-link error bucket (the add form clears stale errors
    /// when it reopens).
    pub fn clear_add_link_errors(&self) -> Result<(), ClientError> {
        self.state()?.clear_error(Operation::AddLink);
        Ok(())
    }

    /// Suppress keyboard shortcuts. Must be paired with exactly one
    /// [`Store::release_keybinds`].
    pub fn suppress_keybinds(&self) -> Result<(), ClientError> {
        self.state()?.suppress_keybinds();
        Ok(())
    }

    pub fn release_keybinds(&self) -> Result<(), ClientError> {
        self.state()?.release_keybinds();
        Ok(())
    }

    /// Enter an in-place edit session; shortcuts stay locked until the
    /// matching [`Store::end_editing`].
    pub fn begin_editing(&self) -> Result<(), ClientError> {
        self.state()?.begin_editing();
        Ok(())
    }

    pub fn end_editing(&self) -> Result<(), ClientError> {
        self.state()?.end_editing();
        Ok(())
    }
}
