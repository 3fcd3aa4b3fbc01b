//! Session intents: authentication check, login bookkeeping and logout.

use tracing::{info, warn};

use linkmark_shared::ApiFailure;

use crate::error::ClientError;
use crate::state::Operation;

use super::Store;

impl Store {
    /// Verify the current session token against `GET /api/users/me/`.
    ///
    /// On success the profile email is recorded, the session is marked
    /// authenticated and the token is re-persisted. On any failure the
    /// session is treated as dead and [`Store::logout`] runs; this is the
    /// one place where a failed request causes a wholesale reset instead of
    /// an error-bucket write.
    pub async fn is_authenticated(&self) -> Result<(), ClientError> {
        let token = self.token()?;

        match self.api().me(&token).await {
            Ok(profile) => {
                info!("user authenticated");

                let mut state = self.state()?;
                state.update_email(&profile.email);
                state.login_successful(&token);
                drop(state);

                if let Err(e) = self.prefs()?.set_token(&token) {
                    warn!(error = %e, "failed to persist session token");
                }
                Ok(())
            }
            Err(failure) => {
                warn!(error = %failure, "problem authenticating user");
                self.logout()
            }
        }
    }

    /// Record a token obtained by an external login flow and persist it.
    pub fn login_successful(&self, token: &str) -> Result<(), ClientError> {
        self.state()?.login_successful(token);
        if let Err(e) = self.prefs()?.set_token(token) {
            warn!(error = %e, "failed to persist session token");
        }
        Ok(())
    }

    /// Reset the session and clear the persisted preferences.
    ///
    /// The clear is scoped to linkmark's own keys; a failure to clear is
    /// recorded in the logout error bucket rather than propagated.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.state()?.logout();

        let result = self.prefs()?.clear();
        if let Err(e) = result {
            warn!(error = %e, "failed to clear persisted preferences");
            self.state()?
                .record_error(Operation::Logout, ApiFailure::transport(e.to_string()));
        }
        Ok(())
    }
}
