//! Link collection intents.
//!
//! Every mutating intent follows the same shape: progress to 30, one HTTP
//! request, then either the success transitions with an info notification
//! and progress 100, or an error-bucket write with a warning notification
//! and progress 0. No retries; a failed operation is re-invoked by the UI.

use tracing::{info, warn};

use linkmark_shared::notify::Notification;
use linkmark_shared::types::LinkId;
use linkmark_shared::url_format::format_url;

use crate::api::LinkPatch;
use crate::error::ClientError;
use crate::state::Operation;

use super::Store;

impl Store {
    /// Normalize the URL and create the bookmark via `POST /api/links/`.
    pub async fn add_link(&self, url: &str) -> Result<(), ClientError> {
        let url = format_url(url);

        self.set_progress(30)?;
        let token = self.token()?;

        match self.api().create_link(&token, &url).await {
            Ok(link) => {
                info!(url = %url, "added link");
                let mut state = self.state()?;
                state.notify(Notification::info("Added New Link"));
                state.add_link(link);
                drop(state);
                self.set_progress(100)
            }
            Err(failure) => {
                warn!(url = %url, error = %failure, "problem adding link");
                let mut state = self.state()?;
                state.notify(Notification::warning("Problem Adding New Link"));
                state.record_error(Operation::AddLink, failure);
                drop(state);
                self.set_progress(0)
            }
        }
    }

    /// Re-fetch the whole collection via `GET /api/links/`.
    ///
    /// A read, not a mutation: it neither notifies nor touches the progress
    /// bar, and a failure only lands in the update-links bucket.
    pub async fn refresh_links(&self) -> Result<(), ClientError> {
        let token = self.token()?;

        match self.api().list_links(&token).await {
            Ok(links) => {
                info!(count = links.len(), "refreshed links");
                self.state()?.update_links(links);
            }
            Err(failure) => {
                warn!(error = %failure, "problem getting links");
                self.state()?.record_error(Operation::UpdateLinks, failure);
            }
        }
        Ok(())
    }

    /// Mark a link archived via `PATCH /api/links/{id}/`.
    pub async fn archive_link(&self, id: LinkId) -> Result<(), ClientError> {
        self.set_archived(id, true).await
    }

    /// Clear a link's archived flag via `PATCH /api/links/{id}/`.
    pub async fn unarchive_link(&self, id: LinkId) -> Result<(), ClientError> {
        self.set_archived(id, false).await
    }

    async fn set_archived(&self, id: LinkId, archived: bool) -> Result<(), ClientError> {
        let (op, success_msg, failure_msg) = if archived {
            (Operation::ArchiveLink, "Archived Link", "Problem archiving link")
        } else {
            (
                Operation::UnarchiveLink,
                "Unarchived Link",
                "Problem Unarchiving Link",
            )
        };

        self.set_progress(30)?;
        let token = self.token()?;

        match self
            .api()
            .update_link(&token, id, LinkPatch::archived(archived))
            .await
        {
            Ok(_) => {
                info!(%id, archived, "updated link archive flag");
                let mut state = self.state()?;
                state.notify(Notification::info(success_msg));
                if archived {
                    state.archive_link(id);
                } else {
                    state.unarchive_link(id);
                }
                drop(state);
                self.set_progress(100)
            }
            Err(failure) => {
                warn!(%id, archived, error = %failure, "problem updating link archive flag");
                let mut state = self.state()?;
                state.notify(Notification::warning(failure_msg));
                state.record_error(op, failure);
                drop(state);
                self.set_progress(0)
            }
        }
    }

    /// Delete a bookmark via `DELETE /api/links/{id}/`.
    pub async fn remove_link(&self, id: LinkId) -> Result<(), ClientError> {
        self.set_progress(30)?;
        let token = self.token()?;

        match self.api().delete_link(&token, id).await {
            Ok(()) => {
                info!(%id, "deleted link");
                let mut state = self.state()?;
                state.notify(Notification::info("Deleted Link"));
                state.remove_link(id);
                drop(state);
                self.set_progress(100)
            }
            Err(failure) => {
                warn!(%id, error = %failure, "couldn't remove link");
                let mut state = self.state()?;
                state.notify(Notification::warning("Problem Deleting Link"));
                state.record_error(Operation::RemoveLink, failure);
                drop(state);
                self.set_progress(0)
            }
        }
    }

    /// Change a bookmark's URL via `PATCH /api/links/{id}/`.
    ///
    /// The locally-applied URL is taken from the server response rather
    /// than the argument, so the collection always reflects what the
    /// backend actually stored.
    pub async fn change_link_url(&self, id: LinkId, url: &str) -> Result<(), ClientError> {
        self.set_progress(30)?;
        let token = self.token()?;

        match self.api().update_link(&token, id, LinkPatch::url(url)).await {
            Ok(updated) => {
                info!(%id, "updated link");
                let mut state = self.state()?;
                state.notify(Notification::info("Updated Link"));
                state.update_link_url(updated.id, &updated.url);
                drop(state);
                self.set_progress(100)
            }
            Err(failure) => {
                warn!(%id, error = %failure, "problem updating link");
                let mut state = self.state()?;
                state.notify(Notification::warning("Problem updating Link"));
                state.record_error(Operation::UpdateLinkUrl, failure);
                drop(state);
                self.set_progress(0)
            }
        }
    }
}
