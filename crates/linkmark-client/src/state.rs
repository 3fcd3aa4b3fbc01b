//! Client state and its synchronous transitions.
//!
//! [`AppState`] is the single source of truth the UI renders from. It is
//! mutated only through the named transition methods below, which are
//! synchronous and free of I/O; network calls and preference persistence
//! live in the intent layer ([`crate::intents::Store`]).

use linkmark_shared::notify::Notification;
use linkmark_shared::types::{Link, LinkId};
use linkmark_shared::ApiFailure;

/// Background color applied before the user ever picks one.
pub const DEFAULT_BACKGROUND: &str = "white";

/// The authenticated user session, mirrored from the preferences store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub authenticated: bool,
    pub email: String,
    pub token: String,
}

/// Operation kinds that own an error bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddLink,
    RemoveLink,
    ArchiveLink,
    UnarchiveLink,
    UpdateLinkUrl,
    UpdateLinks,
    Logout,
}

/// Last failure per operation kind. Each bucket is overwritten, never
/// appended; only the add-link bucket has an explicit clear (the add form
/// resets it when reopened).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    pub add_link: Option<ApiFailure>,
    pub remove_link: Option<ApiFailure>,
    pub archive_link: Option<ApiFailure>,
    pub unarchive_link: Option<ApiFailure>,
    pub update_link_url: Option<ApiFailure>,
    pub update_links: Option<ApiFailure>,
    pub logout: Option<ApiFailure>,
}

impl ErrorLog {
    fn bucket_mut(&mut self, op: Operation) -> &mut Option<ApiFailure> {
        match op {
            Operation::AddLink => &mut self.add_link,
            Operation::RemoveLink => &mut self.remove_link,
            Operation::ArchiveLink => &mut self.archive_link,
            Operation::UnarchiveLink => &mut self.unarchive_link,
            Operation::UpdateLinkUrl => &mut self.update_link_url,
            Operation::UpdateLinks => &mut self.update_links,
            Operation::Logout => &mut self.logout,
        }
    }

    /// The most recent failure for an operation kind, if any.
    pub fn get(&self, op: Operation) -> Option<&ApiFailure> {
        match op {
            Operation::AddLink => self.add_link.as_ref(),
            Operation::RemoveLink => self.remove_link.as_ref(),
            Operation::ArchiveLink => self.archive_link.as_ref(),
            Operation::UnarchiveLink => self.unarchive_link.as_ref(),
            Operation::UpdateLinkUrl => self.update_link_url.as_ref(),
            Operation::UpdateLinks => self.update_links.as_ref(),
            Operation::Logout => self.logout.as_ref(),
        }
    }
}

/// The notification banner the UI should currently display (or hide).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    /// The most recent notification. A new one overwrites the previous;
    /// only one banner is ever visible.
    pub current: Option<Notification>,
    pub show: bool,
}

/// Central client state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub user: AuthSession,
    pub links: Vec<Link>,
    pub errors: ErrorLog,
    pub notification: NotificationState,

    /// Reference count of keybind suppressions (modal dialogs, overlays).
    /// Deliberately unclamped: an unpaired release shows up as a negative
    /// value instead of being masked.
    pub keybinds_suppressed: i32,
    /// Reference count of in-place edit sessions. Editing also locks
    /// keybinds, but keeps its own counter so the two concerns stay
    /// independently balanced.
    pub editing: i32,

    /// Loading progress in percent, shared by all in-flight requests; the
    /// most recent update wins.
    pub loading_progress: u8,
    pub query: String,
    pub background: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: AuthSession::default(),
            links: Vec::new(),
            errors: ErrorLog::default(),
            notification: NotificationState::default(),
            keybinds_suppressed: 0,
            editing: 0,
            loading_progress: 0,
            query: String::new(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Link collection
    // ------------------------------------------------------------------

    /// Mark the link with the given id as archived. No-op when absent.
    pub fn archive_link(&mut self, id: LinkId) {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == id) {
            link.archived = true;
        }
    }

    /// Clear the archived flag of the link with the given id. No-op when absent.
    pub fn unarchive_link(&mut self, id: LinkId) {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == id) {
            link.archived = false;
        }
    }

    /// Drop the link with the given id from the collection.
    pub fn remove_link(&mut self, id: LinkId) {
        self.links.retain(|l| l.id != id);
    }

    /// Replace the URL of the link with the given id. No-op when absent.
    pub fn update_link_url(&mut self, id: LinkId, url: &str) {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == id) {
            link.url = url.to_string();
        }
    }

    /// Append a newly created link.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Replace the whole collection with a fresh server response.
    pub fn update_links(&mut self, links: Vec<Link>) {
        self.links = links;
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn update_email(&mut self, email: &str) {
        self.user.email = email.to_string();
    }

    /// Mark the session authenticated with the given token.
    pub fn login_successful(&mut self, token: &str) {
        self.user.authenticated = true;
        self.user.token = token.to_string();
    }

    /// Reset the session: email, authenticated flag, token and the link
    /// collection. Persisted preferences are cleared by the caller.
    pub fn logout(&mut self) {
        self.user = AuthSession::default();
        self.links.clear();
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    /// Overwrite the error bucket for an operation kind.
    pub fn record_error(&mut self, op: Operation, failure: ApiFailure) {
        *self.errors.bucket_mut(op) = Some(failure);
    }

    /// Empty the error bucket for an operation kind.
    pub fn clear_error(&mut self, op: Operation) {
        *self.errors.bucket_mut(op) = None;
    }

    // ------------------------------------------------------------------
    // UI transients
    // ------------------------------------------------------------------

    /// Show a notification banner, replacing any previous one.
    pub fn notify(&mut self, notification: Notification) {
        self.notification.current = Some(notification);
        self.notification.show = true;
    }

    /// Hide the banner. The notification itself is kept so the UI can
    /// animate it out.
    pub fn notification_closed(&mut self) {
        self.notification.show = false;
    }

    /// Record the background color. Applying it to the page is the view
    /// layer's job.
    pub fn set_background(&mut self, color: &str) {
        self.background = color.to_string();
    }

    pub fn set_loading_progress(&mut self, percent: u8) {
        self.loading_progress = percent;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn suppress_keybinds(&mut self) {
        self.keybinds_suppressed += 1;
    }

    pub fn release_keybinds(&mut self) {
        self.keybinds_suppressed -= 1;
    }

    pub fn begin_editing(&mut self) {
        self.editing += 1;
    }

    pub fn end_editing(&mut self) {
        self.editing -= 1;
    }

    /// Whether keyboard shortcuts should currently be ignored: any open
    /// suppression or any active edit session locks them.
    pub fn keybinds_locked(&self) -> bool {
        self.keybinds_suppressed > 0 || self.editing > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
