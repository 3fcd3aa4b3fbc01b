//! Normalization of user-entered URLs.
//!
//! Applied before any URL leaves the client: the address bar habit of typing
//! `example.com` should still produce a fetchable bookmark.

/// Trim surrounding whitespace and default the scheme to `http://` when the
/// input carries none.
pub fn format_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
