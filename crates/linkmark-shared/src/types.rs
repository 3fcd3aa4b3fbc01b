use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a [`Link`].
///
/// Opaque to the client; the backend hands these out on creation and they
/// are only ever passed back verbatim in resource paths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LinkId(pub i64);

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single bookmarked link as returned by the API.
///
/// `title`, `description` and the date fields are optional on the wire;
/// older backends omit them entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl Link {
    /// Convenience constructor for a bare link record.
    pub fn new(id: LinkId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: String::new(),
            description: String::new(),
            archived: false,
            created: None,
            last_updated: None,
        }
    }
}

/// Response body of `GET /api/users/me/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_deserializes_without_optional_fields() {
        let link: Link =
            serde_json::from_str(r#"{"id": 7, "url": "http://example.com"}"#).unwrap();

        assert_eq!(link.id, LinkId(7));
        assert_eq!(link.url, "http://example.com");
        assert!(!link.archived);
        assert!(link.title.is_empty());
        assert!(link.created.is_none());
    }

    #[test]
    fn link_id_is_transparent_on_the_wire() {
        let json = serde_json::to_string(&LinkId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
