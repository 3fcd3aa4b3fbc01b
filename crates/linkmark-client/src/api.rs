//! Typed HTTP client for the bookmark API.
//!
//! All endpoints live under `/api/` and authenticate with the session token
//! in an `Authorization: Token <token>` header. Failures of any kind
//! (transport errors and non-2xx responses alike) collapse into the
//! [`ApiFailure`] payload the state layer records in its error buckets.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use linkmark_shared::types::{Link, LinkId, UserProfile};
use linkmark_shared::ApiFailure;

/// Client for the bookmark REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct CreateLink<'a> {
    url: &'a str,
}

/// Partial update body for `PATCH /api/links/{id}/`.
///
/// Exactly one field is set per request; the serializer skips the rest.
#[derive(Debug, Default, Serialize)]
pub struct LinkPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
}

impl<'a> LinkPatch<'a> {
    pub fn archived(archived: bool) -> Self {
        Self {
            archived: Some(archived),
            ..Self::default()
        }
    }

    pub fn url(url: &'a str) -> Self {
        Self {
            url: Some(url),
            ..Self::default()
        }
    }
}

/// Error body shape the backend emits alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// Example: `ApiClient::new("https://marks.example.org")`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiFailure> {
        let req = self.request(Method::GET, "/api/users/me/", token);
        self.json(req).await
    }

    /// Fetch the full link collection.
    pub async fn list_links(&self, token: &str) -> Result<Vec<Link>, ApiFailure> {
        let req = self.request(Method::GET, "/api/links/", token);
        self.json(req).await
    }

    /// Create a new link. The URL must already be normalized.
    pub async fn create_link(&self, token: &str, url: &str) -> Result<Link, ApiFailure> {
        let req = self
            .request(Method::POST, "/api/links/", token)
            .json(&CreateLink { url });
        self.json(req).await
    }

    /// Apply a partial update to a link and return the updated record.
    pub async fn update_link(
        &self,
        token: &str,
        id: LinkId,
        patch: LinkPatch<'_>,
    ) -> Result<Link, ApiFailure> {
        let req = self
            .request(Method::PATCH, &format!("/api/links/{id}/"), token)
            .json(&patch);
        self.json(req).await
    }

    /// Delete a link.
    pub async fn delete_link(&self, token: &str, id: LinkId) -> Result<(), ApiFailure> {
        let req = self.request(Method::DELETE, &format!("/api/links/{id}/"), token);
        let response = req.send().await.map_err(transport_failure)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(parse_failure(response).await)
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Build a token-bearing request for a path under the base URL.
    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, format!("Token {token}"))
    }

    /// Send a request and decode the JSON body, folding every failure mode
    /// into an [`ApiFailure`].
    async fn json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiFailure> {
        let response = req.send().await.map_err(transport_failure)?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(transport_failure)
        } else {
            Err(parse_failure(response).await)
        }
    }
}

fn transport_failure(e: reqwest::Error) -> ApiFailure {
    ApiFailure {
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}

/// Extract the backend's `{"detail": ...}` message from an error response,
/// falling back to the bare status code.
async fn parse_failure(response: Response) -> ApiFailure {
    let status = response.status().as_u16();

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => ApiFailure::http(status, detail),
        _ => ApiFailure::http(status, format!("HTTP {status}")),
    }
}
