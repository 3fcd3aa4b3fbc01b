//! Common test utilities: an in-process mock of the bookmark API.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use linkmark_client::Store;
use linkmark_shared::types::{Link, LinkId};
use linkmark_store::PrefsStore;

/// The one token the mock API accepts.
pub const TOKEN: &str = "good-token";

pub const USER_EMAIL: &str = "user@example.com";

type ApiError = (StatusCode, Json<Value>);

#[derive(Clone)]
struct MockState {
    links: Arc<Mutex<Vec<Link>>>,
    next_id: Arc<Mutex<i64>>,
}

/// Serve the mock API on an ephemeral port, seeded with the given links.
/// Returns the base URL to point an `ApiClient` at.
pub async fn spawn_mock_api(seed: Vec<Link>) -> String {
    let state = MockState {
        links: Arc::new(Mutex::new(seed)),
        next_id: Arc::new(Mutex::new(100)),
    };

    let app = Router::new()
        .route("/api/users/me/", get(me))
        .route("/api/links/", get(list_links).post(create_link))
        .route("/api/links/{id}/", patch(update_link).delete(delete_link))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Build a store with an authenticated prefs file in a temp directory.
/// Returns the store and the prefs path so tests can reopen it.
pub fn test_store(base_url: &str) -> (Store, std::path::PathBuf) {
    test_store_with_token(base_url, TOKEN)
}

pub fn test_store_with_token(base_url: &str, token: &str) -> (Store, std::path::PathBuf) {
    // Leak the TempDir so it doesn't get cleaned up during the test.
    let tmp = Box::leak(Box::new(tempfile::tempdir().unwrap()));
    let path = tmp.path().join("prefs.json");

    let mut prefs = PrefsStore::open_at(&path).unwrap();
    prefs.set_token(token).unwrap();

    (Store::with_prefs(base_url, prefs), path)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Token {TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> ApiError {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Invalid token."})),
    )
}

fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."})))
}

async fn me(headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    Ok(Json(json!({"email": USER_EMAIL})))
}

async fn list_links(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Link>>, ApiError> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    Ok(Json(state.links.lock().unwrap().clone()))
}

#[derive(Deserialize)]
struct CreateBody {
    url: String,
}

async fn create_link(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<CreateBody>,
) -> Result<(StatusCode, Json<Link>), ApiError> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    if body.url.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Enter a valid URL."})),
        ));
    }

    let mut next_id = state.next_id.lock().unwrap();
    let link = Link::new(LinkId(*next_id), body.url);
    *next_id += 1;

    state.links.lock().unwrap().push(link.clone());
    Ok((StatusCode::CREATED, Json(link)))
}

#[derive(Deserialize)]
struct PatchBody {
    archived: Option<bool>,
    url: Option<String>,
}

async fn update_link(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<PatchBody>,
) -> Result<Json<Link>, ApiError> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }

    let mut links = state.links.lock().unwrap();
    let link = links
        .iter_mut()
        .find(|l| l.id == LinkId(id))
        .ok_or_else(not_found)?;

    if let Some(archived) = body.archived {
        link.archived = archived;
    }
    if let Some(url) = body.url {
        link.url = url;
    }
    Ok(Json(link.clone()))
}

async fn delete_link(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }

    let mut links = state.links.lock().unwrap();
    let before = links.len();
    links.retain(|l| l.id != LinkId(id));

    if links.len() == before {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}
