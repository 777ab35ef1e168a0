//! Axum routes for the todo API.
//!
//! # Design
//! Handlers only parse input, call the injected `TodoStore` and map the
//! outcome to a response. Title presence is checked here because the store
//! accepts any title.
//!
//! Path ids are parsed leniently (leading digits win, `"12abc"` is 12) and
//! anything without digits is answered as "not found" rather than a 400.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, patch, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::ApiError,
    store::{MemoryStore, TodoItem, TodoStore},
};

pub const HEALTH_STATUS: &str = "Backend running ✅";

/// Shared handler state. Cloning only bumps the store's refcount.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh `MemoryStore`.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body accepted by create and rename.
#[derive(Debug, Default)]
pub struct TitlePayload {
    pub title: Option<String>,
}

impl TitlePayload {
    /// An empty body is treated like `{}`. Arrays carry no `title` key, and
    /// falsy titles (`null`, `false`, `0`) count as absent. Any other
    /// non-string title, or a bare scalar body, is malformed.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)?;
        let title = match value {
            Value::Object(mut fields) => fields.remove("title"),
            Value::Array(_) => None,
            _ => return Err(ApiError::MalformedBody),
        };
        match title {
            Some(Value::String(title)) => Ok(Self { title: Some(title) }),
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Self::default()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(Self::default()),
            Some(_) => Err(ApiError::MalformedBody),
        }
    }

    pub fn into_title(self) -> Result<String, ApiError> {
        match self.title {
            Some(title) if !title.is_empty() => Ok(title),
            _ => Err(ApiError::Validation("Title is required".to_string())),
        }
    }
}

/// Parse a path id the way a lenient integer parser would: optional
/// whitespace and sign, then the leading run of digits.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(rename_todo).delete(delete_todo))
        .route("/api/todos/{id}/toggle", patch(toggle_todo))
        .layer(cors(allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS.to_string(),
    })
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TodoItem>, ApiError> {
    let title = TitlePayload::from_body(&body)?.into_title()?;
    Ok(Json(state.store.create(&title).await?))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&raw_id).ok_or(ApiError::NotFound)?;
    state
        .store
        .toggle_completion(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn rename_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<TodoItem>, ApiError> {
    let title = TitlePayload::from_body(&body)?.into_title()?;
    let id = parse_id(&raw_id).ok_or(ApiError::NotFound)?;
    state
        .store
        .rename(id, &title)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id).ok_or(ApiError::NotFound)?;
    if state.store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
