//! Todo list service: an in-memory or SQLite-backed store behind a small
//! JSON HTTP API.
//!
//! # Overview
//! - `store` owns the todo items and id assignment (`TodoStore`).
//! - `api` maps HTTP requests onto store operations.
//! - `config` reads the listening address, CORS origin and backend choice
//!   from the environment.
//!
//! The store is injected into the router through `AppState`, so tests can
//! build as many isolated apps as they like.

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use api::{app, AppState};
pub use config::{Config, ConfigError};
pub use error::{ApiError, ErrorResponse};
pub use store::{MemoryStore, SqliteStore, StoreError, StoreKind, TodoItem, TodoStore};

use axum::Router;
use tokio::net::TcpListener;

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}
