//! Todo storage behind a single async interface.
//!
//! # Design
//! `TodoStore` is the only place todo state lives. Handlers receive it as an
//! `Arc<dyn TodoStore>` so the backend is picked once at startup
//! (`StoreKind`) and tests can build isolated stores.
//!
//! A missing id is an absent result (`None` / `false`), never an error.
//! `StoreError` is reserved for backend failures, which the in-memory store
//! cannot produce.
//!
//! Both backends list items in insertion order and never reuse an id after
//! it has been deleted.

mod memory;
mod sqlite;

#[cfg(test)]
mod conformance;

use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All items in insertion order.
    async fn list(&self) -> StoreResult<Vec<TodoItem>>;

    /// Append a new, not yet completed item. The title is stored as given.
    async fn create(&self, title: &str) -> StoreResult<TodoItem>;

    /// Flip `completed` on the item with `id`.
    async fn toggle_completion(&self, id: i64) -> StoreResult<Option<TodoItem>>;

    /// Replace the title of the item with `id`.
    async fn rename(&self, id: i64, title: &str) -> StoreResult<Option<TodoItem>>;

    /// Remove the item with `id`. Returns `false` when nothing matched.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}

/// Which backend `open` builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Memory,
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => Err(format!("unknown store backend '{other}' (expected 'memory' or 'sqlite')")),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Build the configured backend. `database_url` is only read for SQLite.
pub async fn open(kind: StoreKind, database_url: &str) -> StoreResult<Arc<dyn TodoStore>> {
    match kind {
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreKind::Sqlite => Ok(Arc::new(SqliteStore::connect(database_url).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_item_serializes_to_json() {
        let todo = TodoItem {
            id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Test", "completed": false}));
    }

    #[test]
    fn store_kind_parses_case_insensitively() {
        assert_eq!("memory".parse::<StoreKind>(), Ok(StoreKind::Memory));
        assert_eq!(" SQLite ".parse::<StoreKind>(), Ok(StoreKind::Sqlite));
        assert!("postgres".parse::<StoreKind>().is_err());
    }

    #[test]
    fn store_kind_display_roundtrips() {
        for kind in [StoreKind::Memory, StoreKind::Sqlite] {
            assert_eq!(kind.to_string().parse::<StoreKind>(), Ok(kind));
        }
    }

    #[tokio::test]
    async fn open_memory_starts_empty() {
        let store = open(StoreKind::Memory, "ignored").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn open_sqlite_in_memory() {
        let store = open(StoreKind::Sqlite, "sqlite::memory:").await.unwrap();
        let created = store.create("persisted").await.unwrap();
        assert_eq!(created.id, 1);
    }
}
