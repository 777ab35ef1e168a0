//! SQLite-backed `TodoStore`.
//!
//! The `todo` table uses `AUTOINCREMENT`, so ids of deleted rows are never
//! issued again. Every mutation is a single statement with `RETURNING`,
//! which keeps lookup and change atomic without an explicit transaction.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Row, SqlitePool,
};
use tracing::debug;

use super::{StoreResult, TodoItem, TodoStore};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and apply migrations.
    ///
    /// The pool holds a single long-lived connection: SQLite serialises
    /// writers anyway, and a `sqlite::memory:` database only exists for as
    /// long as its connection does.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        debug!(url, "opened sqlite pool");
        Self::from_pool(pool).await
    }

    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect("sqlite::memory:").await
    }

    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }
}

fn todo_from_row(row: &SqliteRow) -> Result<TodoItem, sqlx::Error> {
    Ok(TodoItem {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        completed: row.try_get("completed")?,
    })
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<TodoItem>> {
        let rows = sqlx::query("SELECT id, title, completed FROM todo ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        let todos = rows.iter().map(todo_from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    async fn create(&self, title: &str) -> StoreResult<TodoItem> {
        let row = sqlx::query("INSERT INTO todo (title) VALUES (?) RETURNING id, title, completed")
            .bind(title)
            .fetch_one(&self.pool)
            .await?;
        let todo = todo_from_row(&row)?;
        debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    async fn toggle_completion(&self, id: i64) -> StoreResult<Option<TodoItem>> {
        let row = sqlx::query(
            "UPDATE todo SET completed = NOT completed WHERE id = ? RETURNING id, title, completed",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        let todo = row.as_ref().map(todo_from_row).transpose()?;
        if let Some(todo) = &todo {
            debug!(id, completed = todo.completed, "toggled todo");
        }
        Ok(todo)
    }

    async fn rename(&self, id: i64, title: &str) -> StoreResult<Option<TodoItem>> {
        let row = sqlx::query("UPDATE todo SET title = ? WHERE id = ? RETURNING id, title, completed")
            .bind(title)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let todo = row.as_ref().map(todo_from_row).transpose()?;
        if todo.is_some() {
            debug!(id, "renamed todo");
        }
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(id, "deleted todo");
        }
        Ok(deleted)
    }
}
