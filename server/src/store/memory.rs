use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{StoreResult, TodoItem, TodoStore};

#[derive(Debug)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: i64,
}

/// Process-lifetime store holding items in a `Vec`.
///
/// One lock guards both the items and the id counter, so every operation is
/// atomic with respect to the others.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<TodoItem>> {
        Ok(self.inner.read().await.items.clone())
    }

    async fn create(&self, title: &str) -> StoreResult<TodoItem> {
        let mut inner = self.inner.write().await;
        let todo = TodoItem {
            id: inner.next_id,
            title: title.to_string(),
            completed: false,
        };
        inner.next_id += 1;
        inner.items.push(todo.clone());
        debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    async fn toggle_completion(&self, id: i64) -> StoreResult<Option<TodoItem>> {
        let mut inner = self.inner.write().await;
        let Some(todo) = inner.items.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        todo.completed = !todo.completed;
        debug!(id, completed = todo.completed, "toggled todo");
        Ok(Some(todo.clone()))
    }

    async fn rename(&self, id: i64, title: &str) -> StoreResult<Option<TodoItem>> {
        let mut inner = self.inner.write().await;
        let Some(todo) = inner.items.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        todo.title = title.to_string();
        debug!(id, "renamed todo");
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.items.iter().position(|t| t.id == id) {
            Some(index) => {
                inner.items.remove(index);
                debug!(id, "deleted todo");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::conformance;

    #[tokio::test]
    async fn buy_milk_scenario() {
        conformance::buy_milk_scenario(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        conformance::ids_are_never_reused(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn unknown_ids_leave_store_unchanged() {
        conformance::unknown_ids_leave_store_unchanged(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn toggle_twice_restores_flag() {
        conformance::toggle_twice_restores_flag(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        conformance::delete_removes_exactly_one(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn create_keeps_empty_title() {
        conformance::create_keeps_empty_title(&MemoryStore::new()).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(&format!("task {i}")).await.unwrap().id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());

        let listed: Vec<i64> = store.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(listed.len(), 50);
    }
}
