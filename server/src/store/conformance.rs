//! Behavioural checks every `TodoStore` backend must pass.
//!
//! Each check expects a freshly opened, empty store.

use super::TodoStore;

pub async fn buy_milk_scenario(store: &dyn TodoStore) {
    let created = store.create("Buy milk").await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);

    let toggled = store.toggle_completion(1).await.unwrap().unwrap();
    assert!(toggled.completed);

    let renamed = store.rename(1, "Buy oat milk").await.unwrap().unwrap();
    assert_eq!(renamed.title, "Buy oat milk");
    assert!(renamed.completed, "rename must not touch completion");

    assert!(store.delete(1).await.unwrap());
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.toggle_completion(1).await.unwrap().is_none());
}

pub async fn ids_are_never_reused(store: &dyn TodoStore) {
    let first = store.create("a").await.unwrap();
    let second = store.create("b").await.unwrap();
    assert!(store.delete(second.id).await.unwrap());
    assert!(store.delete(first.id).await.unwrap());

    let third = store.create("c").await.unwrap();
    let fourth = store.create("d").await.unwrap();
    assert!(third.id > second.id);
    assert!(fourth.id > third.id);

    let listed = store.list().await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![third.id, fourth.id], "insertion order");
}

pub async fn unknown_ids_leave_store_unchanged(store: &dyn TodoStore) {
    store.create("keep me").await.unwrap();
    let before = store.list().await.unwrap();

    for id in [0, 2, -1, i64::MAX] {
        assert!(store.toggle_completion(id).await.unwrap().is_none());
        assert!(store.rename(id, "nope").await.unwrap().is_none());
        assert!(!store.delete(id).await.unwrap());
    }

    assert_eq!(store.list().await.unwrap(), before);
}

pub async fn toggle_twice_restores_flag(store: &dyn TodoStore) {
    let todo = store.create("flip").await.unwrap();
    let once = store.toggle_completion(todo.id).await.unwrap().unwrap();
    let twice = store.toggle_completion(todo.id).await.unwrap().unwrap();
    assert_ne!(once.completed, todo.completed);
    assert_eq!(twice, todo);
}

pub async fn delete_removes_exactly_one(store: &dyn TodoStore) {
    for title in ["one", "two", "three"] {
        store.create(title).await.unwrap();
    }
    assert!(store.delete(2).await.unwrap());

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|t| t.id != 2));
    assert!(!store.delete(2).await.unwrap());
    assert_eq!(store.list().await.unwrap().len(), 2);
}

pub async fn create_keeps_empty_title(store: &dyn TodoStore) {
    let todo = store.create("").await.unwrap();
    assert_eq!(todo.title, "");
    assert_eq!(store.list().await.unwrap(), vec![todo]);
}
