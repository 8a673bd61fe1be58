use super::*;

/// Tests clearing the store.
///
/// Expected: Every session removed and the removed count returned
#[tokio::test]
async fn removes_every_session() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    repo.insert(factory::create_offline_session(1)).await;
    repo.insert(factory::create_online_session(2, factory::base_time()))
        .await;

    let removed = repo.delete_all().await;

    assert_eq!(removed, 2);
    assert!(repo.snapshot().await.sessions.is_empty());
}

/// Tests that clearing also forgets display names.
///
/// Expected: No names remain once the sessions are gone
#[tokio::test]
async fn clears_display_names() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    repo.insert(factory::create_offline_session(1)).await;
    repo.set_display_name(1, "Alice").await;

    repo.delete_all().await;

    let snapshot = repo.snapshot().await;
    assert!(snapshot.sessions.is_empty());
    assert!(snapshot.display_names.is_empty());
}

/// Tests clearing an empty store.
///
/// Expected: Zero removed
#[tokio::test]
async fn empty_store_removes_nothing() {
    let store = SessionStore::new();

    assert_eq!(SessionRepository::new(&store).delete_all().await, 0);
}
