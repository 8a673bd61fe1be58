use super::*;

/// Tests that a snapshot contains every stored session.
///
/// Expected: All sessions present regardless of status
#[tokio::test]
async fn contains_all_sessions() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    let start = factory::base_time();
    repo.insert(factory::create_offline_session(1)).await;
    repo.insert(factory::create_online_session(2, start)).await;
    repo.insert(factory::create_afk_session(3, start)).await;

    let mut ids: Vec<u64> = repo
        .snapshot()
        .await
        .sessions
        .iter()
        .map(|s| s.user_id)
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, vec![1, 2, 3]);
}

/// Tests that a snapshot is detached from later mutations.
///
/// Expected: Snapshot keeps the old value after the store changes
#[tokio::test]
async fn is_not_affected_by_later_updates() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    repo.insert(factory::create_offline_session(1)).await;

    let snapshot = repo.snapshot().await;
    repo.delete_all().await;

    assert_eq!(snapshot.sessions.len(), 1);
}
