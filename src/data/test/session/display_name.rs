use super::*;

/// Tests that the latest display name wins.
///
/// Expected: Second name replaces the first
#[tokio::test]
async fn overwrites_previous_name() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    repo.insert(factory::create_offline_session(5)).await;

    assert!(repo.set_display_name(5, "Old").await);
    assert!(repo.set_display_name(5, "New").await);

    let snapshot = repo.snapshot().await;
    assert_eq!(snapshot.display_names.get(&5).map(String::as_str), Some("New"));
}

/// Tests recording a name for a user without a session.
///
/// Expected: Name ignored and no session created
#[tokio::test]
async fn ignored_without_session() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);

    assert!(!repo.set_display_name(6, "Bob").await);

    let snapshot = repo.snapshot().await;
    assert!(snapshot.display_names.is_empty());
    assert!(repo.find_by_user_id(6).await.is_none());
}
