use super::*;

/// Tests that an unknown user has no session.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_user() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);

    assert!(repo.find_by_user_id(1).await.is_none());
}

/// Tests finding a previously inserted session.
///
/// Expected: Some with the stored fields
#[tokio::test]
async fn returns_inserted_session() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    let session = factory::create_online_session(7, factory::base_time());
    repo.insert(session.clone()).await;

    let found = repo.find_by_user_id(7).await;

    assert_eq!(found, Some(session));
}

/// Tests that repositories built from clones of a store share state.
///
/// Expected: Session inserted through one handle is visible through the other
#[tokio::test]
async fn cloned_store_shares_sessions() {
    let store = SessionStore::new();
    let other = store.clone();
    SessionRepository::new(&store)
        .insert(factory::create_offline_session(3))
        .await;

    let found = SessionRepository::new(&other).find_by_user_id(3).await;

    assert!(found.is_some());
}
