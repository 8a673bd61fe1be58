use super::*;

/// Tests that updating an unknown user starts from a fresh offline session.
///
/// Expected: Ok with the update applied to a zeroed session and stored
#[tokio::test]
async fn creates_session_lazily_on_success() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);

    let result = repo
        .update(11, |current| {
            assert_eq!(current.status, Status::Offline);
            assert_eq!(current.online_total, 0);
            let mut next = current.clone();
            next.online_total = 60;
            Ok::<_, ()>(next)
        })
        .await;

    assert_eq!(result.map(|s| s.online_total), Ok(60));
    assert_eq!(repo.find_by_user_id(11).await.map(|s| s.online_total), Some(60));
}

/// Tests that a rejected update does not create a session.
///
/// Expected: Err and no session stored for the user
#[tokio::test]
async fn rejected_update_does_not_create_session() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);

    let result = repo.update(12, |_| Err::<entity::session::Model, _>("nope")).await;

    assert_eq!(result, Err("nope"));
    assert!(repo.find_by_user_id(12).await.is_none());
}

/// Tests that a rejected update leaves an existing session untouched.
///
/// Expected: Err and the stored session unchanged
#[tokio::test]
async fn rejected_update_keeps_existing_session() {
    let store = SessionStore::new();
    let repo = SessionRepository::new(&store);
    let session = test_utils::factory::session::SessionFactory::new()
        .user_id(13)
        .online_total(500)
        .build();
    repo.insert(session.clone()).await;

    let result = repo
        .update(13, |_| Err::<entity::session::Model, ()>(()))
        .await;

    assert!(result.is_err());
    assert_eq!(repo.find_by_user_id(13).await, Some(session));
}
