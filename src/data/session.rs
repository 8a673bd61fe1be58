//! Session repository over the shared in-memory store.
//!
//! This module provides the `SessionStore` handle and the `SessionRepository` for
//! reading and mutating presence sessions. All mutations run under a single write
//! guard, so a read-modify-write of one session can never interleave with another
//! handler or with the leaderboard renderer.

use std::collections::HashMap;
use std::sync::Arc;

use entity::session::Model;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    sessions: HashMap<u64, Model>,
    /// Last seen display name per user with a session.
    display_names: HashMap<u64, String>,
}

/// Shared handle to the session store.
///
/// Cloning is cheap and every clone refers to the same underlying map.
#[derive(Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<StoreState>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Consistent view of the store taken under one read guard.
#[derive(Clone, Debug, Default)]
pub struct SessionSnapshot {
    pub sessions: Vec<Model>,
    pub display_names: HashMap<u64, String>,
}

/// Repository providing operations on presence sessions.
pub struct SessionRepository<'a> {
    store: &'a SessionStore,
}

impl<'a> SessionRepository<'a> {
    /// Creates a new SessionRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the shared session store
    ///
    /// # Returns
    /// - `SessionRepository` - New repository instance
    pub fn new(store: &'a SessionStore) -> Self {
        Self { store }
    }

    /// Gets the session for a user, if one has been created.
    ///
    /// # Arguments
    /// - `user_id` - Discord user id
    ///
    /// # Returns
    /// - `Some(Model)` - Copy of the stored session
    /// - `None` - User has never had a successful event
    pub async fn find_by_user_id(&self, user_id: u64) -> Option<Model> {
        self.store.state.read().await.sessions.get(&user_id).cloned()
    }

    /// Applies `update` to a user's session under the write guard.
    ///
    /// Unknown users start from a fresh offline session. The result of `update`
    /// is stored only when it is `Ok`, so a rejected operation neither mutates an
    /// existing session nor creates a new one.
    ///
    /// # Arguments
    /// - `user_id` - Discord user id
    /// - `update` - Computes the new session from the current one
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored session after the update
    /// - `Err(E)` - Error from `update`; the store is unchanged
    pub async fn update<E>(
        &self,
        user_id: u64,
        update: impl FnOnce(&Model) -> Result<Model, E>,
    ) -> Result<Model, E> {
        let mut state = self.store.state.write().await;

        let updated = match state.sessions.get(&user_id) {
            Some(current) => update(current)?,
            None => update(&Model::new(user_id))?,
        };

        state.sessions.insert(user_id, updated.clone());

        Ok(updated)
    }

    /// Records the display name to render for a user.
    ///
    /// Names are only kept for users that have a session, so rejected events
    /// and lookups never grow the name map.
    ///
    /// # Returns
    /// - `true` - Name stored
    /// - `false` - User has no session, nothing stored
    pub async fn set_display_name(&self, user_id: u64, name: impl Into<String>) -> bool {
        let mut state = self.store.state.write().await;
        if !state.sessions.contains_key(&user_id) {
            return false;
        }

        state.display_names.insert(user_id, name.into());
        true
    }

    /// Takes a consistent copy of every session and known display name.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.store.state.read().await;

        SessionSnapshot {
            sessions: state.sessions.values().cloned().collect(),
            display_names: state.display_names.clone(),
        }
    }

    /// Removes every session along with the names recorded for them.
    ///
    /// # Returns
    /// - `usize` - Number of sessions that were removed
    pub async fn delete_all(&self) -> usize {
        let mut state = self.store.state.write().await;
        let removed = state.sessions.len();
        state.sessions.clear();
        state.display_names.clear();
        removed
    }

    /// Inserts or replaces a session as-is.
    #[cfg(test)]
    pub async fn insert(&self, session: Model) {
        self.store
            .state
            .write()
            .await
            .sessions
            .insert(session.user_id, session);
    }
}
