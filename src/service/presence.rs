//! Presence service applying transitions to stored sessions.
//!
//! Wraps the pure state machine in `transition` with the session repository and
//! the injected clock. Every operation reads the clock once and performs its
//! read-modify-write under a single store guard.

pub mod transition;

use entity::session::{Model, Status};

use crate::{
    data::session::{SessionRepository, SessionStore},
    error::AppError,
    model::session::{LiveTotals, Transition},
    util::clock::Clock,
};

pub struct PresenceService<'a> {
    store: &'a SessionStore,
    clock: &'a dyn Clock,
}

impl<'a> PresenceService<'a> {
    pub fn new(store: &'a SessionStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Applies a presence transition to a user's session.
    ///
    /// # Arguments
    /// - `user_id` - Discord user id of the session owner
    /// - `transition` - Requested transition
    ///
    /// # Returns
    /// - `Ok(Model)` - Session after the transition
    /// - `Err(AppError::PresenceErr)` - Precondition not met, nothing changed
    pub async fn transition(&self, user_id: u64, transition: Transition) -> Result<Model, AppError> {
        let now = self.clock.now();

        let session = SessionRepository::new(self.store)
            .update(user_id, |current| transition::apply(current, transition, now))
            .await?;

        tracing::debug!(
            "User {} applied {:?}, now {} (online {}s, afk {}s)",
            user_id,
            transition,
            session.status,
            session.online_total,
            session.afk_total
        );

        Ok(session)
    }

    /// Adds seconds to a user's accumulated online time.
    pub async fn add_time(&self, user_id: u64, seconds: u64) -> Result<Model, AppError> {
        let session = SessionRepository::new(self.store)
            .update(user_id, |current| {
                Ok::<_, AppError>(transition::add_online_time(current, seconds))
            })
            .await?;

        Ok(session)
    }

    /// Removes seconds from a user's accumulated online time, stopping at zero.
    pub async fn remove_time(&self, user_id: u64, seconds: u64) -> Result<Model, AppError> {
        let session = SessionRepository::new(self.store)
            .update(user_id, |current| {
                Ok::<_, AppError>(transition::remove_online_time(current, seconds))
            })
            .await?;

        Ok(session)
    }

    /// Clears every session.
    ///
    /// # Returns
    /// - `usize` - Number of sessions removed
    pub async fn reset_all(&self) -> usize {
        SessionRepository::new(self.store).delete_all().await
    }

    /// Current status and live totals for a user.
    ///
    /// Unknown users report as offline with zero totals; no session is created.
    pub async fn live_totals(&self, user_id: u64) -> (Status, LiveTotals) {
        match SessionRepository::new(self.store).find_by_user_id(user_id).await {
            Some(session) => (session.status, LiveTotals::at(&session, self.clock.now())),
            None => (Status::Offline, LiveTotals::default()),
        }
    }

    /// Records the name the leaderboard shows for a user.
    ///
    /// Users without a session are skipped, so call this after a successful
    /// transition or adjustment.
    pub async fn remember_name(&self, user_id: u64, name: &str) {
        SessionRepository::new(self.store)
            .set_display_name(user_id, name)
            .await;
    }
}
