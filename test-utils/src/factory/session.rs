//! Session factory for creating test presence sessions.
//!
//! The factory keeps the entity invariants intact: setting an online or AFK
//! start also sets the matching status and clears the other marker.

use chrono::{DateTime, Utc};
use entity::session::{Model, Status};

use crate::factory::helpers::next_id;

/// Factory for creating test sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::session::SessionFactory;
///
/// let session = SessionFactory::new()
///     .user_id(42)
///     .online_total(600)
///     .afk_since(start)
///     .build();
/// ```
pub struct SessionFactory {
    user_id: u64,
    status: Status,
    online_total: u64,
    afk_total: u64,
    online_start: Option<DateTime<Utc>>,
    afk_start: Option<DateTime<Utc>>,
}

impl SessionFactory {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - status: `Offline`
    /// - totals: `0`
    pub fn new() -> Self {
        Self {
            user_id: next_id(),
            status: Status::Offline,
            online_total: 0,
            afk_total: 0,
            online_start: None,
            afk_start: None,
        }
    }

    /// Sets the Discord user id for the session.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the accumulated online seconds.
    pub fn online_total(mut self, seconds: u64) -> Self {
        self.online_total = seconds;
        self
    }

    /// Sets the accumulated AFK seconds.
    pub fn afk_total(mut self, seconds: u64) -> Self {
        self.afk_total = seconds;
        self
    }

    /// Marks the session online with an interval opened at `start`.
    pub fn online_since(mut self, start: DateTime<Utc>) -> Self {
        self.status = Status::Online;
        self.online_start = Some(start);
        self.afk_start = None;
        self
    }

    /// Marks the session AFK with an interval opened at `start`.
    pub fn afk_since(mut self, start: DateTime<Utc>) -> Self {
        self.status = Status::Afk;
        self.afk_start = Some(start);
        self.online_start = None;
        self
    }

    /// Builds the session entity.
    pub fn build(self) -> Model {
        Model {
            user_id: self.user_id,
            status: self.status,
            online_total: self.online_total,
            afk_total: self.afk_total,
            online_start: self.online_start,
            afk_start: self.afk_start,
        }
    }
}

impl Default for SessionFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an offline session with zero totals.
pub fn create_offline_session(user_id: u64) -> Model {
    SessionFactory::new().user_id(user_id).build()
}

/// Creates a session that went online at `start`.
pub fn create_online_session(user_id: u64, start: DateTime<Utc>) -> Model {
    SessionFactory::new().user_id(user_id).online_since(start).build()
}

/// Creates a session that went AFK at `start`.
pub fn create_afk_session(user_id: u64, start: DateTime<Utc>) -> Model {
    SessionFactory::new().user_id(user_id).afk_since(start).build()
}
