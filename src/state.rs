//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds every shared resource
//! the bot needs. The state is built once during startup, handed to the event
//! handler and the scheduler, and cloned cheaply wherever it is needed.
//!
//! The state includes:
//! - The session store, the bot's only runtime data
//! - The time source used for every elapsed-time calculation
//! - The leaderboard publisher and its message references
//! - The audit log sink
//! - The loaded configuration

use std::sync::Arc;

use crate::{
    config::Config,
    data::session::SessionStore,
    service::{
        admin::AdminService,
        audit::AuditLog,
        leaderboard::{publish::LeaderboardPublisher, LeaderboardService},
        presence::PresenceService,
    },
    util::clock::Clock,
};

#[derive(Clone)]
pub struct AppState {
    /// Presence sessions keyed by Discord user id.
    pub store: SessionStore,

    /// Time source for transitions and live totals.
    pub clock: Arc<dyn Clock>,

    /// Publishes rendered leaderboards to the leaderboard channel.
    pub publisher: LeaderboardPublisher,

    /// Audit trail for presence changes and admin actions.
    pub audit: AuditLog,

    /// Loaded environment configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the application state from the loaded configuration.
    ///
    /// # Arguments
    /// - `config` - Loaded environment configuration
    /// - `clock` - Time source for all session accounting
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: SessionStore::new(),
            clock,
            publisher: LeaderboardPublisher::new(config.leaderboard_channel_id),
            audit: AuditLog::new(config.log_channel_id),
            config: Arc::new(config),
        }
    }

    pub fn presence(&self) -> PresenceService<'_> {
        PresenceService::new(&self.store, self.clock.as_ref())
    }

    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(self.presence(), self.config.admin_role_id)
    }

    pub fn leaderboard(&self) -> LeaderboardService<'_> {
        LeaderboardService::new(&self.store, self.clock.as_ref(), self.config.status_layout)
    }
}
