//! Leaderboard rendering and publishing.
//!
//! `LeaderboardService` turns a snapshot of the session store into ranked
//! entries and the two text blocks shown in the leaderboard channel. Rendering
//! only reads the store. Getting the text into Discord is the job of
//! `publish::LeaderboardPublisher`.

pub mod publish;
pub mod render;

use crate::{
    data::session::{SessionRepository, SessionStore},
    model::{
        leaderboard::{LeaderboardEntry, LeaderboardReport, StatusLayout},
        session::LiveTotals,
    },
    util::clock::Clock,
};

pub struct LeaderboardService<'a> {
    store: &'a SessionStore,
    clock: &'a dyn Clock,
    layout: StatusLayout,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(store: &'a SessionStore, clock: &'a dyn Clock, layout: StatusLayout) -> Self {
        Self {
            store,
            clock,
            layout,
        }
    }

    /// Builds ranked entries with live totals as of a single clock reading.
    ///
    /// Entries are ordered by live online time, highest first, with ties broken
    /// by ascending user id. Members without a known display name are shown as a
    /// mention.
    pub async fn entries(&self) -> Vec<LeaderboardEntry> {
        let snapshot = SessionRepository::new(self.store).snapshot().await;
        let now = self.clock.now();

        let mut entries: Vec<LeaderboardEntry> = snapshot
            .sessions
            .iter()
            .map(|session| LeaderboardEntry {
                user_id: session.user_id,
                name: snapshot
                    .display_names
                    .get(&session.user_id)
                    .cloned()
                    .unwrap_or_else(|| format!("<@{}>", session.user_id)),
                status: session.status,
                totals: LiveTotals::at(session, now),
            })
            .collect();

        render::rank(&mut entries);

        entries
    }

    /// Renders the leaderboard and live status blocks.
    pub async fn render(&self) -> LeaderboardReport {
        let entries = self.entries().await;

        LeaderboardReport {
            leaderboard: render::render_leaderboard(&entries),
            status: render::render_status(&entries, self.layout),
        }
    }
}
