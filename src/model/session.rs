//! Presence transitions and live time accounting.

use chrono::{DateTime, Utc};
use entity::session::{Model, Status};

/// A presence change requested by a member or an administrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Offline or AFK to online.
    Online,
    /// Online to AFK.
    Afk,
    /// AFK to online.
    Back,
    /// Online or AFK to offline.
    Offline,
}

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::Online,
        Transition::Afk,
        Transition::Back,
        Transition::Offline,
    ];

    /// Custom id of the control panel button bound to this transition.
    pub fn custom_id(self) -> &'static str {
        match self {
            Transition::Online => "online",
            Transition::Afk => "afk",
            Transition::Back => "back_from_afk",
            Transition::Offline => "offline",
        }
    }

    /// Maps a button custom id back to its transition.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.custom_id() == custom_id)
    }

    /// Status the session ends up in after a successful transition.
    pub fn target(self) -> Status {
        match self {
            Transition::Online | Transition::Back => Status::Online,
            Transition::Afk => Status::Afk,
            Transition::Offline => Status::Offline,
        }
    }

    /// Short phrase used in rejection messages.
    pub fn verb(self) -> &'static str {
        match self {
            Transition::Online => "go online",
            Transition::Afk => "go AFK",
            Transition::Back => "come back from AFK",
            Transition::Offline => "go offline",
        }
    }
}

/// Accumulated totals including the currently open interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveTotals {
    pub online: u64,
    pub afk: u64,
}

impl LiveTotals {
    /// Computes live totals for `session` as of `now`.
    pub fn at(session: &Model, now: DateTime<Utc>) -> Self {
        let mut totals = Self {
            online: session.online_total,
            afk: session.afk_total,
        };

        match session.status {
            Status::Online => {
                if let Some(start) = session.online_start {
                    totals.online = totals.online.saturating_add(elapsed_seconds(start, now));
                }
            }
            Status::Afk => {
                if let Some(start) = session.afk_start {
                    totals.afk = totals.afk.saturating_add(elapsed_seconds(start, now));
                }
            }
            Status::Offline => {}
        }

        totals
    }
}

/// Whole seconds between `start` and `now`, clamped at zero.
///
/// A clock that steps backwards yields zero rather than shrinking a total.
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - start).num_seconds()).unwrap_or(0)
}
