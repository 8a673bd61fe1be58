//! Presence session entity.
//!
//! One `Model` exists per tracked user. Totals are whole seconds and exclude
//! the currently open interval, whose start is recorded in `online_start` or
//! `afk_start` depending on `status`.

use std::fmt;

use chrono::{DateTime, Utc};

/// Presence state of a tracked user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Offline,
    Online,
    Afk,
}

impl Status {
    /// Upper-case label shown in the live status view.
    pub fn label(self) -> &'static str {
        match self {
            Status::Offline => "OFFLINE",
            Status::Online => "ONLINE",
            Status::Afk => "AFK",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Offline => "offline",
            Status::Online => "online",
            Status::Afk => "afk",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// Discord user id (snowflake).
    pub user_id: u64,
    pub status: Status,
    /// Seconds spent online, excluding the open interval.
    pub online_total: u64,
    /// Seconds spent AFK, excluding the open interval.
    pub afk_total: u64,
    /// Start of the open online interval. Set iff `status` is `Online`.
    pub online_start: Option<DateTime<Utc>>,
    /// Start of the open AFK interval. Set iff `status` is `Afk`.
    pub afk_start: Option<DateTime<Utc>>,
}

impl Model {
    /// Creates an offline session with zero totals.
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            status: Status::Offline,
            online_total: 0,
            afk_total: 0,
            online_start: None,
            afk_start: None,
        }
    }

    /// Returns true when the interval markers agree with `status`.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            Status::Offline => self.online_start.is_none() && self.afk_start.is_none(),
            Status::Online => self.online_start.is_some() && self.afk_start.is_none(),
            Status::Afk => self.afk_start.is_some() && self.online_start.is_none(),
        }
    }
}
