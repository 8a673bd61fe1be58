//! Leaderboard rows and rendered output.

use std::str::FromStr;

use entity::session::Status;

use crate::model::session::LiveTotals;

/// How the live status message lays out members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusLayout {
    /// One line per member with their status label.
    #[default]
    Flat,
    /// Members bucketed under Online, AFK and Offline headings.
    Grouped,
}

impl FromStr for StatusLayout {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "grouped" => Ok(Self::Grouped),
            _ => Err(()),
        }
    }
}

/// One member's row at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    /// Display name, or a mention when the name is unknown.
    pub name: String,
    pub status: Status,
    pub totals: LiveTotals,
}

/// The two text blocks published to the leaderboard channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardReport {
    pub leaderboard: String,
    pub status: String,
}
