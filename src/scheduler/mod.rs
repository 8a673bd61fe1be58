//! Scheduled jobs.

pub mod leaderboard;
