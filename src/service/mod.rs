//! Service layer for presence tracking.
//!
//! Services sit between the Discord-facing bot layer and the session repository:
//!
//! - **Presence**: applies transitions and time adjustments to one session
//! - **Admin**: role-gated wrappers over the presence operations
//! - **Leaderboard**: renders live totals and publishes them to the output channel
//! - **Audit**: one-line audit trail to the log channel

pub mod admin;
pub mod audit;
pub mod leaderboard;
pub mod presence;
