//! Domain models and parameter types.
//!
//! These types sit between the entity records and the Discord-facing bot layer:
//! transitions requested by members, live totals computed at a given instant
//! and the rendered leaderboard.

pub mod leaderboard;
pub mod session;
