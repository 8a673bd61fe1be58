//! In-memory entities for the playtime tracker.
//!
//! Entities are plain data records. They carry no behaviour beyond small
//! accessors; state transitions live in the bot's service layer.

pub mod prelude;
pub mod session;
