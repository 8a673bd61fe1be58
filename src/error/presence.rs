use entity::session::Status;
use thiserror::Error;

use crate::model::session::Transition;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PresenceError {
    /// The transition's precondition does not hold for the current status.
    ///
    /// The session is left exactly as it was.
    #[error("Cannot {} while {status}.", .transition.verb())]
    InvalidTransition {
        /// Requested transition
        transition: Transition,
        /// Status the session was in
        status: Status,
    },
}
