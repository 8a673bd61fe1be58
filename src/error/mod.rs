//! Error types and interaction reply handling.
//!
//! This module provides the application's error hierarchy. `AppError` is the
//! top-level type that wraps the domain-specific errors and knows how to turn
//! itself into the ephemeral reply shown to the member who triggered it, the
//! bot's counterpart to an HTTP error response.

pub mod auth;
pub mod config;
pub mod input;
pub mod presence;

use thiserror::Error;

use crate::error::{
    auth::AuthError, config::ConfigError, input::InputError, presence::PresenceError,
};

/// Generic reply for failures the member cannot act on.
const INTERNAL_REPLY: &str = "Something went wrong, please try again later.";

/// Top-level application error type.
///
/// Aggregates all errors that can occur while handling interactions, running the
/// leaderboard scheduler or starting up. Domain errors are user-facing and keep
/// the session store untouched; infrastructure errors are logged and answered
/// with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the bot from starting at all.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The acting member lacks the administrator role.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// A presence transition whose precondition was not met.
    #[error(transparent)]
    PresenceErr(#[from] PresenceError),

    /// Malformed command input such as an unparseable duration.
    #[error(transparent)]
    InputErr(#[from] InputError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error while registering or starting the refresh job.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A publish target (channel or message) could not be reached.
    ///
    /// The publish cycle is skipped and retried on the next tick.
    #[error("Publish target unavailable: {0}")]
    TransportUnavailable(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text shown to the member whose interaction failed.
    ///
    /// Domain errors carry their own wording. Everything else is logged with
    /// full details and answered with a generic message so that internals do
    /// not leak into the channel.
    pub fn reply_message(&self) -> String {
        match self {
            Self::AuthErr(err) => err.reply_message().to_string(),
            Self::PresenceErr(err) => err.to_string(),
            Self::InputErr(err) => err.to_string(),
            err => {
                tracing::error!("Interaction failed: {}", err);
                INTERNAL_REPLY.to_string()
            }
        }
    }

    /// Returns true for errors caused by the member rather than the bot.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::AuthErr(_) | Self::PresenceErr(_) | Self::InputErr(_))
    }
}
