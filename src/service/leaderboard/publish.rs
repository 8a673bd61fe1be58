//! Leaderboard message publishing.
//!
//! The leaderboard channel holds two bot messages, the ranked leaderboard and the
//! live status view. Each refresh edits them in place; when a message reference
//! is missing, or Discord reports the referenced message as deleted, a new
//! message is posted on the next refresh instead.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateMessage, EditMessage, MessageId};
use serenity::http::{Http, HttpError};
use tokio::sync::Mutex;

use crate::{
    error::AppError, model::leaderboard::LeaderboardReport,
    service::leaderboard::LeaderboardService,
};

/// Ids of the messages previously posted to the leaderboard channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublishedMessages {
    pub leaderboard: Option<MessageId>,
    pub status: Option<MessageId>,
}

/// Publishes rendered leaderboards, one refresh at a time.
///
/// The mutex around the message references doubles as the render lock: a refresh
/// renders and publishes while holding it, so two refreshes never interleave.
#[derive(Clone)]
pub struct LeaderboardPublisher {
    channel_id: ChannelId,
    messages: Arc<Mutex<PublishedMessages>>,
}

impl LeaderboardPublisher {
    pub fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            messages: Arc::new(Mutex::new(PublishedMessages::default())),
        }
    }

    /// Renders and publishes, waiting for any refresh already in progress.
    ///
    /// Used after an admin reset, where the new state must reach the channel.
    pub async fn refresh(
        &self,
        http: &Http,
        leaderboard: &LeaderboardService<'_>,
    ) -> Result<(), AppError> {
        let mut messages = self.messages.lock().await;
        let report = leaderboard.render().await;

        self.publish(http, &mut messages, &report).await
    }

    /// Renders and publishes unless another refresh is still running.
    ///
    /// Used by the scheduler so that an overrunning refresh makes the next tick
    /// skip instead of queueing behind it.
    ///
    /// # Returns
    /// - `Ok(true)` - Refresh ran and both messages were published
    /// - `Ok(false)` - Another refresh holds the lock, tick skipped
    /// - `Err(AppError::TransportUnavailable)` - A message could not be published
    pub async fn try_refresh(
        &self,
        http: &Http,
        leaderboard: &LeaderboardService<'_>,
    ) -> Result<bool, AppError> {
        let Ok(mut messages) = self.messages.try_lock() else {
            tracing::debug!("Leaderboard refresh still running, skipping tick");
            return Ok(false);
        };
        let report = leaderboard.render().await;

        self.publish(http, &mut messages, &report).await?;

        Ok(true)
    }

    /// Copy of the current message references.
    #[cfg(test)]
    pub async fn published(&self) -> PublishedMessages {
        *self.messages.lock().await
    }

    async fn publish(
        &self,
        http: &Http,
        messages: &mut PublishedMessages,
        report: &LeaderboardReport,
    ) -> Result<(), AppError> {
        let leaderboard = self
            .upsert_message(http, &mut messages.leaderboard, &report.leaderboard, "leaderboard")
            .await;
        let status = self
            .upsert_message(http, &mut messages.status, &report.status, "status")
            .await;

        leaderboard.and(status)
    }

    /// Edits the referenced message, or posts a new one when there is none.
    ///
    /// The reference is dropped only when Discord reports the message as gone,
    /// so the next refresh posts a fresh one. Any other failure keeps it and
    /// the next refresh retries the edit.
    async fn upsert_message(
        &self,
        http: &Http,
        slot: &mut Option<MessageId>,
        content: &str,
        label: &str,
    ) -> Result<(), AppError> {
        if let Some(message_id) = *slot {
            return match self
                .channel_id
                .edit_message(http, message_id, EditMessage::new().content(content))
                .await
            {
                Ok(_) => {
                    tracing::debug!("Edited {} message {}", label, message_id);
                    Ok(())
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to edit {} message {} in channel {}: {}",
                        label,
                        message_id,
                        self.channel_id,
                        e
                    );
                    if is_unknown_message(&e) {
                        *slot = None;
                    }
                    Err(AppError::TransportUnavailable(format!(
                        "{} message {}",
                        label, message_id
                    )))
                }
            };
        }

        match self
            .channel_id
            .send_message(http, CreateMessage::new().content(content))
            .await
        {
            Ok(message) => {
                tracing::info!(
                    "Posted {} message {} in channel {}",
                    label,
                    message.id,
                    self.channel_id
                );
                *slot = Some(message.id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to post {} message in channel {}: {}",
                    label,
                    self.channel_id,
                    e
                );
                Err(AppError::TransportUnavailable(format!(
                    "{} channel {}",
                    label, self.channel_id
                )))
            }
        }
    }
}

/// Discord error code for a message that does not exist.
const UNKNOWN_MESSAGE: isize = 10008;

/// Whether an edit failed because the message no longer exists.
fn is_unknown_message(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 404 || response.error.code == UNKNOWN_MESSAGE
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use test_utils::factory;

    use super::*;
    use crate::{
        data::session::SessionStore, model::leaderboard::StatusLayout,
        util::clock::ManualClock,
    };

    #[tokio::test]
    async fn starts_without_message_references() {
        let publisher = LeaderboardPublisher::new(ChannelId::new(10));

        assert_eq!(publisher.published().await, PublishedMessages::default());
    }

    #[tokio::test]
    async fn overlapping_tick_is_skipped() {
        let publisher = LeaderboardPublisher::new(ChannelId::new(10));
        let store = SessionStore::new();
        let clock = ManualClock::new(factory::base_time());
        let leaderboard = LeaderboardService::new(&store, &clock, StatusLayout::Flat);
        let http = Http::new("");

        let _running = publisher.messages.lock().await;
        let ran = publisher.try_refresh(&http, &leaderboard).await;

        assert!(matches!(ran, Ok(false)));
    }

    #[test]
    fn only_missing_messages_count_as_unknown() {
        assert!(!is_unknown_message(&serenity::Error::Other("connection reset")));
    }

    #[tokio::test]
    async fn failed_edit_keeps_message_references() {
        let publisher = LeaderboardPublisher::new(ChannelId::new(10));
        {
            let mut messages = publisher.messages.lock().await;
            messages.leaderboard = Some(MessageId::new(111));
            messages.status = Some(MessageId::new(222));
        }
        let store = SessionStore::new();
        let clock = ManualClock::new(factory::base_time());
        let leaderboard = LeaderboardService::new(&store, &clock, StatusLayout::Flat);
        let http = Http::new("not-a-token");

        let result = publisher.try_refresh(&http, &leaderboard).await;

        assert!(matches!(result, Err(AppError::TransportUnavailable(_))));
        assert_eq!(
            publisher.published().await,
            PublishedMessages {
                leaderboard: Some(MessageId::new(111)),
                status: Some(MessageId::new(222)),
            }
        );
    }
}
