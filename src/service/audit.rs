//! Audit trail for presence changes and admin actions.
//!
//! Every entry goes to the tracing log. When a log channel is configured the
//! entry is also posted there; delivery failures are logged and otherwise
//! ignored so that auditing can never fail the action being audited.

use serenity::all::{ChannelId, CreateMessage};
use serenity::http::Http;

use crate::model::session::Transition;

#[derive(Clone, Copy, Debug)]
pub struct AuditLog {
    channel_id: Option<ChannelId>,
}

impl AuditLog {
    pub fn new(channel_id: Option<ChannelId>) -> Self {
        Self { channel_id }
    }

    /// Records one audit line.
    pub async fn record(&self, http: &Http, message: &str) {
        tracing::info!(target: "audit", "{}", message);

        let Some(channel_id) = self.channel_id else {
            return;
        };

        if let Err(e) = channel_id
            .send_message(http, CreateMessage::new().content(message))
            .await
        {
            tracing::warn!(
                "Failed to deliver audit message to channel {}: {}",
                channel_id,
                e
            );
        }
    }
}

/// Audit line for a member changing their own presence.
pub fn self_transition_line(name: &str, transition: Transition) -> String {
    match transition {
        Transition::Online => format!("🟢 {} is now ONLINE.", name),
        Transition::Afk => format!("🟡 {} is now AFK.", name),
        Transition::Back => format!("🔁 {} is back from AFK.", name),
        Transition::Offline => format!("🔴 {} is now OFFLINE.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_transition_lines() {
        assert_eq!(
            self_transition_line("Alice", Transition::Online),
            "🟢 Alice is now ONLINE."
        );
        assert_eq!(
            self_transition_line("Alice", Transition::Back),
            "🔁 Alice is back from AFK."
        );
    }

    #[tokio::test]
    async fn record_without_channel_does_not_touch_discord() {
        let audit = AuditLog::new(None);
        let http = Http::new("");

        audit.record(&http, "🟢 Alice is now ONLINE.").await;
    }
}
