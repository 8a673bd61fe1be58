//! Control panel posted to the panel channel on startup.
//!
//! The panel is a single message carrying one button per presence transition.
//! Button custom ids are the transition ids, so the component handler can map a
//! press straight back to its transition.

use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateMessage, GetMessages, MessageId,
};
use serenity::http::Http;

use crate::{error::AppError, model::session::Transition};

/// Number of recent panel channel messages removed before posting.
const PURGE_LIMIT: u8 = 5;

const PANEL_TEXT: &str = "**Playtime Tracker**\nClick your current status:";

/// Label shown on the button bound to a transition.
pub fn button_label(transition: Transition) -> &'static str {
    match transition {
        Transition::Online => "🟢 Online",
        Transition::Afk => "🟡 AFK",
        Transition::Back => "🔁 Back from AFK",
        Transition::Offline => "🔴 Offline",
    }
}

fn button_style(transition: Transition) -> ButtonStyle {
    match transition {
        Transition::Online => ButtonStyle::Success,
        Transition::Afk => ButtonStyle::Secondary,
        Transition::Back => ButtonStyle::Primary,
        Transition::Offline => ButtonStyle::Danger,
    }
}

fn buttons() -> Vec<CreateButton> {
    Transition::ALL
        .into_iter()
        .map(|transition| {
            CreateButton::new(transition.custom_id())
                .label(button_label(transition))
                .style(button_style(transition))
        })
        .collect()
}

/// Clears the panel channel's latest messages and posts a fresh panel.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `channel_id` - Channel the panel lives in
///
/// # Returns
/// - `Ok(())` - Panel posted
/// - `Err(AppError)` - Fetching recent messages or posting the panel failed
pub async fn post_panel(http: &Http, channel_id: ChannelId) -> Result<(), AppError> {
    let purged = purge_recent(http, channel_id).await?;
    tracing::debug!("Purged {} messages from panel channel {}", purged, channel_id);

    let message = CreateMessage::new()
        .content(PANEL_TEXT)
        .components(vec![CreateActionRow::Buttons(buttons())]);

    channel_id.send_message(http, message).await?;
    tracing::info!("Posted control panel to channel {}", channel_id);

    Ok(())
}

/// Deletes up to `PURGE_LIMIT` of the channel's most recent messages.
///
/// Bulk deletion refuses messages older than two weeks, so a failed bulk
/// delete falls back to deleting one message at a time.
async fn purge_recent(http: &Http, channel_id: ChannelId) -> Result<usize, AppError> {
    let ids: Vec<MessageId> = channel_id
        .messages(http, GetMessages::new().limit(PURGE_LIMIT))
        .await?
        .into_iter()
        .map(|message| message.id)
        .collect();

    match ids.as_slice() {
        [] => return Ok(0),
        [single] => {
            channel_id.delete_message(http, *single).await?;
            return Ok(1);
        }
        _ => {}
    }

    if let Err(e) = channel_id.delete_messages(http, &ids).await {
        tracing::debug!("Bulk delete in channel {} failed: {}", channel_id, e);

        let mut deleted = 0;
        for id in &ids {
            match channel_id.delete_message(http, *id).await {
                Ok(()) => deleted += 1,
                Err(e) => tracing::warn!("Failed to delete message {}: {}", id, e),
            }
        }

        return Ok(deleted);
    }

    Ok(ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transition_has_a_distinct_button() {
        let labels: Vec<&str> = Transition::ALL.into_iter().map(button_label).collect();

        assert_eq!(
            labels,
            vec!["🟢 Online", "🟡 AFK", "🔁 Back from AFK", "🔴 Offline"]
        );
        assert_eq!(buttons().len(), Transition::ALL.len());
    }
}
