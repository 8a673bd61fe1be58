//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, including
//! reconnects. One-time setup runs only on the first one:
//! - Register the slash commands
//! - Replace the control panel in the panel channel
//! - Publish the leaderboard once so the channel is never empty

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, Ready};

use crate::{
    bot::{commands, panel},
    state::AppState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Setup failures are logged and do not stop the bot; the scheduler keeps
/// publishing and members can still use the previous panel.
///
/// # Arguments
/// - `state` - Application state
/// - `started` - Flag flipped by the first ready event
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, started: &AtomicBool, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Reconnected, skipping startup tasks");
        return;
    }

    if let Err(e) = commands::register(&ctx.http, state.config.guild_id).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }

    if let Err(e) = panel::post_panel(&ctx.http, state.config.panel_channel_id).await {
        tracing::error!("Failed to post control panel: {}", e);
    }

    if let Err(e) = state.publisher.refresh(&ctx.http, &state.leaderboard()).await {
        tracing::warn!("Initial leaderboard publish failed: {}", e);
    }
}
