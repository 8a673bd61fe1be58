use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client and extracts its HTTP handle
///
/// The HTTP handle is shared with the leaderboard scheduler so it can publish
/// without a second connection.
///
/// # Arguments
/// - `state` - Application state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&state.config.discord_bot_token, intents)
        .event_handler(Handler::new(state.clone()))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the Discord bot until shutdown
///
/// Blocks until the gateway connection ends. Ctrl-C shuts every shard down so
/// the process exits cleanly.
///
/// # Returns
/// - `Ok(())` - The bot shut down
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received, stopping Discord bot");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
