mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    config::Config, error::AppError, scheduler::leaderboard, state::AppState,
    util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = AppState::new(config, Arc::new(SystemClock));

    tracing::info!("Starting playtime tracker");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(state.clone()).await?;

    // Start leaderboard scheduler
    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = leaderboard::start_scheduler(scheduler_state, discord_http).await {
            tracing::error!("Leaderboard scheduler error: {}", e);
        }
    });

    bot::start::start_bot(bot_client).await
}
