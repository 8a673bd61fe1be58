use std::sync::Arc;
use std::time::Duration;

use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, state::AppState};

/// Starts the leaderboard refresh scheduler
///
/// Every `refresh_interval_secs` the leaderboard is re-rendered from live totals
/// and published to the leaderboard channel. A tick that fires while the previous
/// refresh is still running is skipped.
///
/// # Arguments
/// - `state`: Application state holding the store and publisher
/// - `discord_http`: Discord HTTP client for editing messages
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let interval = Duration::from_secs(state.config.refresh_interval_secs);

    let job_state = state.clone();
    let job_http = discord_http.clone();

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            refresh_leaderboard(&state, &http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Leaderboard scheduler started, refreshing every {}s",
        interval.as_secs()
    );

    Ok(())
}

/// Runs one scheduled refresh.
///
/// Publish failures are logged and retried naturally on the next tick.
async fn refresh_leaderboard(state: &AppState, http: &Http) {
    match state
        .publisher
        .try_refresh(http, &state.leaderboard())
        .await
    {
        Ok(true) => tracing::debug!("Leaderboard refreshed"),
        Ok(false) => {}
        Err(e) => tracing::error!("Error refreshing leaderboard: {}", e),
    }
}
