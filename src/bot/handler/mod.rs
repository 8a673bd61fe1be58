use std::sync::atomic::AtomicBool;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod command;
pub mod component;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Set once the first ready event has posted the panel.
    started: AtomicBool,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, &self.started, ctx, ready).await;
    }

    /// Called for button presses and slash commands
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Component(component) => {
                component::handle_component(&self.state, ctx, component).await;
            }
            Interaction::Command(command) => {
                command::handle_command(&self.state, ctx, command).await;
            }
            _ => {}
        }
    }
}
