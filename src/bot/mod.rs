//! Discord bot integration for presence tracking.
//!
//! The bot owns every interaction with Discord: it posts the control panel,
//! registers the slash commands, and answers button presses and commands by
//! calling into the service layer. The bot's HTTP client is shared with the
//! leaderboard scheduler so that both publish through the same connection.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent. Button presses and slash
//! commands arrive as interactions, which are delivered regardless of intents.

pub mod commands;
pub mod handler;
pub mod panel;
pub mod start;

use serenity::all::User;

/// Name shown for a member: guild nickname, then global name, then username.
pub fn display_name(nick: Option<&str>, user: &User) -> String {
    nick.or(user.global_name.as_deref())
        .unwrap_or(&user.name)
        .to_string()
}
