//! Slash command definitions and registration.

use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId};
use serenity::http::Http;

use crate::{error::AppError, model::session::Transition};

/// Every slash command the bot answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    /// Shows the caller's own tracked time.
    Playtime,
    AddTime,
    RemoveTime,
    /// Forces a presence transition on another member.
    SetStatus(Transition),
    ResetLeaderboard,
}

impl BotCommand {
    pub const ALL: [BotCommand; 8] = [
        BotCommand::Playtime,
        BotCommand::AddTime,
        BotCommand::RemoveTime,
        BotCommand::SetStatus(Transition::Online),
        BotCommand::SetStatus(Transition::Afk),
        BotCommand::SetStatus(Transition::Back),
        BotCommand::SetStatus(Transition::Offline),
        BotCommand::ResetLeaderboard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BotCommand::Playtime => "playtime",
            BotCommand::AddTime => "add_time",
            BotCommand::RemoveTime => "remove_time",
            BotCommand::SetStatus(Transition::Online) => "set_online",
            BotCommand::SetStatus(Transition::Afk) => "set_afk",
            BotCommand::SetStatus(Transition::Back) => "set_back_from_afk",
            BotCommand::SetStatus(Transition::Offline) => "set_offline",
            BotCommand::ResetLeaderboard => "reset_leaderboard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Whether the command requires the administrator role.
    pub fn is_admin(self) -> bool {
        !matches!(self, BotCommand::Playtime)
    }

    fn description(self) -> &'static str {
        match self {
            BotCommand::Playtime => "Show your tracked online and AFK time",
            BotCommand::AddTime => "[Admin] Add online time to a member",
            BotCommand::RemoveTime => "[Admin] Remove online time from a member",
            BotCommand::SetStatus(Transition::Online) => "[Admin] Mark a member as online",
            BotCommand::SetStatus(Transition::Afk) => "[Admin] Mark a member as AFK",
            BotCommand::SetStatus(Transition::Back) => "[Admin] Bring a member back from AFK",
            BotCommand::SetStatus(Transition::Offline) => "[Admin] Mark a member as offline",
            BotCommand::ResetLeaderboard => "[Admin] Clear all tracked time",
        }
    }

    /// Builds the registration payload for this command.
    pub fn definition(self) -> CreateCommand {
        let command = CreateCommand::new(self.name()).description(self.description());

        match self {
            BotCommand::AddTime | BotCommand::RemoveTime => command
                .add_option(user_option())
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "amount",
                        "Duration such as 90s, 10m or 2h",
                    )
                    .required(true),
                ),
            BotCommand::SetStatus(_) => command.add_option(user_option()),
            BotCommand::Playtime | BotCommand::ResetLeaderboard => command,
        }
    }
}

fn user_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", "Member to update").required(true)
}

/// Registers every slash command, for one guild when configured or globally.
///
/// Registration replaces the previous command set, so stale commands vanish.
pub async fn register(http: &Http, guild_id: Option<GuildId>) -> Result<(), AppError> {
    let definitions: Vec<CreateCommand> =
        BotCommand::ALL.iter().map(|command| command.definition()).collect();

    match guild_id {
        Some(guild_id) => {
            guild_id.set_commands(http, definitions).await?;
            tracing::info!("Registered slash commands for guild {}", guild_id);
        }
        None => {
            Command::set_global_commands(http, definitions).await?;
            tracing::info!("Registered global slash commands");
        }
    }

    Ok(())
}
