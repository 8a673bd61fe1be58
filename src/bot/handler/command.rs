//! Slash command dispatch.
//!
//! Commands are answered with an ephemeral reply first. Audit entries and the
//! leaderboard refresh after a reset happen afterwards, so a slow log channel
//! never delays the reply past Discord's interaction deadline.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    ResolvedValue, RoleId,
};

use crate::{
    bot::{commands::BotCommand, display_name},
    error::{input::InputError, AppError},
    model::session::Transition,
    state::AppState,
    util::duration::format_duration,
};

/// Result of a successful command.
#[derive(Debug, Default, PartialEq, Eq)]
struct Outcome {
    reply: String,
    /// Line for the audit log, if the command changed anything.
    audit: Option<String>,
    /// Whether the leaderboard must be republished right away.
    refresh: bool,
}

/// Member a command acts on, resolved from the `user` option.
struct Target {
    id: u64,
    name: String,
}

/// Options a command may carry.
#[derive(Default)]
struct CommandArgs<'a> {
    target: Option<Target>,
    amount: Option<&'a str>,
}

impl<'a> CommandArgs<'a> {
    fn parse(command: &'a CommandInteraction) -> Self {
        let mut args = Self::default();

        for option in command.data.options() {
            match (option.name, option.value) {
                ("user", ResolvedValue::User(user, member)) => {
                    args.target = Some(Target {
                        id: user.id.get(),
                        name: display_name(member.and_then(|m| m.nick.as_deref()), user),
                    });
                }
                ("amount", ResolvedValue::String(amount)) => args.amount = Some(amount),
                _ => {}
            }
        }

        args
    }

    fn target(&mut self) -> Result<Target, InputError> {
        self.target
            .take()
            .ok_or_else(|| InputError::MissingOption("user".to_string()))
    }

    fn amount(&self) -> Result<&'a str, InputError> {
        self.amount
            .ok_or_else(|| InputError::MissingOption("amount".to_string()))
    }
}

/// Handles a slash command invocation.
pub async fn handle_command(state: &AppState, ctx: Context, command: CommandInteraction) {
    let Some(bot_command) = BotCommand::from_name(&command.data.name) else {
        tracing::debug!("Ignoring unknown command /{}", command.data.name);
        return;
    };

    let outcome = match run(state, bot_command, &command).await {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_user_error() {
                tracing::debug!("/{} by {} rejected: {}", command.data.name, command.user.id, e);
            }
            Outcome {
                reply: e.reply_message(),
                ..Outcome::default()
            }
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(&outcome.reply)
            .ephemeral(true),
    );
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::warn!("Failed to answer /{}: {}", command.data.name, e);
    }

    if let Some(line) = outcome.audit {
        state.audit.record(&ctx.http, &line).await;
    }

    if outcome.refresh {
        if let Err(e) = state.publisher.refresh(&ctx.http, &state.leaderboard()).await {
            tracing::warn!("Leaderboard refresh after /{} failed: {}", command.data.name, e);
        }
    }
}

async fn run(
    state: &AppState,
    bot_command: BotCommand,
    command: &CommandInteraction,
) -> Result<Outcome, AppError> {
    let actor_roles: &[RoleId] = command
        .member
        .as_deref()
        .map(|member| member.roles.as_slice())
        .unwrap_or_default();
    let actor = display_name(
        command.member.as_deref().and_then(|m| m.nick.as_deref()),
        &command.user,
    );

    let admin = state.admin();
    if bot_command.is_admin() {
        admin.authorize(actor_roles)?;
    }

    let mut args = CommandArgs::parse(command);

    match bot_command {
        BotCommand::Playtime => {
            let presence = state.presence();
            presence.remember_name(command.user.id.get(), &actor).await;
            let (status, totals) = presence.live_totals(command.user.id.get()).await;

            Ok(Outcome {
                reply: format!(
                    "Status: `{}`\nOnline: `{}`\nAFK: `{}`",
                    status.label(),
                    format_duration(totals.online),
                    format_duration(totals.afk)
                ),
                ..Outcome::default()
            })
        }
        BotCommand::AddTime => {
            let target = args.target()?;
            let amount = args.amount()?;
            let (session, seconds) = admin.add_time(actor_roles, target.id, amount).await?;
            state.presence().remember_name(target.id, &target.name).await;

            Ok(Outcome {
                reply: format!(
                    "Added `{}` to {}. Online total: `{}`.",
                    format_duration(seconds),
                    target.name,
                    format_duration(session.online_total)
                ),
                audit: Some(format!(
                    "➕ {} added {} to {}.",
                    actor,
                    format_duration(seconds),
                    target.name
                )),
                refresh: false,
            })
        }
        BotCommand::RemoveTime => {
            let target = args.target()?;
            let amount = args.amount()?;
            let (session, seconds) = admin.remove_time(actor_roles, target.id, amount).await?;
            state.presence().remember_name(target.id, &target.name).await;

            Ok(Outcome {
                reply: format!(
                    "Removed `{}` from {}. Online total: `{}`.",
                    format_duration(seconds),
                    target.name,
                    format_duration(session.online_total)
                ),
                audit: Some(format!(
                    "➖ {} removed {} from {}.",
                    actor,
                    format_duration(seconds),
                    target.name
                )),
                refresh: false,
            })
        }
        BotCommand::SetStatus(transition) => {
            let target = args.target()?;
            let session = admin.set_status(actor_roles, target.id, transition).await?;
            state.presence().remember_name(target.id, &target.name).await;

            Ok(Outcome {
                reply: format!("{} is now {}.", target.name, session.status.label()),
                audit: Some(set_status_line(&actor, &target.name, transition)),
                refresh: false,
            })
        }
        BotCommand::ResetLeaderboard => {
            let cleared = admin.reset_leaderboard(actor_roles).await?;

            Ok(Outcome {
                reply: format!("Leaderboard reset ({} sessions cleared).", cleared),
                audit: Some(format!("🧹 {} reset the leaderboard.", actor)),
                refresh: true,
            })
        }
    }
}

fn set_status_line(actor: &str, target: &str, transition: Transition) -> String {
    match transition {
        Transition::Back => format!("🛠️ {} brought {} back from AFK.", actor, target),
        _ => format!(
            "🛠️ {} set {} to {}.",
            actor,
            target,
            transition.target().label()
        ),
    }
}
