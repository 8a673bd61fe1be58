//! Button presses on the control panel.
//!
//! Each press maps to one presence transition for the pressing member. The
//! member always gets an ephemeral reply; successful changes are also written
//! to the audit log.

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::display_name,
    error::AppError,
    model::session::Transition,
    service::audit::self_transition_line,
    state::AppState,
};

/// Handles a control panel button press.
///
/// Unknown custom ids are ignored, since other components may share the bot.
pub async fn handle_component(state: &AppState, ctx: Context, component: ComponentInteraction) {
    let Some(transition) = Transition::from_custom_id(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", component.data.custom_id);
        return;
    };

    let user_id = component.user.id.get();
    let name = display_name(
        component.member.as_ref().and_then(|m| m.nick.as_deref()),
        &component.user,
    );

    let presence = state.presence();
    let result = presence.transition(user_id, transition).await;
    if result.is_ok() {
        presence.remember_name(user_id, &name).await;
    }
    let content = reply_for(transition, &result);

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );
    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::warn!("Failed to answer button press from {}: {}", user_id, e);
    }

    if result.is_ok() {
        state
            .audit
            .record(&ctx.http, &self_transition_line(&name, transition))
            .await;
    }
}

fn reply_for<T>(transition: Transition, result: &Result<T, AppError>) -> String {
    match result {
        Ok(_) => confirmation(transition).to_string(),
        Err(AppError::PresenceErr(_)) => rejection(transition).to_string(),
        Err(e) => e.reply_message(),
    }
}

fn confirmation(transition: Transition) -> &'static str {
    match transition {
        Transition::Online => "You're now marked as online.",
        Transition::Afk => "You're now AFK.",
        Transition::Back => "You're now back from AFK.",
        Transition::Offline => "You're now offline.",
    }
}

fn rejection(transition: Transition) -> &'static str {
    match transition {
        Transition::Online => "You're already online.",
        Transition::Afk => "You must be online to go AFK.",
        Transition::Back => "You must be AFK to come back.",
        Transition::Offline => "You're already offline.",
    }
}

#[cfg(test)]
mod tests {
    use entity::session::Status;

    use super::*;
    use crate::error::presence::PresenceError;

    #[test]
    fn success_confirms_the_new_status() {
        let result: Result<(), AppError> = Ok(());

        assert_eq!(
            reply_for(Transition::Online, &result),
            "You're now marked as online."
        );
        assert_eq!(reply_for(Transition::Offline, &result), "You're now offline.");
    }

    #[test]
    fn rejected_transition_explains_the_precondition() {
        let result: Result<(), AppError> = Err(AppError::PresenceErr(
            PresenceError::InvalidTransition {
                transition: Transition::Afk,
                status: Status::Offline,
            },
        ));

        assert_eq!(
            reply_for(Transition::Afk, &result),
            "You must be online to go AFK."
        );
    }

    #[test]
    fn internal_failure_shows_generic_message() {
        let result: Result<(), AppError> =
            Err(AppError::TransportUnavailable("leaderboard".to_string()));

        assert_eq!(
            reply_for(Transition::Back, &result),
            "Something went wrong, please try again later."
        );
    }
}
