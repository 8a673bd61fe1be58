//! Administrator operations gated on a single role.
//!
//! Every method checks the acting member's roles before parsing input or
//! touching the store, so an unauthorized call never mutates anything.

use entity::session::Model;
use serenity::all::RoleId;

use crate::{
    error::{auth::AuthError, AppError},
    model::session::Transition,
    service::presence::PresenceService,
    util::duration::parse_duration,
};

pub struct AdminService<'a> {
    presence: PresenceService<'a>,
    admin_role: RoleId,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService.
    ///
    /// # Arguments
    /// - `presence` - Presence service the admin operations delegate to
    /// - `admin_role` - Role a member must hold to use admin operations
    pub fn new(presence: PresenceService<'a>, admin_role: RoleId) -> Self {
        Self {
            presence,
            admin_role,
        }
    }

    /// Verifies that the acting member holds the administrator role.
    ///
    /// # Arguments
    /// - `actor_roles` - Roles of the member invoking the command
    ///
    /// # Returns
    /// - `Ok(())` - Member is an administrator
    /// - `Err(AuthError::MissingAdminRole)` - Member lacks the role
    pub fn authorize(&self, actor_roles: &[RoleId]) -> Result<(), AuthError> {
        if actor_roles.contains(&self.admin_role) {
            Ok(())
        } else {
            Err(AuthError::MissingAdminRole)
        }
    }

    /// Forces a presence transition on another member's session.
    pub async fn set_status(
        &self,
        actor_roles: &[RoleId],
        user_id: u64,
        transition: Transition,
    ) -> Result<Model, AppError> {
        self.authorize(actor_roles)?;

        self.presence.transition(user_id, transition).await
    }

    /// Adds a duration token's worth of online time to a member.
    ///
    /// # Returns
    /// - `Ok((Model, u64))` - Updated session and the parsed seconds
    /// - `Err(AppError::AuthErr)` - Actor is not an administrator
    /// - `Err(AppError::InputErr)` - Duration token is malformed
    pub async fn add_time(
        &self,
        actor_roles: &[RoleId],
        user_id: u64,
        amount: &str,
    ) -> Result<(Model, u64), AppError> {
        self.authorize(actor_roles)?;
        let seconds = parse_duration(amount)?;

        let session = self.presence.add_time(user_id, seconds).await?;

        Ok((session, seconds))
    }

    /// Removes a duration token's worth of online time from a member.
    ///
    /// The online total never drops below zero.
    pub async fn remove_time(
        &self,
        actor_roles: &[RoleId],
        user_id: u64,
        amount: &str,
    ) -> Result<(Model, u64), AppError> {
        self.authorize(actor_roles)?;
        let seconds = parse_duration(amount)?;

        let session = self.presence.remove_time(user_id, seconds).await?;

        Ok((session, seconds))
    }

    /// Clears the whole leaderboard.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of sessions removed
    pub async fn reset_leaderboard(&self, actor_roles: &[RoleId]) -> Result<usize, AppError> {
        self.authorize(actor_roles)?;

        Ok(self.presence.reset_all().await)
    }
}
