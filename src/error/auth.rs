use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The acting member does not hold the configured administrator role.
    ///
    /// Raised before any admin command touches the session store.
    #[error("Member is missing the administrator role")]
    MissingAdminRole,
}

impl AuthError {
    /// Fixed denial shown to members without the administrator role.
    pub fn reply_message(&self) -> &'static str {
        match self {
            Self::MissingAdminRole => "You don't have permission to use this command.",
        }
    }
}
