use thiserror::Error;

/// Malformed input supplied to a slash command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Duration token does not match `<digits><s|m|h>`.
    #[error("Invalid duration `{0}`. Use a whole number followed by s, m or h, e.g. `10m`.")]
    InvalidDuration(String),

    /// A required command option was not provided.
    #[error("Missing required option `{0}`.")]
    MissingOption(String),
}
