use std::sync::LazyLock;

use regex::Regex;

use crate::error::input::InputError;

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Hours are not wrapped at 24, so 100 hours renders as `100:00:00`.
///
/// # Arguments
/// - `seconds` - Whole seconds to format
///
/// # Returns
/// - `String` - Zero padded clock string
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Admin duration token: ASCII digits followed by a unit letter.
static DURATION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([smh])$").unwrap());

/// Parses an admin supplied duration token such as `90s`, `10m` or `2h`.
///
/// The token is trimmed and matched case-insensitively against
/// `<ascii digits><s|m|h>`. Signs, fractions, spaces inside the token and
/// values that overflow `u64` seconds are rejected.
///
/// # Arguments
/// - `token` - Raw option value from the slash command
///
/// # Returns
/// - `Ok(u64)` - Duration in seconds
/// - `Err(InputError::InvalidDuration)` - Token is malformed
pub fn parse_duration(token: &str) -> Result<u64, InputError> {
    let invalid = || InputError::InvalidDuration(token.trim().to_string());

    let normalized = token.trim().to_ascii_lowercase();
    let captures = DURATION_TOKEN.captures(&normalized).ok_or_else(invalid)?;

    let multiplier = match &captures[2] {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        _ => return Err(invalid()),
    };

    captures[1]
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
        .ok_or_else(invalid)
}
