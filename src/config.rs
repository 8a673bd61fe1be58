use std::str::FromStr;

use serenity::all::{ChannelId, GuildId, RoleId};

use crate::{
    error::{config::ConfigError, AppError},
    model::leaderboard::StatusLayout,
};

/// Seconds between leaderboard refreshes when not configured.
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

pub struct Config {
    pub discord_bot_token: String,

    /// Channel holding the control panel buttons.
    pub panel_channel_id: ChannelId,
    /// Channel holding the leaderboard and live status messages.
    pub leaderboard_channel_id: ChannelId,
    /// Optional audit log channel.
    pub log_channel_id: Option<ChannelId>,
    /// Role required for admin commands.
    pub admin_role_id: RoleId,
    /// Registers slash commands for this guild only instead of globally.
    pub guild_id: Option<GuildId>,

    pub refresh_interval_secs: u64,
    pub status_layout: StatusLayout,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A variable is missing or malformed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let refresh_interval_secs = match optional("LEADERBOARD_INTERVAL_SECS") {
            Some(value) => parse_id("LEADERBOARD_INTERVAL_SECS", &value)?,
            None => DEFAULT_REFRESH_INTERVAL_SECS,
        };

        let status_layout = match optional("STATUS_LAYOUT") {
            Some(value) => StatusLayout::from_str(&value).map_err(|_| ConfigError::InvalidEnvVar {
                name: "STATUS_LAYOUT".to_string(),
                value,
            })?,
            None => StatusLayout::default(),
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            panel_channel_id: ChannelId::new(parse_id(
                "PANEL_CHANNEL_ID",
                &required("PANEL_CHANNEL_ID")?,
            )?),
            leaderboard_channel_id: ChannelId::new(parse_id(
                "LEADERBOARD_CHANNEL_ID",
                &required("LEADERBOARD_CHANNEL_ID")?,
            )?),
            log_channel_id: optional("LOG_CHANNEL_ID")
                .map(|value| parse_id("LOG_CHANNEL_ID", &value).map(ChannelId::new))
                .transpose()?,
            admin_role_id: RoleId::new(parse_id("ADMIN_ROLE_ID", &required("ADMIN_ROLE_ID")?)?),
            guild_id: optional("GUILD_ID")
                .map(|value| parse_id("GUILD_ID", &value).map(GuildId::new))
                .transpose()?,
            refresh_interval_secs,
            status_layout,
        })
    }
}

/// Parses a non-zero u64, as used by Discord snowflakes and the refresh interval.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base_vars() -> HashMap<String, String> {
        vars(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("PANEL_CHANNEL_ID", "1381017996524257442"),
            ("LEADERBOARD_CHANNEL_ID", "1379861500877078721"),
            ("ADMIN_ROLE_ID", "1379861837075452035"),
        ])
    }

    #[test]
    fn loads_required_values_with_defaults() {
        let env = base_vars();

        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.panel_channel_id, ChannelId::new(1381017996524257442));
        assert_eq!(config.admin_role_id, RoleId::new(1379861837075452035));
        assert_eq!(config.log_channel_id, None);
        assert_eq!(config.guild_id, None);
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.status_layout, StatusLayout::Flat);
    }

    #[test]
    fn loads_optional_values() {
        let mut env = base_vars();
        env.extend(vars(&[
            ("LOG_CHANNEL_ID", "1381056616362803330"),
            ("GUILD_ID", "42"),
            ("LEADERBOARD_INTERVAL_SECS", "60"),
            ("STATUS_LAYOUT", "Grouped"),
        ]));

        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.log_channel_id, Some(ChannelId::new(1381056616362803330)));
        assert_eq!(config.guild_id, Some(GuildId::new(42)));
        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.status_layout, StatusLayout::Grouped);
    }

    #[test]
    fn missing_token_is_reported() {
        let mut env = base_vars();
        env.remove("DISCORD_BOT_TOKEN");

        let result = Config::from_lookup(|k| env.get(k).cloned());

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn malformed_ids_are_reported() {
        for (name, value) in [
            ("ADMIN_ROLE_ID", "admins"),
            ("PANEL_CHANNEL_ID", "0"),
            ("LEADERBOARD_INTERVAL_SECS", "0"),
            ("STATUS_LAYOUT", "sideways"),
        ] {
            let mut env = base_vars();
            env.insert(name.to_string(), value.to_string());

            let result = Config::from_lookup(|k| env.get(k).cloned());

            assert!(
                matches!(result, Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))),
                "{}={} should be rejected",
                name,
                value
            );
        }
    }
}
