//! Process-wide configuration.
//!
//! [`Config`] is loaded once at start-up and shared read-only (typically
//! behind an `Arc`) by every command invocation. It can be built from
//! explicit values, from environment variables, or from a JSON file.

mod error;

pub use error::ConfigError;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable holding the Slack auth token.
pub const SLACK_AUTH_TOKEN_VAR: &str = "SLACK_AUTH_TOKEN";
/// Environment variable holding the slash-command path.
pub const SLACK_SLASH_COMMAND_VAR: &str = "SLACK_SLASH_COMMAND";
/// Environment variable holding the Slack team name.
pub const SLACK_TEAM_NAME_VAR: &str = "SLACK_TEAM_NAME";
/// Environment variable holding the bot's Slack user ID.
pub const SLACK_USER_ID_VAR: &str = "SLACK_USER_ID";
/// Environment variable holding the audit-log channel ID.
pub const SLACK_AUDIT_LOG_CHANNEL_ID_VAR: &str = "SLACK_AUDIT_LOG_CHANNEL_ID";
/// Environment variable holding the uninvitable email domain.
pub const UNINVITABLE_DOMAIN_VAR: &str = "UNINVITABLE_DOMAIN";
/// Environment variable holding the uninvitable-domain rejection message.
pub const UNINVITABLE_DOMAIN_MESSAGE_VAR: &str = "UNINVITABLE_DOMAIN_MESSAGE";

/// Read-only settings shared by all actions.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing)]
    slack_auth_token: String,
    slack_slash_command: String,
    slack_team_name: String,
    slack_user_id: String,
    audit_log_channel_id: String,
    #[serde(default)]
    uninvitable_domain: String,
    #[serde(default)]
    uninvitable_domain_message: String,
}

impl Config {
    /// Builds a configuration from explicit values without validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use concierge::config::Config;
    ///
    /// let config = Config::new(
    ///     "xoxp-token",
    ///     "/goulash",
    ///     "acme",
    ///     "U0BOT",
    ///     "C0AUDIT",
    ///     "",
    ///     "",
    /// );
    /// assert_eq!(config.slack_team_name(), "acme");
    /// ```
    #[must_use]
    pub fn new(
        slack_auth_token: impl Into<String>,
        slack_slash_command: impl Into<String>,
        slack_team_name: impl Into<String>,
        slack_user_id: impl Into<String>,
        audit_log_channel_id: impl Into<String>,
        uninvitable_domain: impl Into<String>,
        uninvitable_domain_message: impl Into<String>,
    ) -> Self {
        Self {
            slack_auth_token: slack_auth_token.into(),
            slack_slash_command: slack_slash_command.into(),
            slack_team_name: slack_team_name.into(),
            slack_user_id: slack_user_id.into(),
            audit_log_channel_id: audit_log_channel_id.into(),
            uninvitable_domain: uninvitable_domain.into(),
            uninvitable_domain_message: uninvitable_domain_message.into(),
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] when a required variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] when a required variable is
    /// missing or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingSetting(key.to_owned()))
        };
        let optional = |key: &str| lookup(key).unwrap_or_default().trim().to_owned();

        Ok(Self {
            slack_auth_token: required(SLACK_AUTH_TOKEN_VAR)?,
            slack_slash_command: required(SLACK_SLASH_COMMAND_VAR)?,
            slack_team_name: required(SLACK_TEAM_NAME_VAR)?,
            slack_user_id: required(SLACK_USER_ID_VAR)?,
            audit_log_channel_id: required(SLACK_AUDIT_LOG_CHANNEL_ID_VAR)?,
            uninvitable_domain: optional(UNINVITABLE_DOMAIN_VAR),
            uninvitable_domain_message: optional(UNINVITABLE_DOMAIN_MESSAGE_VAR),
        })
    }

    /// Parses configuration from a JSON document with snake_case keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::MissingSetting`] when a required key is empty.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be opened or read,
    /// otherwise the errors of [`Config::from_json_str`].
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source: std::io::Error| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&contents)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let required = [
            ("slack_auth_token", &self.slack_auth_token),
            ("slack_slash_command", &self.slack_slash_command),
            ("slack_team_name", &self.slack_team_name),
            ("slack_user_id", &self.slack_user_id),
            ("audit_log_channel_id", &self.audit_log_channel_id),
        ];
        if let Some((key, _)) = required
            .iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ConfigError::MissingSetting((*key).to_owned()));
        }
        Ok(self)
    }

    /// Returns the Slack auth token.
    #[must_use]
    pub fn slack_auth_token(&self) -> &str {
        &self.slack_auth_token
    }

    /// Returns the slash-command path the front end listens on.
    #[must_use]
    pub fn slack_slash_command(&self) -> &str {
        &self.slack_slash_command
    }

    /// Returns the Slack team name used for admin API calls.
    #[must_use]
    pub fn slack_team_name(&self) -> &str {
        &self.slack_team_name
    }

    /// Returns the Slack user ID the bot acts as.
    #[must_use]
    pub fn slack_user_id(&self) -> &str {
        &self.slack_user_id
    }

    /// Returns the channel that receives audit messages.
    #[must_use]
    pub fn audit_log_channel_id(&self) -> &str {
        &self.audit_log_channel_id
    }

    /// Returns the email domain that may not be invited (empty disables it).
    #[must_use]
    pub fn uninvitable_domain(&self) -> &str {
        &self.uninvitable_domain
    }

    /// Returns the message shown when an invite hits the uninvitable domain.
    #[must_use]
    pub fn uninvitable_domain_message(&self) -> &str {
        &self.uninvitable_domain_message
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("slack_auth_token", &"<redacted>")
            .field("slack_slash_command", &self.slack_slash_command)
            .field("slack_team_name", &self.slack_team_name)
            .field("slack_user_id", &self.slack_user_id)
            .field("audit_log_channel_id", &self.audit_log_channel_id)
            .field("uninvitable_domain", &self.uninvitable_domain)
            .field(
                "uninvitable_domain_message",
                &self.uninvitable_domain_message,
            )
            .finish()
    }
}
