//! Slack workspace capability port.
//!
//! The command engine treats the messaging platform as an opaque set of
//! blocking capabilities. Every call may fail; failures carry the platform's
//! error text unchanged so it can be surfaced verbatim to the commander.

use thiserror::Error;

use crate::command::domain::UserRecord;

/// Result type for Slack capability calls.
pub type SlackApiResult<T> = Result<T, SlackApiError>;

/// Capabilities the command engine needs from the workspace.
///
/// Implementations must be safe for concurrent use; the engine holds no
/// state of its own between calls and performs no retries.
pub trait SlackApi: Send + Sync {
    /// Lists every user in the workspace directory.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the directory cannot be fetched.
    fn list_users(&self) -> SlackApiResult<Vec<UserRecord>>;

    /// Disables the account with `user_id` in `team_name`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the platform rejects the request.
    fn disable_user(&self, team_name: &str, user_id: &str) -> SlackApiResult<()>;

    /// Invites a single-channel guest into `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the platform rejects the invitation.
    fn invite_guest(
        &self,
        team_name: &str,
        channel_id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackApiResult<()>;

    /// Invites a restricted (multi-channel guest) account into `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the platform rejects the invitation.
    fn invite_restricted(
        &self,
        team_name: &str,
        channel_id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackApiResult<()>;

    /// Looks up the display name of `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the channel cannot be resolved. Callers
    /// treat this as best-effort.
    fn resolve_channel_name(&self, channel_id: &str) -> SlackApiResult<String>;

    /// Posts `text` to `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the message cannot be posted.
    fn post_message(&self, channel_id: &str, text: &str) -> SlackApiResult<()>;
}

/// Failure reported by the workspace.
///
/// Displays as the platform's message with nothing added.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SlackApiError {
    message: String,
}

impl SlackApiError {
    /// Wraps the platform's error text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the platform's error text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
