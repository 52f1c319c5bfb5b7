//! Error types for action execution.

use thiserror::Error;

use crate::command::domain::FULL_USER_MESSAGE;
use crate::command::ports::SlackApiError;

/// Why an action stopped.
///
/// Display strings are shown to the commander, appended to the action's
/// failure message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The directory listing failed.
    #[error("{0}")]
    DirectoryFetch(SlackApiError),

    /// No directory entry matched the target.
    #[error("Unable to find user matching '{target}'.")]
    UserNotFound {
        /// Target text as the commander typed it.
        target: String,
    },

    /// The target is a full member.
    #[error("{}", FULL_USER_MESSAGE)]
    FullUser,

    /// The invitee's email domain is configured as uninvitable.
    #[error("{message}")]
    UninvitableDomain {
        /// Configured rejection message.
        message: String,
    },

    /// Invite arguments could not be parsed.
    #[error("Usage: {verb} <first name> <last name> <email address>")]
    MalformedInvite {
        /// Verb the commander used.
        verb: String,
    },

    /// The disable or invite call failed.
    #[error("{0}")]
    Mutation(SlackApiError),
}

/// Failed execution: the rendered failure message plus its cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ActionFailure {
    message: String,
    #[source]
    error: ActionError,
}

impl ActionFailure {
    /// Pairs a rendered failure message with its cause.
    #[must_use]
    pub const fn new(message: String, error: ActionError) -> Self {
        Self { message, error }
    }

    /// Returns the message to show the commander.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying error.
    #[must_use]
    pub const fn error(&self) -> &ActionError {
        &self.error
    }

    /// Splits the failure into its message and error.
    #[must_use]
    pub fn into_parts(self) -> (String, ActionError) {
        (self.message, self.error)
    }
}
