//! Invocation metadata shared by every action kind.

use serde::{Deserialize, Serialize};

use super::{Channel, CommandText};

/// Who issued a command, where, and with what text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionContext {
    channel: Channel,
    commander_name: String,
    commander_id: String,
    text: String,
}

impl ActionContext {
    /// Captures the invocation metadata.
    #[must_use]
    pub fn new(
        channel: Channel,
        commander_name: impl Into<String>,
        commander_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            commander_name: commander_name.into(),
            commander_id: commander_id.into(),
            text: text.into(),
        }
    }

    /// Returns the channel the command was issued in.
    #[must_use]
    pub const fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Returns the commander's display name (no `@`).
    #[must_use]
    pub fn commander_name(&self) -> &str {
        &self.commander_name
    }

    /// Returns the commander's user ID.
    #[must_use]
    pub fn commander_id(&self) -> &str {
        &self.commander_id
    }

    /// Returns the raw command text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the raw command text.
    #[must_use]
    pub fn command(&self) -> CommandText {
        CommandText::parse(&self.text)
    }
}
