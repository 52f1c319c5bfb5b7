//! Channel where a slash command was issued.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Slack channel identified by its immutable ID.
///
/// The display name is optional. Callers that already know it (the slash
/// command payload carries `channel_name`) supply it up front; otherwise it
/// is resolved on demand through an injected resolver every time a message
/// is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Channel {
    /// Creates a channel with a known display name.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Creates a channel whose name must be resolved when rendering.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Returns the channel ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the caller-supplied display name, if any.
    #[must_use]
    pub fn known_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the display name, asking `resolve` when none was supplied.
    ///
    /// Resolution failures never propagate: the channel ID is returned as a
    /// placeholder and the failure is logged.
    pub fn resolve_name<E>(&self, resolve: impl FnOnce(&str) -> Result<String, E>) -> String
    where
        E: fmt::Display,
    {
        if let Some(name) = &self.name {
            return name.clone();
        }

        match resolve(&self.id) {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => self.id.clone(),
            Err(error) => {
                tracing::warn!(channel_id = %self.id, %error, "channel-name-lookup-failed");
                self.id.clone()
            }
        }
    }
}
