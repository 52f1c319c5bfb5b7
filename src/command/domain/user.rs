//! Directory user records.

use serde::{Deserialize, Serialize};

/// Profile fields attached to a directory user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A user as returned by the workspace directory listing.
///
/// `is_restricted` and `is_ultra_restricted` are independent flags. A record
/// with both flags false is a full member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque, stable user identifier (e.g. `U1234`).
    pub id: String,
    /// Handle without the leading `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Profile data.
    #[serde(default)]
    pub profile: UserProfile,
    /// Multi-channel guest flag.
    #[serde(default)]
    pub is_restricted: bool,
    /// Single-channel guest flag.
    #[serde(default)]
    pub is_ultra_restricted: bool,
}

impl UserRecord {
    /// Creates a full member with no handle or email.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the user handle.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the profile email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.profile.email = Some(email.into());
        self
    }

    /// Sets the restricted flag.
    #[must_use]
    pub const fn restricted(mut self, is_restricted: bool) -> Self {
        self.is_restricted = is_restricted;
        self
    }

    /// Sets the ultra-restricted flag.
    #[must_use]
    pub const fn ultra_restricted(mut self, is_ultra_restricted: bool) -> Self {
        self.is_ultra_restricted = is_ultra_restricted;
        self
    }

    /// Returns the handle, if the directory supplied one.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the profile email, if the directory supplied one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.profile.email.as_deref()
    }

    /// Returns `true` when neither restriction flag is set.
    #[must_use]
    pub const fn is_full_member(&self) -> bool {
        !self.is_restricted && !self.is_ultra_restricted
    }
}
