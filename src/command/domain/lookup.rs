//! Resolution of command targets against a directory snapshot.

use super::UserRecord;

/// How a raw target token identifies a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTarget<'a> {
    /// `@handle`, stored without the prefix.
    Handle(&'a str),
    /// Anything else is treated as an email address.
    Email(&'a str),
}

impl<'a> UserTarget<'a> {
    /// Classifies a raw target token.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        raw.strip_prefix('@').map_or(Self::Email(raw), Self::Handle)
    }

    /// Returns `true` when `user` matches this target exactly.
    ///
    /// Handles only compare against the user's name and emails only against
    /// the profile email. Comparison is case-sensitive and an empty key
    /// never matches.
    #[must_use]
    pub fn matches(&self, user: &UserRecord) -> bool {
        match *self {
            Self::Handle(handle) => !handle.is_empty() && user.handle() == Some(handle),
            Self::Email(email) => !email.is_empty() && user.email() == Some(email),
        }
    }
}

/// Finds the first user in `directory` matching the raw `target` token.
///
/// A linear scan is fine at workspace directory sizes; a handle/email index
/// built once per fetch would be the drop-in replacement.
#[must_use]
pub fn find_user<'u>(target: &str, directory: &'u [UserRecord]) -> Option<&'u UserRecord> {
    let parsed = UserTarget::parse(target);
    directory.iter().find(|user| parsed.matches(user))
}
