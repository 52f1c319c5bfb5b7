//! Slash-command text parsing.

use serde::{Deserialize, Serialize};

/// Command text split into its verb and the remaining argument text.
///
/// Parsing never fails. Unknown verbs are left for the dispatcher to
/// reject and a missing argument yields an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandText {
    verb: String,
    argument: String,
}

impl CommandText {
    /// Parses `"<verb> <argument...>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use concierge::command::domain::CommandText;
    ///
    /// let text = CommandText::parse("  disable-user   @tsmith ");
    /// assert_eq!(text.verb(), "disable-user");
    /// assert_eq!(text.argument(), "@tsmith");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let (verb, argument) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        Self {
            verb: verb.to_owned(),
            argument: argument.trim().to_owned(),
        }
    }

    /// Returns the verb token.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Returns everything after the verb, trimmed.
    #[must_use]
    pub fn argument(&self) -> &str {
        &self.argument
    }
}

/// Person named by an invite command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address the invitation is sent to.
    pub email: String,
}

impl Invitee {
    /// Parses `"<first> <last> <email>"`.
    ///
    /// Returns `None` unless there are exactly three tokens and the last one
    /// has a non-empty local part and domain around an `@`.
    #[must_use]
    pub fn parse(argument: &str) -> Option<Self> {
        let mut tokens = argument.split_whitespace();
        let (Some(first_name), Some(last_name), Some(email), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return None;
        };

        let (local, domain) = email.rsplit_once('@')?;
        if local.is_empty() || domain.is_empty() {
            return None;
        }

        Some(Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
        })
    }
}
