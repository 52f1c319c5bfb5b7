//! Fallback for unrecognised verbs.

use crate::command::domain::ActionContext;

use super::InviteKind;

/// Replies with usage text; never touches the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help {
    context: ActionContext,
}

impl Help {
    pub(super) const fn new(context: ActionContext) -> Self {
        Self { context }
    }

    /// Returns the invocation metadata.
    #[must_use]
    pub const fn context(&self) -> &ActionContext {
        &self.context
    }

    pub(super) fn usage() -> String {
        let invite = |kind: InviteKind| {
            format!(
                "  {} <first name> <last name> <email address>",
                kind.verb()
            )
        };
        [
            "Available commands:".to_owned(),
            "  disable-user <@handle|email address>".to_owned(),
            invite(InviteKind::Guest),
            invite(InviteKind::Restricted),
        ]
        .join("\n")
    }
}
