//! Command actions: the engine that turns command text into one workspace
//! mutation and three renderings of its outcome.
//!
//! [`Action`] is a closed set of variants selected through a verb table.
//! Construction never fails; argument problems surface from
//! [`Action::execute`]. Every variant can render its success, failure, and
//! (where auditable) audit messages from its own fields plus the outcome, so
//! callers can report any failure point uniformly.
//!
//! # Example
//!
//! ```
//! use concierge::command::actions::{Action, ActionKind};
//! use concierge::command::domain::Channel;
//!
//! let action = Action::new(
//!     Channel::new("general", "C1"),
//!     "admin",
//!     "U0",
//!     "disable-user @tsmith",
//! );
//! assert_eq!(action.kind(), ActionKind::DisableUser);
//! ```

mod disable_user;
mod error;
mod help;
mod invite;

pub use disable_user::DisableUser;
pub use error::{ActionError, ActionFailure};
pub use help::Help;
pub use invite::{Invite, InviteKind};

use tracing::Span;

use crate::command::domain::{ActionContext, Channel};
use crate::command::ports::SlackApi;
use crate::config::Config;

/// Discriminant of [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// `disable-user`
    DisableUser,
    /// `invite-guest`
    InviteGuest,
    /// `invite-restricted`
    InviteRestricted,
    /// Anything else.
    Help,
}

/// Verb table. Adding an action kind means adding a row and a variant.
const VERBS: [(&str, ActionKind); 3] = [
    ("disable-user", ActionKind::DisableUser),
    ("invite-guest", ActionKind::InviteGuest),
    ("invite-restricted", ActionKind::InviteRestricted),
];

impl ActionKind {
    /// Selects the kind for `verb`, falling back to [`ActionKind::Help`].
    #[must_use]
    pub fn from_verb(verb: &str) -> Self {
        VERBS
            .iter()
            .find(|(candidate, _)| *candidate == verb)
            .map_or(Self::Help, |(_, kind)| *kind)
    }

    /// Returns the verb that selects this kind, if any.
    #[must_use]
    pub fn verb(self) -> Option<&'static str> {
        VERBS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(verb, _)| *verb)
    }
}

/// One command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Disable a restricted account.
    DisableUser(DisableUser),
    /// Invite a single-channel guest.
    InviteGuest(Invite),
    /// Invite a restricted account.
    InviteRestricted(Invite),
    /// Show usage.
    Help(Help),
}

impl Action {
    /// Builds the action selected by the verb in `text`.
    ///
    /// Arguments are parsed here but never rejected; malformed input is
    /// reported by [`Action::execute`].
    #[must_use]
    pub fn new(
        channel: Channel,
        commander_name: impl Into<String>,
        commander_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::from_context(ActionContext::new(
            channel,
            commander_name,
            commander_id,
            text,
        ))
    }

    /// Builds the action selected by the verb in `context`.
    #[must_use]
    pub fn from_context(context: ActionContext) -> Self {
        match ActionKind::from_verb(context.command().verb()) {
            ActionKind::DisableUser => Self::DisableUser(DisableUser::new(context)),
            ActionKind::InviteGuest => Self::InviteGuest(Invite::new(context, InviteKind::Guest)),
            ActionKind::InviteRestricted => {
                Self::InviteRestricted(Invite::new(context, InviteKind::Restricted))
            }
            ActionKind::Help => Self::Help(Help::new(context)),
        }
    }

    /// Returns the variant discriminant.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::DisableUser(_) => ActionKind::DisableUser,
            Self::InviteGuest(_) => ActionKind::InviteGuest,
            Self::InviteRestricted(_) => ActionKind::InviteRestricted,
            Self::Help(_) => ActionKind::Help,
        }
    }

    /// Returns the invocation metadata.
    #[must_use]
    pub const fn context(&self) -> &ActionContext {
        match self {
            Self::DisableUser(action) => action.context(),
            Self::InviteGuest(action) | Self::InviteRestricted(action) => action.context(),
            Self::Help(action) => action.context(),
        }
    }

    /// Runs the action once inside `span`.
    ///
    /// At most one mutating workspace call is made. Calling this twice
    /// repeats the mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ActionFailure`] carrying the rendered failure message and
    /// the [`ActionError`] of whichever step stopped the action.
    pub fn execute(
        &self,
        config: &Config,
        api: &dyn SlackApi,
        span: &Span,
    ) -> Result<String, ActionFailure> {
        let _entered = span.enter();
        let outcome = match self {
            Self::DisableUser(action) => action.run(config, api),
            Self::InviteGuest(action) | Self::InviteRestricted(action) => action.run(config, api),
            Self::Help(_) => Ok(()),
        };

        outcome
            .map(|()| self.success_message(api))
            .map_err(|error| ActionFailure::new(self.failure_message(api, &error), error))
    }

    /// Renders the message shown after a successful run.
    #[must_use]
    pub fn success_message(&self, api: &dyn SlackApi) -> String {
        match self {
            Self::DisableUser(action) => action.success_message(),
            Self::InviteGuest(action) | Self::InviteRestricted(action) => {
                action.success_message(api)
            }
            Self::Help(_) => Help::usage(),
        }
    }

    /// Renders the message shown after a failed run.
    #[must_use]
    pub fn failure_message(&self, api: &dyn SlackApi, error: &ActionError) -> String {
        match self {
            Self::DisableUser(action) => action.failure_message(error),
            Self::InviteGuest(action) | Self::InviteRestricted(action) => {
                action.failure_message(api, error)
            }
            Self::Help(_) => Help::usage(),
        }
    }

    /// Renders the audit-log message, or `None` for non-auditable actions.
    ///
    /// The text does not depend on whether the action has run.
    #[must_use]
    pub fn audit_message(&self, api: &dyn SlackApi) -> Option<String> {
        match self {
            Self::DisableUser(action) => Some(action.audit_message()),
            Self::InviteGuest(action) | Self::InviteRestricted(action) => {
                Some(action.audit_message(api))
            }
            Self::Help(_) => None,
        }
    }
}
