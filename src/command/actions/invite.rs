//! `invite-guest` and `invite-restricted <first> <last> <email>`.

use crate::command::domain::{ActionContext, Invitee, is_uninvitable};
use crate::command::ports::{SlackApi, SlackApiResult};
use crate::config::Config;

use super::ActionError;

/// Account tier an invitation creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InviteKind {
    /// Single-channel guest (ultra-restricted).
    Guest,
    /// Multi-channel guest (restricted).
    Restricted,
}

impl InviteKind {
    /// Verb that selects this kind.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Guest => "invite-guest",
            Self::Restricted => "invite-restricted",
        }
    }

    const fn account(self) -> &'static str {
        match self {
            Self::Guest => "a guest",
            Self::Restricted => "a restricted account",
        }
    }

    const fn audit_account(self) -> &'static str {
        match self {
            Self::Guest => "a single-channel guest",
            Self::Restricted => "a restricted account",
        }
    }

    fn send(
        self,
        api: &dyn SlackApi,
        team_name: &str,
        channel_id: &str,
        invitee: &Invitee,
    ) -> SlackApiResult<()> {
        let Invitee {
            first_name,
            last_name,
            email,
        } = invitee;
        match self {
            Self::Guest => api.invite_guest(team_name, channel_id, first_name, last_name, email),
            Self::Restricted => {
                api.invite_restricted(team_name, channel_id, first_name, last_name, email)
            }
        }
    }
}

/// Invites a new account into the channel the command was issued in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    context: ActionContext,
    kind: InviteKind,
    invitee: Option<Invitee>,
}

impl Invite {
    pub(super) fn new(context: ActionContext, kind: InviteKind) -> Self {
        let invitee = Invitee::parse(context.command().argument());
        Self {
            context,
            kind,
            invitee,
        }
    }

    /// Returns the invocation metadata.
    #[must_use]
    pub const fn context(&self) -> &ActionContext {
        &self.context
    }

    /// Returns the account tier.
    #[must_use]
    pub const fn kind(&self) -> InviteKind {
        self.kind
    }

    /// Returns the parsed invitee, or `None` when the arguments were malformed.
    #[must_use]
    pub const fn invitee(&self) -> Option<&Invitee> {
        self.invitee.as_ref()
    }

    pub(super) fn run(&self, config: &Config, api: &dyn SlackApi) -> Result<(), ActionError> {
        let Some(invitee) = &self.invitee else {
            tracing::info!(verb = self.kind.verb(), "malformed-invite");
            return Err(ActionError::MalformedInvite {
                verb: self.kind.verb().to_owned(),
            });
        };

        if is_uninvitable(&invitee.email, config.uninvitable_domain()) {
            tracing::warn!(email = %invitee.email, "uninvitable-domain-rejected");
            return Err(ActionError::UninvitableDomain {
                message: config.uninvitable_domain_message().to_owned(),
            });
        }

        self.kind
            .send(
                api,
                config.slack_team_name(),
                self.context.channel().id(),
                invitee,
            )
            .map_err(|error| {
                tracing::error!(verb = self.kind.verb(), %error, "failed-sending-invite");
                ActionError::Mutation(error)
            })?;

        tracing::info!(verb = self.kind.verb(), email = %invitee.email, "sent-invite");
        Ok(())
    }

    /// Names the invitee, or quotes the raw arguments when they did not parse.
    fn invitee_label(&self) -> String {
        self.invitee.as_ref().map_or_else(
            || format!("'{}'", self.context.command().argument()),
            |invitee| {
                format!(
                    "{} {} ({})",
                    invitee.first_name, invitee.last_name, invitee.email
                )
            },
        )
    }

    fn channel_name(&self, api: &dyn SlackApi) -> String {
        self.context
            .channel()
            .resolve_name(|id| api.resolve_channel_name(id))
    }

    pub(super) fn success_message(&self, api: &dyn SlackApi) -> String {
        format!(
            "@{} invited {} as {} to '{}'",
            self.context.commander_name(),
            self.invitee_label(),
            self.kind.account(),
            self.channel_name(api),
        )
    }

    pub(super) fn failure_message(&self, api: &dyn SlackApi, error: &ActionError) -> String {
        format!(
            "Failed to invite {} as {} to '{}': {error}",
            self.invitee_label(),
            self.kind.account(),
            self.channel_name(api),
        )
    }

    pub(super) fn audit_message(&self, api: &dyn SlackApi) -> String {
        format!(
            "@{} invited {} as {} to '{}' ({})",
            self.context.commander_name(),
            self.invitee_label(),
            self.kind.audit_account(),
            self.channel_name(api),
            self.context.channel().id(),
        )
    }
}
