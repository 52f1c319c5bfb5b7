//! Service layer that runs one slash command end to end.
//!
//! Provides [`CommandService`], which builds the [`Action`] for a request,
//! executes it inside a tracing span, publishes the audit message for
//! successful mutations, and returns the reply for the front end to post.

use std::sync::Arc;

use mockable::Clock;

use crate::command::actions::{Action, ActionError};
use crate::command::domain::{ActionContext, AuditEntry, AuditOutcome, Channel};
use crate::command::ports::SlackApi;
use crate::config::Config;

/// A slash-command payload as received by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    channel: Channel,
    commander_name: String,
    commander_id: String,
    text: String,
}

impl CommandRequest {
    /// Creates a request.
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
}

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    reply: String,
    error: Option<ActionError>,
    audit: Option<AuditEntry>,
}

impl CommandOutcome {
    /// Returns the text to send back to the commander.
    #[must_use]
    pub fn reply(&self) -> &str {
        &self.reply
    }

    /// Returns the error that stopped the action, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ActionError> {
        self.error.as_ref()
    }

    /// Returns `true` when the action completed.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the audit record for auditable actions.
    #[must_use]
    pub const fn audit(&self) -> Option<&AuditEntry> {
        self.audit.as_ref()
    }
}

/// Runs slash commands against a workspace.
#[derive(Clone)]
pub struct CommandService<A, C>
where
    A: SlackApi,
    C: Clock + Send + Sync,
{
    config: Arc<Config>,
    api: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> CommandService<A, C>
where
    A: SlackApi,
    C: Clock + Send + Sync,
{
    /// Creates a new command service.
    #[must_use]
    pub const fn new(config: Arc<Config>, api: Arc<A>, clock: Arc<C>) -> Self {
        Self { config, api, clock }
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handles one request.
    ///
    /// Never fails: action errors are folded into the reply and the
    /// returned [`CommandOutcome`]. A failure to post the audit message is
    /// logged and otherwise ignored.
    pub fn handle(&self, request: CommandRequest) -> CommandOutcome {
        let CommandRequest {
            channel,
            commander_name,
            commander_id,
            text,
        } = request;
        let context = ActionContext::new(channel, commander_name, commander_id, text);
        let span = tracing::info_span!(
            "slash-command",
            commander_id = %context.commander_id(),
            channel_id = %context.channel().id(),
            verb = %context.command().verb(),
        );
        let action = Action::from_context(context);

        let (reply, error) = match action.execute(&self.config, &*self.api, &span) {
            Ok(reply) => (reply, None),
            Err(failure) => {
                let (reply, error) = failure.into_parts();
                (reply, Some(error))
            }
        };

        let audit = action.audit_message(&*self.api).map(|message| {
            let mut entry = AuditEntry::new(
                action.context(),
                message,
                AuditOutcome::Succeeded,
                &*self.clock,
            );
            if let Some(cause) = &error {
                entry = entry.with_error(cause.to_string());
            }
            entry
        });

        if let Some(entry) = audit.as_ref().filter(|entry| entry.succeeded()) {
            span.in_scope(|| self.publish_audit(entry));
        }

        CommandOutcome {
            reply,
            error,
            audit,
        }
    }

    fn publish_audit(&self, entry: &AuditEntry) {
        let channel_id = self.config.audit_log_channel_id();
        if channel_id.is_empty() {
            return;
        }

        if let Err(error) = self.api.post_message(channel_id, &entry.message) {
            tracing::warn!(%error, audit_channel_id = %channel_id, "failed-posting-audit-message");
        }
    }
}
