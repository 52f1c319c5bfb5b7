//! Audit records for mutating actions.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::ActionContext;

/// Whether the audited action completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// The external mutation succeeded.
    Succeeded,
    /// The action stopped before or during the mutation.
    Failed,
}

/// Timestamped audit record for one action invocation.
///
/// # Examples
///
/// ```rust
/// use concierge::command::domain::{ActionContext, AuditEntry, AuditOutcome, Channel};
/// use mockable::DefaultClock;
///
/// let context = ActionContext::new(
///     Channel::new("general", "C1"),
///     "admin",
///     "U0",
///     "disable-user @tsmith",
/// );
/// let entry = AuditEntry::new(
///     &context,
///     "@admin disabled user @tsmith",
///     AuditOutcome::Succeeded,
///     &DefaultClock,
/// );
/// assert_eq!(entry.channel_id, "C1");
/// assert_eq!(entry.error, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// User ID of the commander.
    pub commander_id: String,
    /// Display name of the commander.
    pub commander_name: String,
    /// Channel the command was issued in.
    pub channel_id: String,
    /// Rendered audit message.
    pub message: String,
    /// Outcome of the action.
    pub outcome: AuditOutcome,
    /// Failure text when the action failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the record was created.
    pub occurred_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates an audit record stamped with the clock's current time.
    #[must_use]
    pub fn new(
        context: &ActionContext,
        message: impl Into<String>,
        outcome: AuditOutcome,
        clock: &impl Clock,
    ) -> Self {
        Self {
            commander_id: context.commander_id().to_owned(),
            commander_name: context.commander_name().to_owned(),
            channel_id: context.channel().id().to_owned(),
            message: message.into(),
            outcome,
            error: None,
            occurred_at: clock.utc(),
        }
    }

    /// Marks the record failed and attaches the failure text.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.outcome = AuditOutcome::Failed;
        self.error = Some(error.into());
        self
    }

    /// Returns `true` for successful actions.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, AuditOutcome::Succeeded)
    }
}
