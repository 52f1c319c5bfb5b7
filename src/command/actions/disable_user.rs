//! `disable-user <@handle|email>`.

use crate::command::domain::{ActionContext, can_disable, find_user};
use crate::command::ports::SlackApi;
use crate::config::Config;

use super::ActionError;

/// Disables a restricted or ultra-restricted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisableUser {
    context: ActionContext,
    target: String,
}

impl DisableUser {
    pub(super) fn new(context: ActionContext) -> Self {
        let target = context.command().argument().to_owned();
        Self { context, target }
    }

    /// Returns the invocation metadata.
    #[must_use]
    pub const fn context(&self) -> &ActionContext {
        &self.context
    }

    /// Returns the target exactly as the commander typed it.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub(super) fn run(&self, config: &Config, api: &dyn SlackApi) -> Result<(), ActionError> {
        let directory = api.list_users().map_err(|error| {
            tracing::error!(%error, "directory-fetch-failed");
            ActionError::DirectoryFetch(error)
        })?;

        let Some(user) = find_user(&self.target, &directory) else {
            tracing::info!(target_user = %self.target, "user-not-found");
            return Err(ActionError::UserNotFound {
                target: self.target.clone(),
            });
        };

        if !can_disable(user) {
            tracing::warn!(user_id = %user.id, "full-user-rejected");
            return Err(ActionError::FullUser);
        }

        api.disable_user(config.slack_team_name(), &user.id)
            .map_err(|error| {
                tracing::error!(user_id = %user.id, %error, "failed-disabling-user");
                ActionError::Mutation(error)
            })?;

        tracing::info!(user_id = %user.id, "disabled-user");
        Ok(())
    }

    pub(super) fn success_message(&self) -> String {
        format!("Successfully disabled user '{}'", self.target)
    }

    pub(super) fn failure_message(&self, error: &ActionError) -> String {
        format!("Failed to disable user '{}': {error}", self.target)
    }

    pub(super) fn audit_message(&self) -> String {
        format!(
            "@{} disabled user {}",
            self.context.commander_name(),
            self.target
        )
    }
}
