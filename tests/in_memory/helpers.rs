//! Shared test helpers for in-memory workspace integration tests.

use concierge::command::{
    actions::{Action, ActionFailure},
    adapters::memory::InMemorySlackWorkspace,
    domain::{Channel, UserRecord},
};
use concierge::config::Config;
use rstest::fixture;
use tracing::Span;

/// Team name every helper configuration uses.
pub const TEAM_NAME: &str = "slack-team-name";

/// Provides the configuration used across integration tests.
#[fixture]
pub fn config() -> Config {
    Config::new(
        "slack-auth-token",
        "/slack-slash-command",
        TEAM_NAME,
        "slack-user-id",
        "audit-log-channel-id",
        "uninvitable-domain.com",
        "uninvitable-domain-message",
    )
}

/// Provides the channel commands are issued from.
#[fixture]
pub fn channel() -> Channel {
    Channel::new("channel-name", "channel-id")
}

/// Provides a workspace with one user of each tier.
#[fixture]
pub fn workspace() -> InMemorySlackWorkspace {
    InMemorySlackWorkspace::with_users([
        UserRecord::new("U0001")
            .with_name("owner")
            .with_email("owner@example.com"),
        UserRecord::new("U1234")
            .with_name("tsmith")
            .with_email("tsmith@example.com")
            .restricted(true),
        UserRecord::new("U5678")
            .with_name("guest")
            .with_email("guest@example.com")
            .ultra_restricted(true),
    ])
}

/// Builds and executes `text` as the standard commander.
///
/// # Errors
///
/// Returns the action's [`ActionFailure`] when execution fails.
pub fn run(
    config: &Config,
    workspace: &InMemorySlackWorkspace,
    channel: Channel,
    text: &str,
) -> Result<String, ActionFailure> {
    Action::new(channel, "commander-name", "commander-id", text).execute(
        config,
        workspace,
        &Span::none(),
    )
}
