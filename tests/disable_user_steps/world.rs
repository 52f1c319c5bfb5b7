//! Shared world state for slash command BDD scenarios.

use std::sync::Arc;

use concierge::command::{
    adapters::memory::InMemorySlackWorkspace,
    domain::Channel,
    services::{CommandOutcome, CommandRequest, CommandService},
};
use concierge::config::Config;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestCommandService = CommandService<InMemorySlackWorkspace, DefaultClock>;

/// Scenario world for slash command behaviour tests.
pub struct CommandWorld {
    /// Workspace the service talks to; shares state with the service.
    pub workspace: InMemorySlackWorkspace,
    /// The command service under test.
    pub service: TestCommandService,
    /// Outcome of the last handled command.
    pub last_outcome: Option<CommandOutcome>,
}

impl CommandWorld {
    /// Creates a world with an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        let workspace = InMemorySlackWorkspace::new();
        let config = Config::new(
            "slack-auth-token",
            "/slack-slash-command",
            "slack-team-name",
            "slack-user-id",
            "audit-log-channel-id",
            "uninvitable-domain.com",
            "uninvitable-domain-message",
        );
        let service = CommandService::new(
            Arc::new(config),
            Arc::new(workspace.clone()),
            Arc::new(DefaultClock),
        );
        Self {
            workspace,
            service,
            last_outcome: None,
        }
    }

    /// Handles `text` as issued by the scenario commander.
    pub fn run(&mut self, text: &str) {
        let request = CommandRequest::new(
            Channel::new("channel-name", "channel-id"),
            "commander-name",
            "commander-id",
            text,
        );
        self.last_outcome = Some(self.service.handle(request));
    }

    /// Returns the last outcome or an error when no command ran.
    ///
    /// # Errors
    ///
    /// Fails when no `When` step has run yet.
    pub fn outcome(&self) -> Result<&CommandOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no command has been handled in this scenario"))
    }
}

impl Default for CommandWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CommandWorld {
    CommandWorld::default()
}
