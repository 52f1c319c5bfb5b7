//! Unit tests for the command module.
//!
//! Tests are organised by component: parsing, directory lookup, policy,
//! each action kind, message rendering, the in-memory adapter, and the
//! command service.


use mockall::mock;
use rstest::fixture;

use crate::command::domain::{Channel, UserRecord};
use crate::command::ports::{SlackApi, SlackApiResult};
use crate::config::Config;

mock! {
    pub Slack {}

    impl SlackApi for Slack {
        fn list_users(&self) -> SlackApiResult<Vec<UserRecord>>;
        fn disable_user(&self, team_name: &str, user_id: &str) -> SlackApiResult<()>;
        fn invite_guest(
            &self,
            team_name: &str,
            channel_id: &str,
            first_name: &str,
            last_name: &str,
            email: &str,
        ) -> SlackApiResult<()>;
        fn invite_restricted(
            &self,
            team_name: &str,
            channel_id: &str,
            first_name: &str,
            last_name: &str,
            email: &str,
        ) -> SlackApiResult<()>;
        fn resolve_channel_name(&self, channel_id: &str) -> SlackApiResult<String>;
        fn post_message(&self, channel_id: &str, text: &str) -> SlackApiResult<()>;
    }
}

#[fixture]
fn config() -> Config {
    Config::new(
        "slack-auth-token",
        "/slack-slash-command",
        "slack-team-name",
        "slack-user-id",
        "audit-log-channel-id",
        "uninvitable-domain.com",
        "uninvitable-domain-message",
    )
}

#[fixture]
fn channel() -> Channel {
    Channel::new("channel-name", "channel-id")
}

/// Mock whose directory listing always returns `users`.
fn slack_with_users(users: Vec<UserRecord>) -> MockSlack {
    let mut slack = MockSlack::new();
    slack
        .expect_list_users()
        .times(1)
        .returning(move || Ok(users.clone()));
    slack
}
