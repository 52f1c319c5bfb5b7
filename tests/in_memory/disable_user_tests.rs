//! Disable-user integration tests against the in-memory workspace.

use concierge::command::actions::ActionError;
use concierge::command::adapters::memory::{Capability, DisabledUser, InMemorySlackWorkspace};
use concierge::command::domain::Channel;
use concierge::config::Config;
use rstest::rstest;

use super::helpers::{TEAM_NAME, channel, config, run, workspace};

#[rstest]
#[case("@tsmith", "U1234")]
#[case("tsmith@example.com", "U1234")]
#[case("@guest", "U5678")]
#[case("guest@example.com", "U5678")]
fn restricted_tiers_are_disabled(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
    #[case] target: &str,
    #[case] user_id: &str,
) {
    let reply = run(&config, &workspace, channel, &format!("disable-user {target}"))
        .expect("restricted users can be disabled");

    assert_eq!(reply, format!("Successfully disabled user '{target}'"));
    assert_eq!(
        workspace.disabled_users(),
        vec![DisabledUser {
            team_name: TEAM_NAME.to_owned(),
            user_id: user_id.to_owned(),
        }]
    );
}

#[rstest]
fn full_member_is_left_alone(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
) {
    let failure = run(&config, &workspace, channel, "disable-user @owner")
        .expect_err("full members are protected");

    assert_eq!(failure.error(), &ActionError::FullUser);
    assert_eq!(
        failure.message(),
        "Failed to disable user '@owner': Full users cannot be disabled."
    );
    assert!(workspace.disabled_users().is_empty());
}

#[rstest]
fn unknown_handle_reports_not_found(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
) {
    let failure = run(&config, &workspace, channel, "disable-user @nobody")
        .expect_err("unknown handle should fail");

    assert_eq!(
        failure.message(),
        "Failed to disable user '@nobody': Unable to find user matching '@nobody'."
    );
    assert_eq!(workspace.directory_fetches(), 1);
}

#[rstest]
fn bare_handle_is_matched_against_emails_only(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
) {
    let failure = run(&config, &workspace, channel, "disable-user guest")
        .expect_err("a handle without '@' is treated as an email");

    assert_eq!(
        failure.error(),
        &ActionError::UserNotFound {
            target: "guest".to_owned(),
        }
    );
    assert!(workspace.disabled_users().is_empty());
}

#[rstest]
fn directory_outage_surfaces_api_error(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
) {
    workspace
        .fail(Capability::ListUsers, "ratelimited")
        .expect("failure injection should succeed");

    let failure = run(&config, &workspace, channel, "disable-user @tsmith")
        .expect_err("directory outage should fail");

    assert_eq!(
        failure.message(),
        "Failed to disable user '@tsmith': ratelimited"
    );
    assert!(workspace.disabled_users().is_empty());
}

#[rstest]
fn rejected_disable_call_surfaces_api_error(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
) {
    workspace
        .fail(Capability::DisableUser, "user_is_bot")
        .expect("failure injection should succeed");

    let failure = run(&config, &workspace, channel, "disable-user @tsmith")
        .expect_err("rejected disable should fail");

    assert!(matches!(failure.error(), ActionError::Mutation(_)));
    assert_eq!(
        failure.message(),
        "Failed to disable user '@tsmith': user_is_bot"
    );
}
