//! Invitation integration tests against the in-memory workspace.

use concierge::command::actions::{Action, ActionError};
use concierge::command::adapters::memory::{
    Capability, InMemorySlackWorkspace, Invitation, InvitationTier,
};
use concierge::command::domain::Channel;
use concierge::config::Config;
use rstest::rstest;

use super::helpers::{TEAM_NAME, channel, config, run, workspace};

#[rstest]
#[case("invite-guest", InvitationTier::Guest, "a guest")]
#[case("invite-restricted", InvitationTier::Restricted, "a restricted account")]
fn invitation_is_sent_for_each_tier(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
    #[case] verb: &str,
    #[case] tier: InvitationTier,
    #[case] account: &str,
) {
    let reply = run(
        &config,
        &workspace,
        channel,
        &format!("{verb} Jane Doe jane@example.com"),
    )
    .expect("invitation should succeed");

    assert_eq!(
        reply,
        format!(
            "@commander-name invited Jane Doe (jane@example.com) as {account} to 'channel-name'"
        )
    );
    assert_eq!(
        workspace.invitations(),
        vec![Invitation {
            tier,
            team_name: TEAM_NAME.to_owned(),
            channel_id: "channel-id".to_owned(),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            email: "jane@example.com".to_owned(),
        }]
    );
}

#[rstest]
fn uninvitable_domain_is_refused(
    config: Config,
    channel: Channel,
    workspace: InMemorySlackWorkspace,
) {
    let failure = run(
        &config,
        &workspace,
        channel,
        "invite-guest Jane Doe jane@Uninvitable-Domain.com",
    )
    .expect_err("uninvitable domain should be refused");

    assert!(matches!(failure.error(), ActionError::UninvitableDomain { .. }));
    assert!(failure.message().ends_with(": uninvitable-domain-message"));
    assert!(workspace.invitations().is_empty());
}

#[rstest]
fn unregistered_channel_name_is_resolved_through_the_workspace(
    config: Config,
    workspace: InMemorySlackWorkspace,
) {
    workspace
        .add_channel("C42", "general")
        .expect("channel registration should succeed");
    let action = Action::new(
        Channel::with_id("C42"),
        "commander-name",
        "commander-id",
        "invite-restricted Jane Doe jane@example.com",
    );

    assert_eq!(
        action.audit_message(&workspace).as_deref(),
        Some(
            "@commander-name invited Jane Doe (jane@example.com) as a restricted account \
             to 'general' (C42)"
        )
    );
    assert!(
        run(&config, &workspace, Channel::with_id("C42"), action.context().text())
            .expect("invitation should succeed")
            .ends_with("to 'general'")
    );
}

#[rstest]
fn unresolvable_channel_falls_back_to_its_id(
    config: Config,
    workspace: InMemorySlackWorkspace,
) {
    workspace
        .fail(Capability::InviteGuest, "already_invited")
        .expect("failure injection should succeed");

    let failure = run(
        &config,
        &workspace,
        Channel::with_id("C404"),
        "invite-guest Jane Doe jane@example.com",
    )
    .expect_err("rejected invite should fail");

    assert_eq!(
        failure.message(),
        "Failed to invite Jane Doe (jane@example.com) as a guest to 'C404': already_invited"
    );
}
