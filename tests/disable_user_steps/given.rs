//! Given steps for slash command BDD scenarios.

use super::world::CommandWorld;
use concierge::command::{adapters::memory::Capability, domain::UserRecord};
use rstest_bdd_macros::given;

#[given(r#"a restricted user "{handle}" with id "{id}""#)]
fn restricted_user(
    world: &mut CommandWorld,
    handle: String,
    id: String,
) -> Result<(), eyre::Report> {
    world
        .workspace
        .add_users([UserRecord::new(id).with_name(handle).restricted(true)])
        .map_err(|err| eyre::eyre!("seeding restricted user failed: {err}"))
}

#[given(r#"an ultra-restricted user "{handle}" with id "{id}""#)]
fn ultra_restricted_user(
    world: &mut CommandWorld,
    handle: String,
    id: String,
) -> Result<(), eyre::Report> {
    world
        .workspace
        .add_users([UserRecord::new(id).with_name(handle).ultra_restricted(true)])
        .map_err(|err| eyre::eyre!("seeding ultra-restricted user failed: {err}"))
}

#[given(r#"a full member "{handle}" with id "{id}""#)]
fn full_member(world: &mut CommandWorld, handle: String, id: String) -> Result<(), eyre::Report> {
    world
        .workspace
        .add_users([UserRecord::new(id).with_name(handle)])
        .map_err(|err| eyre::eyre!("seeding full member failed: {err}"))
}

#[given(r#"the directory fails with "{message}""#)]
fn directory_fails(world: &mut CommandWorld, message: String) -> Result<(), eyre::Report> {
    world
        .workspace
        .fail(Capability::ListUsers, message)
        .map_err(|err| eyre::eyre!("injecting directory failure failed: {err}"))
}
