//! When steps for slash command BDD scenarios.

use super::world::CommandWorld;
use rstest_bdd_macros::when;

#[when(r#"the commander runs "{text}""#)]
fn commander_runs(world: &mut CommandWorld, text: String) {
    world.run(&text);
}
