//! Application services for the command engine.

mod dispatcher;

pub use dispatcher::{CommandOutcome, CommandRequest, CommandService};
