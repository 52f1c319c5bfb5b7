//! Domain model for slash-command user administration.
//!
//! The domain covers the pure parts of the command engine: command text
//! parsing, directory records and target lookup, eligibility policy, and the
//! audit record produced for every mutating action. Nothing in this module
//! talks to Slack; the actions in [`crate::command::actions`] combine these
//! types with the [`crate::command::ports::SlackApi`] port.

mod audit;
mod channel;
mod context;
mod lookup;
mod parser;
mod policy;
mod user;

pub use audit::{AuditEntry, AuditOutcome};
pub use channel::Channel;
pub use context::ActionContext;
pub use lookup::{UserTarget, find_user};
pub use parser::{CommandText, Invitee};
pub use policy::{FULL_USER_MESSAGE, can_disable, is_uninvitable};
pub use user::{UserProfile, UserRecord};
