//! In-memory adapters.

mod workspace;

pub use workspace::{
    Capability, DisabledUser, InMemorySlackWorkspace, Invitation, InvitationTier, PostedMessage,
};
