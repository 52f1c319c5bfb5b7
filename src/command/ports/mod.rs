//! Port contracts for the command engine.
//!
//! Ports define infrastructure-agnostic interfaces used by actions and
//! services.

pub mod slack;

pub use slack::{SlackApi, SlackApiError, SlackApiResult};
