//! Slash-command user administration.
//!
//! This module implements the command engine: an authorised commander types
//! `disable-user`, `invite-guest`, or `invite-restricted` and the engine
//! resolves the target, applies eligibility policy, makes exactly one
//! workspace call, and renders success, failure, and audit messages. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The action engine in [`actions`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod actions;
pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
