//! Concierge: slash-command user administration for Slack workspaces.
//!
//! An authorised commander issues commands such as `disable-user @tsmith` or
//! `invite-guest Jane Doe jane@example.com`. Each command becomes an action
//! that resolves its target against the live user directory, enforces
//! eligibility policy, performs exactly one workspace call, and renders a
//! success, failure, and audit message.
//!
//! # Architecture
//!
//! Concierge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure command, directory, and policy types
//! - **Ports**: The [`command::ports::SlackApi`] capability trait
//! - **Adapters**: Concrete implementations of ports (in-memory workspace)
//!
//! # Modules
//!
//! - [`command`]: Command parsing, actions, and the command service
//! - [`config`]: Process-wide configuration loading

pub mod command;
pub mod config;
