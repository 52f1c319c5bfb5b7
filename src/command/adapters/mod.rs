//! Adapter implementations for command engine ports.

pub mod memory;
