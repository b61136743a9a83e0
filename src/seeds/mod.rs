//! Seed data
//!
//! This module provides the records a Konga installation is seeded with.
//! Persisting them is left to the caller.

pub mod kong_node;

pub use kong_node::{default_kong_node_specs, default_kong_nodes, load_kong_nodes};
