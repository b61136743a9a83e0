//! # Data Models
//!
//! This module contains the seed record types exposed by this crate.

pub mod kong_node;

pub use kong_node::{KongNode, KongNodeSpec};
