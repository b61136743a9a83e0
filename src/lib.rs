//! # Konga Seeds Library
//!
//! This library provides the default kong node seed for Konga, the
//! configuration and telemetry used by the seed dump binary, and the loader
//! for operator-supplied seed data sources.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod seeds;
pub mod telemetry;
