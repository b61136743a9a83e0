//! Kong node seeding functionality
//!
//! This module provides the default kong node a fresh Konga installation
//! starts with, and resolves the seed set from an operator-supplied data
//! source file when one is configured.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use url::Url;

use crate::clock::Clock;
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::models::{KongNode, KongNodeSpec};

pub const DEFAULT_NODE_NAME: &str = "kong-gateway";
pub const DEFAULT_NODE_TYPE: &str = "default";
pub const DEFAULT_KONG_ADMIN_URL: &str = "http://kong:8001";
pub const DEFAULT_KONG_VERSION: &str = "3.4.x";

/// Returns the built-in kong node definitions, in seed order.
pub fn default_kong_node_specs() -> Vec<KongNodeSpec> {
    vec![KongNodeSpec {
        name: DEFAULT_NODE_NAME.to_string(),
        node_type: DEFAULT_NODE_TYPE.to_string(),
        kong_admin_url: DEFAULT_KONG_ADMIN_URL.to_string(),
        health_checks: true,
        health_check_details: true,
        kong_version: DEFAULT_KONG_VERSION.to_string(),
        active: true,
    }]
}

/// Builds the built-in kong node seed.
///
/// The clock is read once, so every record in the returned set carries the
/// same `created_at` and `updated_at`.
pub fn default_kong_nodes(clock: &dyn Clock) -> Vec<KongNode> {
    stamp(default_kong_node_specs(), clock)
}

/// Resolves the kong node seed set for `config`.
///
/// When `kong_node_source_file` is set, its nodes replace the built-in seed.
/// Otherwise the built-in seed is returned.
///
/// # Arguments
///
/// * `config` - Seed configuration
/// * `clock` - Time source used to stamp the records
///
/// # Returns
///
/// Returns the ordered seed set, or an error if the data source cannot be
/// read, parsed, or contains an invalid node
pub fn load_kong_nodes(
    config: &SeedConfig,
    clock: &dyn Clock,
) -> Result<Vec<KongNode>, SeedError> {
    let Some(path) = config.kong_node_source_file.as_deref() else {
        log::info!("Using built-in kong node seed");
        return Ok(default_kong_nodes(clock));
    };

    let specs = read_kong_node_specs(path)?;
    log::info!(
        "Loaded {} kong node(s) from seed data source {}",
        specs.len(),
        path.display()
    );
    Ok(stamp(specs, clock))
}

/// Parses a JSON array of kong node definitions.
pub fn parse_kong_node_specs(json: &str) -> Result<Vec<KongNodeSpec>, serde_json::Error> {
    serde_json::from_str(json)
}

fn read_kong_node_specs(path: &Path) -> Result<Vec<KongNodeSpec>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|source| SeedError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    let specs = parse_kong_node_specs(&contents).map_err(|source| SeedError::ParseSource {
        path: path.to_path_buf(),
        source,
    })?;

    if specs.is_empty() {
        return Err(SeedError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    validate_specs(path, &specs)?;
    Ok(specs)
}

// Names are not required to be unique; duplicates are only reported.
fn validate_specs(path: &Path, specs: &[KongNodeSpec]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for (index, spec) in specs.iter().enumerate() {
        validate_spec(index, spec)?;

        if !seen.insert(spec.name.as_str()) {
            log::warn!(
                "Kong node '{}' appears more than once in {}",
                spec.name,
                path.display()
            );
        }
    }
    Ok(())
}

fn validate_spec(index: usize, spec: &KongNodeSpec) -> Result<(), SeedError> {
    if spec.name.trim().is_empty() {
        return Err(SeedError::BlankName { index });
    }

    let url = Url::parse(&spec.kong_admin_url).map_err(|source| SeedError::InvalidAdminUrl {
        name: spec.name.clone(),
        value: spec.kong_admin_url.clone(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(SeedError::UnsupportedAdminUrlScheme {
            name: spec.name.clone(),
            scheme: scheme.to_string(),
        }),
    }
}

fn stamp(specs: Vec<KongNodeSpec>, clock: &dyn Clock) -> Vec<KongNode> {
    let now = clock.now();
    specs
        .into_iter()
        .map(|spec| KongNode::new(spec, now))
        .collect()
}
