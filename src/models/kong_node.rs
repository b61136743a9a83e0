//! Kong node model
//!
//! A kong node describes the admin endpoint of a Kong gateway together with
//! the health-check flags and version tag a management UI needs to talk to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-independent definition of a kong node.
///
/// This is also the shape of an entry in a seed data-source file. Fields that
/// are omitted from a file entry fall back to the serde defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KongNodeSpec {
    /// Human-readable identifier, conventionally unique within a seed set
    pub name: String,

    /// Classification tag (e.g. `default`), interpreted by the consumer
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,

    /// URL of the Kong admin API
    pub kong_admin_url: String,

    #[serde(default)]
    pub health_checks: bool,

    #[serde(default)]
    pub health_check_details: bool,

    /// Free-form version descriptor, may contain wildcard segments (`3.4.x`)
    pub kong_version: String,

    #[serde(default)]
    pub active: bool,
}

fn default_node_type() -> String {
    "default".to_string()
}

/// A kong node stamped with its creation time.
///
/// Instances are immutable; every field is exposed through a read-only accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KongNode {
    #[serde(flatten)]
    spec: KongNodeSpec,

    #[serde(with = "iso8601")]
    created_at: DateTime<Utc>,

    #[serde(with = "iso8601")]
    updated_at: DateTime<Utc>,
}

impl KongNode {
    /// Stamps `spec` with `stamped_at` for both `created_at` and `updated_at`.
    pub fn new(spec: KongNodeSpec, stamped_at: DateTime<Utc>) -> Self {
        Self {
            spec,
            created_at: stamped_at,
            updated_at: stamped_at,
        }
    }

    pub fn spec(&self) -> &KongNodeSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn node_type(&self) -> &str {
        &self.spec.node_type
    }

    pub fn kong_admin_url(&self) -> &str {
        &self.spec.kong_admin_url
    }

    pub fn health_checks(&self) -> bool {
        self.spec.health_checks
    }

    pub fn health_check_details(&self) -> bool {
        self.spec.health_check_details
    }

    pub fn kong_version(&self) -> &str {
        &self.spec.kong_version
    }

    pub fn active(&self) -> bool {
        self.spec.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// `created_at` rendered as an ISO-8601 string.
    pub fn created_at_iso(&self) -> String {
        iso8601::format(&self.created_at)
    }

    /// `updated_at` rendered as an ISO-8601 string.
    pub fn updated_at_iso(&self) -> String {
        iso8601::format(&self.updated_at)
    }

    /// Returns true when both nodes share the same definition, ignoring timestamps.
    pub fn same_definition(&self, other: &KongNode) -> bool {
        self.spec == other.spec
    }
}

/// ISO-8601 (RFC 3339) timestamps in UTC with millisecond precision and a `Z` suffix.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(instant: &DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
