//! # Error Handling
//!
//! Errors raised while resolving the kong node seed set from a data-source file.
//! The built-in seed is infallible and never produces these.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading seed records from a data-source file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed data source {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed data source {path}: {source}")]
    ParseSource {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("seed data source {path} contains no kong nodes")]
    EmptySource { path: PathBuf },
    #[error("kong node at index {index} has a blank name")]
    BlankName { index: usize },
    #[error("kong node '{name}' has an invalid admin url '{value}': {source}")]
    InvalidAdminUrl {
        name: String,
        value: String,
        source: url::ParseError,
    },
    #[error("kong node '{name}' admin url must use http or https, got '{scheme}'")]
    UnsupportedAdminUrlScheme { name: String, scheme: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_node() {
        let error = SeedError::UnsupportedAdminUrlScheme {
            name: "edge".to_string(),
            scheme: "ftp".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "kong node 'edge' admin url must use http or https, got 'ftp'"
        );

        let error = SeedError::EmptySource {
            path: PathBuf::from("/etc/konga/nodes.json"),
        };
        assert!(error.to_string().contains("/etc/konga/nodes.json"));
    }
}
