//! Error types for registry loading and league store persistence.
//!
//! Resolution and aggregation never fail; only configuration and file I/O do.

use std::path::PathBuf;
use thiserror::Error;

/// Registry construction failures. Raised once at load time, never during resolution.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("team label is empty")]
    EmptyLabel,

    #[error("duplicate team label {label:?}")]
    DuplicateLabel { label: String },

    #[error("teams {first:?} and {second:?} share base name {base:?} in the same division")]
    DuplicateBase {
        base: String,
        first: String,
        second: String,
    },

    #[error("alias {alias:?} points at unknown team {target:?}")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("failed to read team config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse team config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixture feed and league store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize league store: {0}")]
    Serialize(#[source] serde_json::Error),
}
