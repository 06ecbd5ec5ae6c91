// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for topology operations
//!
//! Only caller misuse ends up here. Problems in the inventory data itself
//! are reported as [`Finding`](crate::validation::Finding)s.

use std::path::PathBuf;
use thiserror::Error;

/// Faults that abort a topology call with no partial result
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Input did not match the inventory shape
    #[error("Malformed inventory: {0}")]
    MalformedInventory(#[from] serde_json::Error),

    /// Inventory source could not be read
    #[error("Failed to read inventory from {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Graph construction requested for an inventory with fatal findings
    #[error("Cannot build topology from an unusable inventory ({fatal_count} fatal findings)")]
    UnusableInventory { fatal_count: usize },

    /// The validation report passed to the builder was produced for a
    /// different inventory
    #[error("Validation report does not match inventory: {0}")]
    ReportMismatch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;
