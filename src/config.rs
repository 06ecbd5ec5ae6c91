// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology loading configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{TopologyError, TopologyResult};

/// Default location of the inventory file
pub const DEFAULT_DATA_PATH: &str = "/data/network.json";

/// Configuration for loading topologies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Inventory file read by the file source
    pub data_path: PathBuf,

    /// Treat advisory findings as fatal
    pub strict_mode: bool,
}

impl TopologyConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            strict_mode: false,
        }
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load configuration from environment variables
    ///
    /// - `NETWORK_DATA_PATH` (default `/data/network.json`)
    /// - `TOPOLOGY_STRICT` (`true`/`false`, `1`/`0`; default `false`)
    pub fn from_env() -> TopologyResult<Self> {
        let data_path =
            std::env::var("NETWORK_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

        let strict_mode = match std::env::var("TOPOLOGY_STRICT") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                TopologyError::Configuration(format!(
                    "TOPOLOGY_STRICT must be true/false or 1/0, got '{}'",
                    value
                ))
            })?,
            Err(_) => false,
        };

        Ok(Self {
            data_path: PathBuf::from(data_path),
            strict_mode,
        })
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
