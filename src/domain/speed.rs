// Copyright (c) 2025 - Cowboy AI, Inc.
//! Link Speed Resolution
//!
//! Every edge gets an effective speed from the first declared value in:
//!
//! ```text
//! Connection.speedGbps → Port.speedGbps → Machine hardware default → 1
//! ```
//!
//! Network devices have no hardware default and fall through to 1. The
//! normalizer, validator and graph builder all go through this module.

use serde::{Deserialize, Serialize};

/// Speed assumed when nothing along the chain declares one
pub const UNIVERSAL_DEFAULT_SPEED_GBPS: f64 = 1.0;

/// Where an effective speed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedSource {
    Connection,
    Port,
    Hardware,
    Default,
}

/// An effective speed together with the link in the chain that supplied it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpeed {
    pub gbps: f64,
    pub source: SpeedSource,
}

/// Walk the fallback chain
pub fn resolve_speed(
    connection: Option<f64>,
    port: Option<f64>,
    hardware_default: Option<f64>,
) -> ResolvedSpeed {
    let (gbps, source) = match (connection, port, hardware_default) {
        (Some(gbps), _, _) => (gbps, SpeedSource::Connection),
        (None, Some(gbps), _) => (gbps, SpeedSource::Port),
        (None, None, Some(gbps)) => (gbps, SpeedSource::Hardware),
        (None, None, None) => (UNIVERSAL_DEFAULT_SPEED_GBPS, SpeedSource::Default),
    };
    ResolvedSpeed { gbps, source }
}

/// Effective speed in Gbps
pub fn effective_speed(
    connection: Option<f64>,
    port: Option<f64>,
    hardware_default: Option<f64>,
) -> f64 {
    resolve_speed(connection, port, hardware_default).gbps
}

/// A speed is usable when it is finite and non-negative
pub fn is_valid_speed(gbps: f64) -> bool {
    gbps.is_finite() && gbps >= 0.0
}

/// A declared speed that can serve as a default for something else
pub fn usable_default(declared: Option<f64>) -> Option<f64> {
    declared.filter(|gbps| is_valid_speed(*gbps))
}
