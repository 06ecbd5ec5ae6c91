// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory file source
//!
//! A missing file is not an error: the network is simply empty until the
//! file appears. Unreadable or malformed files are faults.

use std::path::Path;
use tracing::{debug, warn};

use crate::domain::Inventory;
use crate::errors::{TopologyError, TopologyResult};

/// Read an inventory from a JSON file
pub fn read_inventory(path: impl AsRef<Path>) -> TopologyResult<Inventory> {
    let path = path.as_ref();

    if !path.exists() {
        warn!(
            "Network data file not found at {}, using empty inventory",
            path.display()
        );
        return Ok(Inventory::default());
    }

    let bytes = std::fs::read(path).map_err(|source| TopologyError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    let inventory = Inventory::from_slice(&bytes)?;

    debug!(
        machines = inventory.machines.len(),
        devices = inventory.devices.len(),
        "Read inventory from {}",
        path.display()
    );
    Ok(inventory)
}
