// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Normalization
//!
//! Rewrites every port into the canonical connection-list shape:
//!
//! - `connectedTo: "X"` alone becomes `connections: [{targetDevice: "X"}]`
//! - `connectedTo` together with `connections` keeps `connections`; the
//!   dropped legacy target is remembered so validation can report it
//! - neither present becomes an empty `connections` list
//!
//! Machine ports without a declared speed inherit the machine's hardware
//! default when that default is a usable speed. Connection speeds are left
//! alone; the graph builder resolves them through [`crate::domain::speed`].
//!
//! Normalization is pure and idempotent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{speed, Connection, Inventory, Port};

/// A legacy `connectedTo` value that lost to an explicit `connections` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersededLegacyTarget {
    pub node_name: String,
    pub port_name: String,
    pub legacy_target: String,
}

/// An inventory in canonical shape, plus what normalization had to drop
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInventory {
    inventory: Inventory,
    superseded: Vec<SupersededLegacyTarget>,
}

impl NormalizedInventory {
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Legacy targets discarded in favor of `connections`, in port order
    pub fn superseded_legacy_targets(&self) -> &[SupersededLegacyTarget] {
        &self.superseded
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }
}

/// Normalize a raw inventory
pub fn normalize(raw: Inventory) -> NormalizedInventory {
    let mut inventory = raw;
    let mut superseded = Vec::new();
    let mut synthesized = 0usize;

    for machine in &mut inventory.machines {
        let hardware_default = speed::usable_default(machine.hardware.network_port_speed_gbps);
        for port in &mut machine.ports {
            if port.speed_gbps.is_none() {
                port.speed_gbps = hardware_default;
            }
            synthesized += normalize_port(&machine.machine_name, port, &mut superseded);
        }
    }

    for device in &mut inventory.devices {
        for port in &mut device.ports {
            synthesized += normalize_port(&device.name, port, &mut superseded);
        }
    }

    debug!(
        nodes = inventory.node_count(),
        synthesized,
        superseded = superseded.len(),
        "Normalized inventory"
    );

    NormalizedInventory {
        inventory,
        superseded,
    }
}

/// Returns the number of connections synthesized from `connectedTo`
fn normalize_port(
    node_name: &str,
    port: &mut Port,
    superseded: &mut Vec<SupersededLegacyTarget>,
) -> usize {
    match (port.connected_to.take(), port.connections.is_some()) {
        (Some(legacy_target), true) => {
            superseded.push(SupersededLegacyTarget {
                node_name: node_name.to_string(),
                port_name: port.port_name.clone(),
                legacy_target,
            });
            0
        }
        (Some(legacy_target), false) => {
            port.connections = Some(vec![Connection::to_node(legacy_target)]);
            1
        }
        (None, _) => {
            port.connections.get_or_insert_with(Vec::new);
            0
        }
    }
}
