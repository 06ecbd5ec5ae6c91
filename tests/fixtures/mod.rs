// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-network-topology
//!
//! Deterministic inventories shared by the integration tests. Fixtures are
//! JSON text so the tests exercise the same input path as a real loader.

#![allow(dead_code)]

use cim_network_topology::Inventory;

/// A small homelab: one router, one switch, a hypervisor and a NAS
///
/// - `R1:lan` → `SW1:ge0` at 10 Gbps (uplink)
/// - `pve-01:eth0` → `SW1` via legacy `connectedTo` (hardware default 25)
/// - `nas:eth0` → `SW1:ge2` without a speed (falls back to 1)
/// - `SW1:ge3` → `R1` (reverse of the uplink, declared separately)
pub const HOMELAB_JSON: &str = r#"{
    "machines": [
        {
            "machineName": "pve-01",
            "ipAddress": "10.0.0.10",
            "role": "hypervisor",
            "operatingSystem": "Proxmox VE 8",
            "hardware": { "cpu": "EPYC 7302", "ram": "256GB", "networkPorts": 2, "networkPortSpeedGbps": 25, "gpu": "RTX A4000" },
            "software": { "vms": [
                { "name": "dns", "role": "resolver", "ipAddress": "10.0.0.53" },
                { "name": "k3s-01", "role": "kubernetes", "ipAddress": "10.0.0.61" }
            ] },
            "ports": [ { "portName": "eth0", "connectedTo": "SW1" }, { "portName": "eth1" } ]
        },
        {
            "machineName": "nas",
            "ipAddress": "10.0.0.20",
            "role": "storage",
            "operatingSystem": "TrueNAS SCALE",
            "hardware": { "cpu": "Xeon E-2236", "ram": "64GB", "networkPorts": 1 },
            "software": { "vms": [] },
            "ports": [ { "portName": "eth0", "connections": [ { "targetDevice": "SW1", "targetPort": "ge2", "connectionType": "storage" } ] } ]
        }
    ],
    "devices": [
        {
            "name": "R1",
            "ipAddress": "10.0.0.1",
            "type": "router",
            "notes": "edge router",
            "ports": [ { "portName": "lan", "speedGbps": 10, "connections": [ { "targetDevice": "SW1", "targetPort": "ge0", "connectionType": "uplink" } ] } ]
        },
        {
            "name": "SW1",
            "ipAddress": "10.0.0.2",
            "type": "switch",
            "ports": [
                { "portName": "ge0", "speedGbps": 10 },
                { "portName": "ge1" },
                { "portName": "ge2" },
                { "portName": "ge3", "speedGbps": 10, "connectedTo": "R1" }
            ]
        }
    ]
}"#;

/// Two devices named `SW1`
pub const DUPLICATE_NODE_JSON: &str = r#"{
    "devices": [
        { "name": "SW1", "ipAddress": "10.0.0.2", "type": "switch" },
        { "name": "SW1", "ipAddress": "10.0.0.3", "type": "switch" }
    ]
}"#;

/// A port declaring both `connectedTo` and `connections`
pub const BOTH_FORMS_JSON: &str = r#"{
    "devices": [
        { "name": "R1", "ipAddress": "10.0.0.1", "type": "router",
          "ports": [ { "portName": "lan", "connectedTo": "OLD-SW", "connections": [ { "targetDevice": "SW1", "speedGbps": 40 } ] } ] },
        { "name": "SW1", "ipAddress": "10.0.0.2", "type": "switch" }
    ]
}"#;

pub fn homelab() -> Inventory {
    Inventory::from_json(HOMELAB_JSON).expect("Invalid homelab fixture")
}
