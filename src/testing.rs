// Copyright (c) 2025 - Cowboy AI, Inc.
//! Graph fixtures for unit tests

use crate::domain::{Connection, Inventory, NetworkDevice, Port};
use crate::graph::{build_graph, TopologyGraph};
use crate::normalizer::normalize;
use crate::validation::validate;

/// Build a graph of devices from `(source, target, gbps)` links
///
/// Devices are created in order of first appearance. Each link becomes its
/// own port on the source, so edges come out grouped by source device.
pub(crate) fn graph_from_links(links: &[(&str, &str, f64)]) -> TopologyGraph {
    let mut devices: Vec<NetworkDevice> = Vec::new();

    for (source, target, _) in links {
        for name in [source, target] {
            if !devices.iter().any(|d| d.name == *name) {
                devices.push(NetworkDevice::new(*name, "10.0.0.1", "switch"));
            }
        }
    }

    for (i, (source, target, gbps)) in links.iter().enumerate() {
        if let Some(device) = devices.iter_mut().find(|d| d.name == *source) {
            device.ports.push(
                Port::new(format!("p{}", i))
                    .with_connection(Connection::to_node(*target).with_speed(*gbps)),
            );
        }
    }

    let normalized = normalize(Inventory::new(vec![], devices));
    let report = validate(&normalized);
    build_graph(&normalized, &report).expect("fixture links must form a valid inventory")
}
