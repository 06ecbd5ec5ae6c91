// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Normalization

use cim_network_topology::{normalize, TopologyNode};
use proptest::prelude::*;

use super::strategies::inventory;

proptest! {
    /// Property: normalizing twice equals normalizing once
    #[test]
    fn prop_normalization_is_idempotent(raw in inventory()) {
        let once = normalize(raw);
        let twice = normalize(once.inventory().clone());

        prop_assert_eq!(twice.inventory(), once.inventory());
        prop_assert!(twice.superseded_legacy_targets().is_empty());
    }

    /// Property: every normalized port uses only the connection list
    #[test]
    fn prop_normalized_ports_are_canonical(raw in inventory()) {
        let normalized = normalize(raw);

        for node in normalized.inventory().nodes() {
            for port in node.ports() {
                prop_assert!(port.connected_to.is_none());
                prop_assert!(port.connections.is_some());
            }
        }
    }

    /// Property: a lone legacy target becomes exactly one connection to it
    #[test]
    fn prop_legacy_target_preserved(raw in inventory()) {
        let normalized = normalize(raw.clone());

        for (before, after) in raw.nodes().zip(normalized.inventory().nodes()) {
            for (port, normalized_port) in before.ports().iter().zip(after.ports()) {
                if let (Some(target), None) = (&port.connected_to, &port.connections) {
                    prop_assert_eq!(normalized_port.connections().len(), 1);
                    prop_assert_eq!(&normalized_port.connections()[0].target_device, target);
                }
            }
        }
    }

    /// Property: one superseded record per port that declared both forms
    #[test]
    fn prop_conflicts_are_all_recorded(raw in inventory()) {
        let conflicts = raw
            .nodes()
            .flat_map(|n| n.ports().iter())
            .filter(|p| p.has_conflicting_forms())
            .count();

        prop_assert_eq!(normalize(raw).superseded_legacy_targets().len(), conflicts);
    }
}
