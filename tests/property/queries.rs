// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Graph Queries

use cim_network_topology::{load_topology, Direction, PathResult, WeightMode};
use proptest::prelude::*;

use super::strategies::{inventory, valid_inventory};

const PROBES: &[&str] = &["R1", "SW1", "SW2", "pve-01", "nas", "ghost", "unknown"];

proptest! {
    /// Property: inventories with unique names, existing targets and valid
    /// speeds always load, with one node per entry and one edge per link
    #[test]
    fn prop_valid_inventories_always_load(raw in valid_inventory()) {
        let links: usize = raw
            .nodes()
            .flat_map(|n| n.ports().iter())
            .map(|p| match (&p.connected_to, &p.connections) {
                (_, Some(connections)) => connections.len(),
                (Some(_), None) => 1,
                (None, None) => 0,
            })
            .sum();
        let node_count = raw.node_count();

        let load = load_topology(raw).unwrap();
        prop_assert_eq!(load.fatal_findings().count(), 0);
        let graph = load.graph.as_ref();
        prop_assert!(graph.is_some());
        if let Some(graph) = graph {
            prop_assert_eq!(graph.node_count(), node_count);
            prop_assert_eq!(graph.edge_count(), links);
        }
    }

    /// Property: returned paths start at the source, end at the target and chain
    #[test]
    fn prop_paths_are_connected_chains(raw in inventory()) {
        let load = load_topology(raw).unwrap();
        let Some(graph) = load.graph else { return Ok(()); };

        for source in PROBES {
            for target in PROBES {
                for mode in [WeightMode::HopCount, WeightMode::Capacity] {
                    if let PathResult::Found(path) = graph.find_path(source, target, mode) {
                        let edges = path.edges();
                        if source == target {
                            prop_assert!(edges.is_empty());
                            continue;
                        }
                        prop_assert_eq!(edges[0].source_node.as_str(), *source);
                        prop_assert_eq!(edges[edges.len() - 1].target_node.as_str(), *target);
                        for pair in edges.windows(2) {
                            prop_assert_eq!(&pair[0].target_node, &pair[1].source_node);
                        }
                    }
                }
            }
        }
    }

    /// Property: both modes agree on reachability; BFS is never longer and
    /// the widest path is never narrower
    #[test]
    fn prop_modes_agree_on_reachability(raw in inventory()) {
        let load = load_topology(raw).unwrap();
        let Some(graph) = load.graph else { return Ok(()); };

        for source in PROBES {
            for target in PROBES {
                let hops = graph.find_path(source, target, WeightMode::HopCount);
                let widest = graph.find_path(source, target, WeightMode::Capacity);
                prop_assert_eq!(hops.is_found(), widest.is_found());

                if let (Some(h), Some(w)) = (hops.path(), widest.path()) {
                    prop_assert!(h.hop_count() <= w.hop_count());
                    if let (Some(hb), Some(wb)) = (h.bottleneck_gbps(), w.bottleneck_gbps()) {
                        prop_assert!(wb >= hb);
                    }
                }
            }
        }
    }

    /// Property: capacity in both directions is outgoing plus incoming minus self-loops
    #[test]
    fn prop_capacity_directions_add_up(raw in inventory()) {
        let load = load_topology(raw).unwrap();
        let Some(graph) = load.graph else { return Ok(()); };

        for node in PROBES {
            let out = graph.aggregate_capacity(node, Direction::Outgoing);
            let inc = graph.aggregate_capacity(node, Direction::Incoming);
            let both = graph.aggregate_capacity(node, Direction::Both);
            let loops: f64 = graph
                .neighbors(node, Direction::Outgoing)
                .iter()
                .filter(|e| e.is_self_loop())
                .map(|e| e.capacity_gbps)
                .sum();

            prop_assert!((both - (out + inc - loops)).abs() < 1e-9);
        }
    }
}
