// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory generators
//!
//! Names are drawn from a small pool so duplicates, dangling references and
//! reciprocal links all show up regularly.

use cim_network_topology::{
    Connection, ConnectionType, Hardware, Inventory, Machine, NetworkDevice, Port,
};
use proptest::prelude::*;

const NODE_NAMES: &[&str] = &["R1", "SW1", "SW2", "pve-01", "nas", "ghost"];
const PORT_NAMES: &[&str] = &["eth0", "eth1", "ge0", "ge1"];

fn node_name() -> impl Strategy<Value = String> {
    prop::sample::select(NODE_NAMES).prop_map(str::to_string)
}

fn port_name() -> impl Strategy<Value = String> {
    prop::sample::select(PORT_NAMES).prop_map(str::to_string)
}

fn speed() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(prop_oneof![Just(1.0), Just(2.5), Just(10.0), Just(25.0), Just(100.0)])
}

fn connection_type() -> impl Strategy<Value = Option<ConnectionType>> {
    prop::option::of(prop_oneof![
        Just(ConnectionType::Uplink),
        Just(ConnectionType::Trunk),
        Just(ConnectionType::Access),
        Just(ConnectionType::Cluster),
        Just(ConnectionType::Storage),
        Just(ConnectionType::Management),
    ])
}

fn connection() -> impl Strategy<Value = Connection> {
    (node_name(), prop::option::of(port_name()), speed(), connection_type()).prop_map(
        |(target_device, target_port, speed_gbps, connection_type)| Connection {
            target_device,
            target_port,
            speed_gbps,
            connection_type,
        },
    )
}

fn port() -> impl Strategy<Value = Port> {
    (
        port_name(),
        speed(),
        prop::option::of(node_name()),
        prop::option::of(prop::collection::vec(connection(), 0..3)),
    )
        .prop_map(|(port_name, speed_gbps, connected_to, connections)| Port {
            port_name,
            speed_gbps,
            connected_to,
            connections,
        })
}

fn ports() -> impl Strategy<Value = Vec<Port>> {
    prop::collection::vec(port(), 0..4)
}

fn build_machine(name: String, default_speed: Option<f64>, ports: Vec<Port>) -> Machine {
    let mut hardware = Hardware::new("cpu", "ram", ports.len() as u32);
    hardware.network_port_speed_gbps = default_speed;
    let mut machine = Machine::new(name, "10.0.0.10", hardware);
    machine.ports = ports;
    machine
}

fn build_device(name: String, ports: Vec<Port>) -> NetworkDevice {
    let mut device = NetworkDevice::new(name, "10.0.0.1", "switch");
    device.ports = ports;
    device
}

fn machine() -> impl Strategy<Value = Machine> {
    (node_name(), speed(), ports())
        .prop_map(|(name, default_speed, ports)| build_machine(name, default_speed, ports))
}

fn device() -> impl Strategy<Value = NetworkDevice> {
    (node_name(), ports()).prop_map(|(name, ports)| build_device(name, ports))
}

/// Arbitrary, possibly invalid inventories
pub fn inventory() -> impl Strategy<Value = Inventory> {
    (
        prop::collection::vec(machine(), 0..3),
        prop::collection::vec(device(), 0..4),
    )
        .prop_map(|(machines, devices)| Inventory::new(machines, devices))
}

fn linked_connection(targets: Vec<String>) -> impl Strategy<Value = Connection> {
    (
        prop::sample::select(targets),
        prop::option::of(port_name()),
        speed(),
        connection_type(),
    )
        .prop_map(|(target_device, target_port, speed_gbps, connection_type)| Connection {
            target_device,
            target_port,
            speed_gbps,
            connection_type,
        })
}

fn linked_port(port_name: &'static str, targets: Vec<String>) -> impl Strategy<Value = Port> {
    (
        speed(),
        prop::option::of(prop::sample::select(targets.clone())),
        prop::option::of(prop::collection::vec(linked_connection(targets), 0..3)),
    )
        .prop_map(move |(speed_gbps, connected_to, connections)| Port {
            port_name: port_name.to_string(),
            speed_gbps,
            connected_to,
            connections,
        })
}

/// Distinct port names, each linking only to `targets`
fn linked_ports(targets: Vec<String>) -> impl Strategy<Value = Vec<Port>> {
    prop::sample::subsequence(PORT_NAMES, 0..=PORT_NAMES.len()).prop_flat_map(move |names| {
        names
            .into_iter()
            .map(|name| linked_port(name, targets.clone()))
            .collect::<Vec<_>>()
    })
}

/// Inventories with no fatal problem: distinct node and port names, every
/// target an existing node, every speed valid
///
/// Target ports may be unresolved and ports may carry both link forms;
/// both only produce advisories.
pub fn valid_inventory() -> impl Strategy<Value = Inventory> {
    prop::sample::subsequence(NODE_NAMES, 1..=NODE_NAMES.len())
        .prop_flat_map(|names| {
            let targets: Vec<String> = names.iter().map(|n| n.to_string()).collect();
            let nodes: Vec<_> = targets
                .iter()
                .map(|name| (Just(name.clone()), linked_ports(targets.clone()), speed()))
                .collect();
            (0..=targets.len(), nodes)
        })
        .prop_map(|(machine_count, nodes)| {
            let mut machines = Vec::new();
            let mut devices = Vec::new();
            for (i, (name, ports, default_speed)) in nodes.into_iter().enumerate() {
                if i < machine_count {
                    machines.push(build_machine(name, default_speed, ports));
                } else {
                    devices.push(build_device(name, ports));
                }
            }
            Inventory::new(machines, devices)
        })
}
