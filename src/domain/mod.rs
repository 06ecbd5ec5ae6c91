// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Inventory Domain Models
//!
//! Typed entities for a declarative network inventory: machines, network
//! devices, their ports, and the connections declared on those ports.
//!
//! # Entities
//!
//! - [`Machine`] - A host with hardware, software (VMs) and ports
//! - [`NetworkDevice`] - A switch, router or other appliance with ports
//! - [`Port`] - A named port owned by exactly one node
//! - [`Connection`] - A directed link declaration from a port to a node
//!
//! # Node Capability
//!
//! Machines and devices are both graph vertices. [`TopologyNode`] exposes
//! the shared view (name, address, ports) so later stages never branch on
//! the concrete kind except to report it.
//!
//! # Speeds
//!
//! Speeds are optional everywhere in the input. The resolution chain lives
//! in [`speed`] and is the only place defaults are applied.

pub mod device;
pub mod inventory;
pub mod machine;
pub mod port;
pub mod speed;

pub use device::NetworkDevice;
pub use inventory::{Inventory, NodeKind, TopologyNode};
pub use machine::{Hardware, Machine, Software, VirtualMachine};
pub use port::{Connection, ConnectionType, Port};
pub use speed::{ResolvedSpeed, SpeedSource, UNIVERSAL_DEFAULT_SPEED_GBPS};
