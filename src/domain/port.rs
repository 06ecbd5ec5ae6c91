// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ports and Connection Declarations
//!
//! A port carries its connection data in one of two shapes:
//!
//! - `connectedTo`: a bare node name (legacy, single link)
//! - `connections`: a list of [`Connection`] records
//!
//! The normalizer collapses both into `connections`; after normalization
//! `connected_to` is always `None` and `connections` is always `Some`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a link in the topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Uplink,
    Trunk,
    Access,
    Cluster,
    Storage,
    Management,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionType::Uplink => "uplink",
            ConnectionType::Trunk => "trunk",
            ConnectionType::Access => "access",
            ConnectionType::Cluster => "cluster",
            ConnectionType::Storage => "storage",
            ConnectionType::Management => "management",
        };
        write!(f, "{}", label)
    }
}

/// A directed link declaration from the owning port to another node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Name of the target machine or device
    pub target_device: String,
    /// Port on the target, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_gbps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionType>,
}

impl Connection {
    /// Connection with only a target node, as produced from `connectedTo`
    pub fn to_node(target_device: impl Into<String>) -> Self {
        Self {
            target_device: target_device.into(),
            target_port: None,
            speed_gbps: None,
            connection_type: None,
        }
    }

    pub fn with_target_port(mut self, port: impl Into<String>) -> Self {
        self.target_port = Some(port.into());
        self
    }

    pub fn with_speed(mut self, gbps: f64) -> Self {
        self.speed_gbps = Some(gbps);
        self
    }

    pub fn with_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = Some(connection_type);
        self
    }
}

/// A named port on a machine or network device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub port_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_gbps: Option<f64>,
    /// Legacy single-target reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_to: Option<String>,
    /// Connection records
    ///
    /// An explicit JSON `null` reads the same as an omitted field, so a
    /// legacy target next to `"connections": null` is not a conflict. An
    /// empty list is present and supersedes the legacy target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<Connection>>,
}

impl Port {
    /// A declared port with no speed and no connections
    pub fn new(port_name: impl Into<String>) -> Self {
        Self {
            port_name: port_name.into(),
            speed_gbps: None,
            connected_to: None,
            connections: None,
        }
    }

    pub fn with_speed(mut self, gbps: f64) -> Self {
        self.speed_gbps = Some(gbps);
        self
    }

    pub fn with_connected_to(mut self, target: impl Into<String>) -> Self {
        self.connected_to = Some(target.into());
        self
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connections.get_or_insert_with(Vec::new).push(connection);
        self
    }

    /// Declared connection records (empty when the list is absent)
    ///
    /// Does not include the legacy `connected_to` target; read this after
    /// normalization to see every link of the port.
    pub fn connections(&self) -> &[Connection] {
        self.connections.as_deref().unwrap_or(&[])
    }

    /// True when both the legacy and the list form are present
    pub fn has_conflicting_forms(&self) -> bool {
        self.connected_to.is_some() && self.connections.is_some()
    }
}
