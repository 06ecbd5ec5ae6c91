// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Device Entity

use serde::{Deserialize, Serialize};

use super::inventory::{NodeKind, TopologyNode};
use super::port::Port;

/// A switch, router, firewall or other network appliance
///
/// `device_type` is free-form (e.g. "switch", "router"); the engine never
/// interprets it. Devices have no hardware-level port speed default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDevice {
    pub name: String,
    pub ip_address: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<Port>,
}

impl NetworkDevice {
    pub fn new(
        name: impl Into<String>,
        ip_address: impl Into<String>,
        device_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ip_address: ip_address.into(),
            device_type: device_type.into(),
            notes: None,
            ports: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }
}

impl TopologyNode for NetworkDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn ip_address(&self) -> &str {
        &self.ip_address
    }

    fn ports(&self) -> &[Port] {
        &self.ports
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Device
    }
}
