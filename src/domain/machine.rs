// Copyright (c) 2025 - Cowboy AI, Inc.
//! Machine Entity
//!
//! A physical or virtual host in the inventory. Machines are the only nodes
//! that carry a hardware-level default port speed.

use serde::{Deserialize, Serialize};

use super::inventory::{NodeKind, TopologyNode};
use super::port::Port;

/// Hardware description of a machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    pub cpu: String,
    pub ram: String,
    /// Number of physical network ports
    pub network_ports: u32,
    /// Default speed for ports that do not declare their own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_port_speed_gbps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
}

/// Virtual machine hosted on a machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    pub name: String,
    pub role: String,
    pub ip_address: String,
}

/// Software running on a machine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    /// Hosted VMs, in declaration order
    #[serde(default)]
    pub vms: Vec<VirtualMachine>,
}

/// A machine in the inventory
///
/// Identity is `machine_name`, which must be unique across machines and
/// network devices combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub machine_name: String,
    pub ip_address: String,
    pub role: String,
    pub operating_system: String,
    #[serde(default)]
    pub software: Software,
    pub hardware: Hardware,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<Port>,
}

impl Machine {
    /// Create a machine with no ports and no VMs
    pub fn new(
        machine_name: impl Into<String>,
        ip_address: impl Into<String>,
        hardware: Hardware,
    ) -> Self {
        Self {
            machine_name: machine_name.into(),
            ip_address: ip_address.into(),
            role: String::new(),
            operating_system: String::new(),
            software: Software::default(),
            hardware,
            ports: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_operating_system(mut self, os: impl Into<String>) -> Self {
        self.operating_system = os.into();
        self
    }

    pub fn with_vm(mut self, vm: VirtualMachine) -> Self {
        self.software.vms.push(vm);
        self
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }
}

impl Hardware {
    pub fn new(cpu: impl Into<String>, ram: impl Into<String>, network_ports: u32) -> Self {
        Self {
            cpu: cpu.into(),
            ram: ram.into(),
            network_ports,
            network_port_speed_gbps: None,
            gpu: None,
        }
    }

    pub fn with_port_speed(mut self, gbps: f64) -> Self {
        self.network_port_speed_gbps = Some(gbps);
        self
    }

    pub fn with_gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }
}

impl TopologyNode for Machine {
    fn name(&self) -> &str {
        &self.machine_name
    }

    fn ip_address(&self) -> &str {
        &self.ip_address
    }

    fn ports(&self) -> &[Port] {
        &self.ports
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Machine
    }

    fn default_port_speed(&self) -> Option<f64> {
        self.hardware.network_port_speed_gbps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_deserializes_camel_case() {
        let json = r#"{
            "machineName": "pve-01",
            "ipAddress": "10.0.0.10",
            "role": "hypervisor",
            "operatingSystem": "Proxmox VE 8",
            "hardware": { "cpu": "EPYC 7302", "ram": "256GB", "networkPorts": 4, "networkPortSpeedGbps": 10 },
            "software": { "vms": [ { "name": "dns", "role": "resolver", "ipAddress": "10.0.0.53" } ] }
        }"#;

        let machine: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(machine.name(), "pve-01");
        assert_eq!(machine.default_port_speed(), Some(10.0));
        assert_eq!(machine.software.vms.len(), 1);
        assert!(machine.ports.is_empty());
        assert_eq!(machine.kind(), NodeKind::Machine);
    }

    #[test]
    fn test_missing_software_defaults_to_no_vms() {
        let json = r#"{
            "machineName": "nas",
            "ipAddress": "10.0.0.20",
            "role": "storage",
            "operatingSystem": "TrueNAS",
            "hardware": { "cpu": "Xeon", "ram": "64GB", "networkPorts": 2 }
        }"#;

        let machine: Machine = serde_json::from_str(json).unwrap();
        assert!(machine.software.vms.is_empty());
        assert_eq!(machine.default_port_speed(), None);
    }
}
