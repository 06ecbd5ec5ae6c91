// Copyright (c) 2025 - Cowboy AI, Inc.
//! Structural invariant checks
//!
//! Checks run as separate passes so the output order is stable:
//!
//! 1. Node names unique across machines and devices
//! 2. Port names unique within each node
//! 3. Every connection targets an existing node
//! 4. Every given target port exists on its target node
//! 5. No port declared both `connectedTo` and `connections`
//! 6. Every declared and effective speed is finite and non-negative

use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::finding::{Finding, FindingKind, Severity};
use crate::domain::speed::{self, SpeedSource};
use crate::domain::{Inventory, TopologyNode};
use crate::normalizer::NormalizedInventory;

/// Outcome of validating one inventory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// True when no finding is fatal
    pub fn is_usable(&self) -> bool {
        !self.findings.iter().any(Finding::is_fatal)
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn fatal(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_fatal())
    }

    pub fn advisories(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_advisory())
    }

    pub fn fatal_count(&self) -> usize {
        self.fatal().count()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

/// Invariant checker for normalized inventories
#[derive(Debug, Clone, Default)]
pub struct Validator {
    /// Promote advisory findings to fatal
    strict_mode: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Run every check and collect the findings
    pub fn validate(&self, normalized: &NormalizedInventory) -> ValidationReport {
        let inventory = normalized.inventory();
        let index = first_by_name(inventory);
        let mut findings = Vec::new();

        findings.extend(check_node_names(inventory));
        findings.extend(check_port_names(inventory));
        findings.extend(check_target_nodes(inventory, &index));
        findings.extend(check_target_ports(inventory, &index));
        findings.extend(check_legacy_coexistence(normalized));
        findings.extend(check_speeds(inventory));

        if self.strict_mode {
            for finding in &mut findings {
                finding.severity = Severity::Fatal;
            }
        }

        for finding in &findings {
            match finding.severity {
                Severity::Fatal => warn!("{}", finding),
                Severity::Advisory => debug!("{}", finding),
            }
        }

        let report = ValidationReport::new(findings);
        debug!(
            findings = report.findings().len(),
            fatal = report.fatal_count(),
            usable = report.is_usable(),
            "Validated inventory"
        );
        report
    }
}

/// Validate with default settings
pub fn validate(normalized: &NormalizedInventory) -> ValidationReport {
    Validator::new().validate(normalized)
}

/// First node for every name; later duplicates are reported, not indexed
fn first_by_name(inventory: &Inventory) -> HashMap<&str, &dyn TopologyNode> {
    let mut index = HashMap::with_capacity(inventory.node_count());
    for node in inventory.nodes() {
        index.entry(node.name()).or_insert(node);
    }
    index
}

fn check_node_names(inventory: &Inventory) -> Vec<Finding> {
    let mut seen: HashMap<&str, &dyn TopologyNode> = HashMap::new();
    let mut findings = Vec::new();

    for node in inventory.nodes() {
        match seen.get(node.name()) {
            Some(first) => findings.push(Finding::on_node(
                FindingKind::DuplicateNodeName,
                node.name(),
                format!(
                    "{} '{}' reuses the name of an earlier {}",
                    node.kind(),
                    node.name(),
                    first.kind()
                ),
            )),
            None => {
                seen.insert(node.name(), node);
            }
        }
    }
    findings
}

fn check_port_names(inventory: &Inventory) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in inventory.nodes() {
        let mut seen = HashSet::new();
        for port in node.ports() {
            if !seen.insert(port.port_name.as_str()) {
                findings.push(Finding::on_port(
                    FindingKind::DuplicatePortName,
                    node.name(),
                    &port.port_name,
                    format!("port '{}' is declared more than once", port.port_name),
                ));
            }
        }
    }
    findings
}

fn check_target_nodes(
    inventory: &Inventory,
    index: &HashMap<&str, &dyn TopologyNode>,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in inventory.nodes() {
        for port in node.ports() {
            for connection in port.connections() {
                if !index.contains_key(connection.target_device.as_str()) {
                    findings.push(Finding::on_port(
                        FindingKind::DanglingTargetReference,
                        node.name(),
                        &port.port_name,
                        format!(
                            "connection targets unknown node '{}'",
                            connection.target_device
                        ),
                    ));
                }
            }
        }
    }
    findings
}

fn check_target_ports(
    inventory: &Inventory,
    index: &HashMap<&str, &dyn TopologyNode>,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in inventory.nodes() {
        for port in node.ports() {
            for connection in port.connections() {
                let (Some(target_port), Some(target)) = (
                    connection.target_port.as_deref(),
                    index.get(connection.target_device.as_str()),
                ) else {
                    continue;
                };

                if target.port(target_port).is_none() {
                    findings.push(Finding::on_port(
                        FindingKind::UnresolvedTargetPort,
                        node.name(),
                        &port.port_name,
                        format!(
                            "target port '{}' not found on '{}'",
                            target_port, connection.target_device
                        ),
                    ));
                }
            }
        }
    }
    findings
}

fn check_legacy_coexistence(normalized: &NormalizedInventory) -> Vec<Finding> {
    normalized
        .superseded_legacy_targets()
        .iter()
        .map(|s| {
            Finding::on_port(
                FindingKind::LegacyAndModernConnectionBothPresent,
                &s.node_name,
                &s.port_name,
                format!(
                    "both connectedTo ('{}') and connections are set; using connections",
                    s.legacy_target
                ),
            )
        })
        .collect()
}

/// Checks the effective speed of every connection through the shared
/// fallback chain, attributing a bad value to the level that declared it.
/// Declared port and hardware speeds no connection reaches are checked too.
/// Each bad value yields one finding.
fn check_speeds(inventory: &Inventory) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in inventory.nodes() {
        let hardware_default = node.default_port_speed();
        let mut hardware_reported = false;

        for port in node.ports() {
            let mut port_reported = false;

            for connection in port.connections() {
                let resolved = speed::resolve_speed(
                    connection.speed_gbps,
                    port.speed_gbps,
                    hardware_default,
                );
                if speed::is_valid_speed(resolved.gbps) {
                    continue;
                }

                match resolved.source {
                    SpeedSource::Connection => findings.push(Finding::on_port(
                        FindingKind::NegativeOrInvalidSpeed,
                        node.name(),
                        &port.port_name,
                        format!(
                            "connection to '{}' has invalid speed {} Gbps",
                            connection.target_device, resolved.gbps
                        ),
                    )),
                    SpeedSource::Port if !port_reported => {
                        findings.push(invalid_port_speed(
                            node.name(),
                            &port.port_name,
                            resolved.gbps,
                        ));
                        port_reported = true;
                    }
                    SpeedSource::Hardware if !hardware_reported => {
                        findings.push(invalid_hardware_speed(node.name(), resolved.gbps));
                        hardware_reported = true;
                    }
                    _ => {}
                }
            }

            if let Some(gbps) = port.speed_gbps {
                if !port_reported && !speed::is_valid_speed(gbps) {
                    findings.push(invalid_port_speed(node.name(), &port.port_name, gbps));
                }
            }
        }

        if let Some(gbps) = hardware_default {
            if !hardware_reported && !speed::is_valid_speed(gbps) {
                findings.push(invalid_hardware_speed(node.name(), gbps));
            }
        }
    }
    findings
}

fn invalid_port_speed(node_name: &str, port_name: &str, gbps: f64) -> Finding {
    Finding::on_port(
        FindingKind::NegativeOrInvalidSpeed,
        node_name,
        port_name,
        format!("port speed {} Gbps is not a valid speed", gbps),
    )
}

fn invalid_hardware_speed(node_name: &str, gbps: f64) -> Finding {
    Finding::on_node(
        FindingKind::NegativeOrInvalidSpeed,
        node_name,
        format!("hardware port speed {} Gbps is not a valid speed", gbps),
    )
}
