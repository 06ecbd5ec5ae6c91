// Copyright (c) 2025 - Cowboy AI, Inc.
//! Data-quality findings

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Loaded, but worth showing as a warning
    Advisory,
    /// Prevents graph construction
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Advisory => write!(f, "advisory"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// Stable identifier of what a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    DuplicateNodeName,
    DuplicatePortName,
    DanglingTargetReference,
    UnresolvedTargetPort,
    LegacyAndModernConnectionBothPresent,
    NegativeOrInvalidSpeed,
}

impl FindingKind {
    /// Severity before any strict-mode promotion
    pub fn default_severity(&self) -> Severity {
        match self {
            FindingKind::UnresolvedTargetPort
            | FindingKind::LegacyAndModernConnectionBothPresent => Severity::Advisory,
            FindingKind::DuplicateNodeName
            | FindingKind::DuplicatePortName
            | FindingKind::DanglingTargetReference
            | FindingKind::NegativeOrInvalidSpeed => Severity::Fatal,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A data-quality observation about one node or port
///
/// Serializes as `{kind, severity, message, subjectNodeName,
/// subjectPortName?}` so a UI can render it without parsing `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
    pub subject_node_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_port_name: Option<String>,
}

impl Finding {
    /// Finding about a node, at the kind's default severity
    pub fn on_node(kind: FindingKind, node: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            subject_node_name: node.into(),
            subject_port_name: None,
        }
    }

    /// Finding about a port, at the kind's default severity
    pub fn on_port(
        kind: FindingKind,
        node: impl Into<String>,
        port: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject_port_name: Some(port.into()),
            ..Self::on_node(kind, node, message)
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    pub fn is_advisory(&self) -> bool {
        self.severity == Severity::Advisory
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject_port_name {
            Some(port) => write!(
                f,
                "[{}] {} {}:{}: {}",
                self.severity, self.kind, self.subject_node_name, port, self.message
            ),
            None => write!(
                f,
                "[{}] {} {}: {}",
                self.severity, self.kind, self.subject_node_name, self.message
            ),
        }
    }
}
