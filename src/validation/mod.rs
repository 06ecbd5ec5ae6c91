// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Validation
//!
//! Pure checks over a [`NormalizedInventory`](crate::normalizer::NormalizedInventory).
//! Validation never stops early and never mutates; it returns every finding
//! in a deterministic order so callers see the whole problem set at once.
//!
//! # Finding Kinds
//!
//! | Kind | Severity |
//! |------|----------|
//! | `DuplicateNodeName` | fatal |
//! | `DuplicatePortName` | fatal |
//! | `DanglingTargetReference` | fatal |
//! | `UnresolvedTargetPort` | advisory |
//! | `LegacyAndModernConnectionBothPresent` | advisory |
//! | `NegativeOrInvalidSpeed` | fatal |

pub mod finding;
pub mod validator;

pub use finding::{Finding, FindingKind, Severity};
pub use validator::{validate, ValidationReport, Validator};
