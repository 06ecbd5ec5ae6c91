// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `normalization`: idempotence and shape of the normalizer
//! - `queries`: totality and consistency of graph queries

mod normalization;
mod queries;
mod strategies;
