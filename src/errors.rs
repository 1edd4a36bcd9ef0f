// ABOUTME: Error types for malformed size chart definitions
// ABOUTME: Domain outcomes (no match, invalid input) are values, not errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

//! # Chart Errors
//!
//! The only failures this crate can produce are malformed chart definitions
//! supplied by configuration. Classification outcomes, lookup misses, and
//! implausible user input are all ordinary return values
//! ([`crate::sizing::SizeResult`], `Option`), never `Err`.

use thiserror::Error;

/// Errors raised while loading or validating a size chart definition
#[derive(Debug, Error)]
pub enum ChartError {
    /// Chart has no rows to classify against
    #[error("Size chart for {0} has no rows")]
    EmptyChart(&'static str),

    /// A row's range has `min` above `max`
    #[error("Size '{size}' has an inverted {field} range ({min} > {max})")]
    InvertedRange {
        /// Size label of the offending row
        size: String,
        /// Which measurement range is inverted
        field: &'static str,
        /// Lower bound as declared
        min: f64,
        /// Upper bound as declared
        max: f64,
    },

    /// A pants chart row is missing its waist range
    #[error("Size '{0}' is in a pants chart but declares no waist range")]
    MissingWaistRange(String),

    /// A chart was supplied for the wrong garment slot
    #[error("Expected a {expected} chart, got a {found} chart")]
    GarmentMismatch {
        /// Garment the engine slot requires
        expected: &'static str,
        /// Garment the supplied chart declares
        found: &'static str,
    },

    /// Chart JSON could not be deserialized
    #[error("Invalid chart definition: {0}")]
    Parse(#[from] serde_json::Error),
}
