// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Plausibility bounds, fit tolerances, and routing constants for Lamode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

//! Constants module
//!
//! Application constants grouped by domain. The sizing values feed the
//! [`crate::config::SizingConfig`] defaults so tests can substitute
//! alternates without touching call sites.

/// Plausibility bounds for body measurements
///
/// Measurements outside these windows are rejected as input errors before
/// any chart matching happens. They bound the human range, not the charts.
pub mod plausibility {
    /// Minimum plausible height (cm)
    pub const MIN_HEIGHT_CM: f64 = 120.0;
    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum plausible weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum plausible weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum plausible waist (cm)
    pub const MIN_WAIST_CM: f64 = 50.0;
    /// Maximum plausible waist (cm)
    pub const MAX_WAIST_CM: f64 = 200.0;
}

/// Fit matching tolerances
pub mod fit {
    /// Units a measurement may miss a row bound by and still match
    pub const MATCH_TOLERANCE: f64 = 2.0;
    /// Units a measurement may exceed the chart envelope by before the
    /// result becomes out-of-range
    pub const ENVELOPE_PADDING: f64 = 2.0;
    /// Distance (units) from a matched row bound that triggers a
    /// size-up advisory
    pub const BOUNDARY_MARGIN: f64 = 2.0;
}

/// URL routing constants
pub mod routing {
    /// Mount point prefixed to every category slug path
    pub const CATEGORY_MOUNT: &str = "/category";
    /// Separator between a slug and its trailing category id
    pub const SLUG_ID_SEPARATOR: char = '-';
}
