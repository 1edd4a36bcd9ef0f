// ABOUTME: Sizing configuration types with environment variable overrides
// ABOUTME: Holds fit tolerances and plausibility bounds consumed by the size engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

use crate::constants::{fit, plausibility};
use serde::{Deserialize, Serialize};
use std::env;

/// Sizing engine configuration
///
/// Every magic number in the classification flow lives here as a named
/// field. Defaults come from [`crate::constants`]; deployments may override
/// individual values through `LAMODE_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Units a measurement may miss a row bound by and still match
    pub fit_tolerance: f64,
    /// Units a measurement may exceed the chart envelope by before
    /// classification stops with an out-of-range advisory
    pub envelope_padding: f64,
    /// Distance from a matched row bound that triggers a size-up advisory
    pub boundary_margin: f64,
    /// Minimum plausible height (cm)
    pub min_height_cm: f64,
    /// Maximum plausible height (cm)
    pub max_height_cm: f64,
    /// Minimum plausible weight (kg)
    pub min_weight_kg: f64,
    /// Maximum plausible weight (kg)
    pub max_weight_kg: f64,
    /// Minimum plausible waist (cm)
    pub min_waist_cm: f64,
    /// Maximum plausible waist (cm)
    pub max_waist_cm: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            fit_tolerance: fit::MATCH_TOLERANCE,
            envelope_padding: fit::ENVELOPE_PADDING,
            boundary_margin: fit::BOUNDARY_MARGIN,
            min_height_cm: plausibility::MIN_HEIGHT_CM,
            max_height_cm: plausibility::MAX_HEIGHT_CM,
            min_weight_kg: plausibility::MIN_WEIGHT_KG,
            max_weight_kg: plausibility::MAX_WEIGHT_KG,
            min_waist_cm: plausibility::MIN_WAIST_CM,
            max_waist_cm: plausibility::MAX_WAIST_CM,
        }
    }
}

impl SizingConfig {
    /// Load sizing configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            fit_tolerance: env_f64("LAMODE_FIT_TOLERANCE", fit::MATCH_TOLERANCE),
            envelope_padding: env_f64("LAMODE_ENVELOPE_PADDING", fit::ENVELOPE_PADDING),
            boundary_margin: env_f64("LAMODE_BOUNDARY_MARGIN", fit::BOUNDARY_MARGIN),
            min_height_cm: env_f64("LAMODE_MIN_HEIGHT_CM", plausibility::MIN_HEIGHT_CM),
            max_height_cm: env_f64("LAMODE_MAX_HEIGHT_CM", plausibility::MAX_HEIGHT_CM),
            min_weight_kg: env_f64("LAMODE_MIN_WEIGHT_KG", plausibility::MIN_WEIGHT_KG),
            max_weight_kg: env_f64("LAMODE_MAX_WEIGHT_KG", plausibility::MAX_WEIGHT_KG),
            min_waist_cm: env_f64("LAMODE_MIN_WAIST_CM", plausibility::MIN_WAIST_CM),
            max_waist_cm: env_f64("LAMODE_MAX_WAIST_CM", plausibility::MAX_WAIST_CM),
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
