// ABOUTME: Size classification engine matching body measurements to chart rows
// ABOUTME: Tolerant two-pass matching with envelope checks and boundary size-up advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

use super::chart::{ClosedRange, Garment, SizeChart};
use crate::config::SizingConfig;
use crate::errors::ChartError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body measurements as parsed from the size-guide form
///
/// Fields are optional because the view layer hands over raw form strings;
/// anything blank or non-numeric arrives here as `None` and is reported as
/// an input error by [`SizeEngine::recommend`], not a panic or `Err`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Measurements {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Waist in centimeters; only consulted for pants
    pub waist_cm: Option<f64>,
}

impl Measurements {
    /// Measurements for a shirt fit
    #[must_use]
    pub const fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            waist_cm: None,
        }
    }

    /// Measurements for a pants fit
    #[must_use]
    pub const fn with_waist(height_cm: f64, weight_kg: f64, waist_cm: f64) -> Self {
        Self {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            waist_cm: Some(waist_cm),
        }
    }

    /// Parse raw form input strings.
    ///
    /// Blank or non-numeric fields become `None`; the engine turns those
    /// into [`SizeResult::InvalidInput`] so the form can highlight them.
    #[must_use]
    pub fn from_form_input(height: &str, weight: &str, waist: Option<&str>) -> Self {
        Self {
            height_cm: parse_field(height),
            weight_kg: parse_field(weight),
            waist_cm: waist.and_then(parse_field),
        }
    }
}

fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Outcome of one size classification
///
/// Every branch of the classification flow terminates in one of these
/// variants; all messages are user-facing advisory text. The `status` tag
/// keeps the JSON shape the view layer switches on exhaustive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SizeResult {
    /// A row matched comfortably inside its ranges
    Success {
        /// Matched size label
        size: String,
    },
    /// A row matched but the shopper is close to its edge
    BoundaryWarning {
        /// Matched size label (the floor recommendation)
        size: String,
        /// Next larger size to consider, when the chart has one
        suggested: Option<String>,
        /// Advisory text for the size guide
        message: String,
    },
    /// Measurements exceed the chart envelope beyond the padding
    OutOfRange {
        /// Advisory text for the size guide
        message: String,
    },
    /// No row matched even with tolerance
    NoMatch {
        /// Advisory text for the size guide
        message: String,
    },
    /// Missing or physiologically implausible input
    InvalidInput {
        /// Advisory text for the offending form field
        message: String,
    },
}

impl SizeResult {
    /// The matched size label, when the classification produced one
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        match self {
            Self::Success { size } | Self::BoundaryWarning { size, .. } => Some(size),
            _ => None,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Size recommendation engine
///
/// Owns its configuration and both reference charts; immutable after
/// construction, so it is freely shareable across threads. One call to
/// [`Self::recommend`] performs one full classification with no state
/// carried between calls.
#[derive(Debug, Clone)]
pub struct SizeEngine {
    config: SizingConfig,
    shirt: SizeChart,
    pants: SizeChart,
}

impl Default for SizeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeEngine {
    /// Engine with default configuration and built-in reference charts
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SizingConfig::default(),
            shirt: SizeChart::default_shirt(),
            pants: SizeChart::default_pants(),
        }
    }

    /// Engine with custom tolerances over the built-in charts
    #[must_use]
    pub fn with_config(config: SizingConfig) -> Self {
        Self {
            config,
            shirt: SizeChart::default_shirt(),
            pants: SizeChart::default_pants(),
        }
    }

    /// Engine with custom charts, validated on construction.
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] when either chart fails validation or was
    /// supplied for the wrong garment slot.
    pub fn with_charts(
        config: SizingConfig,
        shirt: SizeChart,
        pants: SizeChart,
    ) -> Result<Self, ChartError> {
        check_garment(&shirt, Garment::Shirt)?;
        check_garment(&pants, Garment::Pants)?;
        shirt.validate()?;
        pants.validate()?;
        Ok(Self {
            config,
            shirt,
            pants,
        })
    }

    /// Classify measurements against the chart for `garment`.
    ///
    /// Flow: validate presence and plausibility, check the chart envelope,
    /// then match rows exactly and (failing that) with tolerance; matches
    /// close to a row edge come back as a size-up advisory. Every outcome
    /// is a [`SizeResult`] value; this never panics or returns `Err`.
    #[must_use]
    pub fn recommend(&self, measurements: &Measurements, garment: Garment) -> SizeResult {
        let chart = match garment {
            Garment::Shirt => &self.shirt,
            Garment::Pants => &self.pants,
        };

        let (height, weight, waist) = match self.validate(measurements, garment) {
            Ok(values) => values,
            Err(result) => return result,
        };

        if let Some(result) = self.envelope_check(chart, garment, height, weight, waist) {
            return result;
        }

        // Exact pass first, then one retry with every bound loosened.
        let matched = self
            .match_row(chart, garment, height, weight, waist, 0.0)
            .or_else(|| {
                self.match_row(chart, garment, height, weight, waist, self.config.fit_tolerance)
            });

        let Some(index) = matched else {
            debug!(garment = garment.as_str(), "no chart row matched");
            return SizeResult::NoMatch {
                message: format!(
                    "No {} size matches your measurements; try the size chart directly",
                    garment.as_str()
                ),
            };
        };

        self.resolve_match(chart, garment, index, height, weight, waist)
    }

    /// Presence and plausibility checks; `Err` carries the terminal result.
    fn validate(
        &self,
        m: &Measurements,
        garment: Garment,
    ) -> Result<(f64, f64, Option<f64>), SizeResult> {
        let Some(height) = m.height_cm else {
            return Err(SizeResult::invalid("Height is required"));
        };
        let Some(weight) = m.weight_kg else {
            return Err(SizeResult::invalid("Weight is required"));
        };
        let waist = match garment {
            Garment::Pants => match m.waist_cm {
                Some(waist) => Some(waist),
                None => return Err(SizeResult::invalid("Waist is required for pants")),
            },
            Garment::Shirt => None,
        };

        let c = &self.config;
        if !ClosedRange::new(c.min_height_cm, c.max_height_cm).contains(height) {
            return Err(SizeResult::invalid(format!(
                "Height must be between {} and {} cm",
                c.min_height_cm, c.max_height_cm
            )));
        }
        if !ClosedRange::new(c.min_weight_kg, c.max_weight_kg).contains(weight) {
            return Err(SizeResult::invalid(format!(
                "Weight must be between {} and {} kg",
                c.min_weight_kg, c.max_weight_kg
            )));
        }
        if let Some(waist) = waist {
            if !ClosedRange::new(c.min_waist_cm, c.max_waist_cm).contains(waist) {
                return Err(SizeResult::invalid(format!(
                    "Waist must be between {} and {} cm",
                    c.min_waist_cm, c.max_waist_cm
                )));
            }
        }
        Ok((height, weight, waist))
    }

    /// Compare against the chart envelope; `Some` is the terminal result.
    ///
    /// Shirts envelope on height and weight, pants on height and waist,
    /// the same dimensions the match predicate uses.
    fn envelope_check(
        &self,
        chart: &SizeChart,
        garment: Garment,
        height: f64,
        weight: f64,
        waist: Option<f64>,
    ) -> Option<SizeResult> {
        let padding = self.config.envelope_padding;
        let heights = chart.envelope(|row| row.height_cm);
        if !heights.contains_with_tolerance(height, padding) {
            debug!(height, "height outside chart envelope");
            return Some(out_of_range("height", height, "cm", heights));
        }
        match garment {
            Garment::Shirt => {
                let weights = chart.envelope(|row| row.weight_kg);
                if !weights.contains_with_tolerance(weight, padding) {
                    debug!(weight, "weight outside chart envelope");
                    return Some(out_of_range("weight", weight, "kg", weights));
                }
            }
            Garment::Pants => {
                // validate() guarantees waist presence for pants
                let waists = chart.waist_envelope();
                if let (Some(waist), Some(waists)) = (waist, waists) {
                    if !waists.contains_with_tolerance(waist, padding) {
                        debug!(waist, "waist outside chart envelope");
                        return Some(out_of_range("waist", waist, "cm", waists));
                    }
                }
            }
        }
        None
    }

    /// First row whose relevant ranges admit the measurements at the given
    /// tolerance. Pants match on waist and height only; weight is carried
    /// in the chart but does not gate the match. Kept as shipped; see
    /// DESIGN.md before changing.
    fn match_row(
        &self,
        chart: &SizeChart,
        garment: Garment,
        height: f64,
        weight: f64,
        waist: Option<f64>,
        tolerance: f64,
    ) -> Option<usize> {
        chart.rows.iter().position(|row| match garment {
            Garment::Shirt => {
                row.height_cm.contains_with_tolerance(height, tolerance)
                    && row.weight_kg.contains_with_tolerance(weight, tolerance)
            }
            Garment::Pants => {
                waist.zip(row.waist_cm).is_some_and(|(value, range)| {
                    range.contains_with_tolerance(value, tolerance)
                }) && row.height_cm.contains_with_tolerance(height, tolerance)
            }
        })
    }

    /// Turn a matched row into a success or a boundary advisory.
    fn resolve_match(
        &self,
        chart: &SizeChart,
        garment: Garment,
        index: usize,
        height: f64,
        weight: f64,
        waist: Option<f64>,
    ) -> SizeResult {
        let row = &chart.rows[index];
        let margin = self.config.boundary_margin;
        let near_edge = match garment {
            Garment::Shirt => {
                row.height_cm.near_bound(height, margin) || row.weight_kg.near_bound(weight, margin)
            }
            Garment::Pants => {
                row.height_cm.near_bound(height, margin)
                    || waist
                        .zip(row.waist_cm)
                        .is_some_and(|(value, range)| range.near_bound(value, margin))
            }
        };

        if near_edge {
            let suggested = chart.next_size_after(index).map(str::to_owned);
            let message = suggested.as_ref().map_or_else(
                || {
                    format!(
                        "Size {} fits, but you're at the edge of the chart",
                        row.size
                    )
                },
                |next| {
                    format!(
                        "Size {} fits, but you're close to its edge; consider sizing up to {next}",
                        row.size
                    )
                },
            );
            debug!(size = %row.size, ?suggested, "boundary match");
            return SizeResult::BoundaryWarning {
                size: row.size.clone(),
                suggested,
                message,
            };
        }

        debug!(size = %row.size, "size matched");
        SizeResult::Success {
            size: row.size.clone(),
        }
    }
}

fn check_garment(chart: &SizeChart, expected: Garment) -> Result<(), ChartError> {
    if chart.garment == expected {
        Ok(())
    } else {
        Err(ChartError::GarmentMismatch {
            expected: expected.as_str(),
            found: chart.garment.as_str(),
        })
    }
}

fn out_of_range(field: &str, value: f64, unit: &str, envelope: ClosedRange) -> SizeResult {
    SizeResult::OutOfRange {
        message: format!(
            "Your {field} of {value} {unit} is outside the chart range ({min} to {max} {unit})",
            min = envelope.min,
            max = envelope.max
        ),
    }
}
