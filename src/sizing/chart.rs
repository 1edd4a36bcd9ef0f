// ABOUTME: Size chart data model with built-in shirt and pants reference charts
// ABOUTME: Charts are fixed configuration, loadable from JSON and validated on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

use crate::errors::ChartError;
use serde::{Deserialize, Serialize};

/// Garment family a chart classifies for
///
/// Pants key on waist in addition to height; shirts key on height and
/// weight only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Garment {
    /// Tops: match on height and weight
    Shirt,
    /// Bottoms: match on waist and height
    Pants,
}

impl Garment {
    /// Stable lowercase name used in messages and chart errors
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shirt => "shirt",
            Self::Pants => "pants",
        }
    }
}

/// Closed numeric interval, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClosedRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl ClosedRange {
    /// Construct a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether `value` lies inside the range with each bound loosened by
    /// `tolerance`
    #[must_use]
    pub fn contains_with_tolerance(&self, value: f64, tolerance: f64) -> bool {
        value >= self.min - tolerance && value <= self.max + tolerance
    }

    /// Whether `value` sits within `margin` of either bound
    #[must_use]
    pub fn near_bound(&self, value: f64, margin: f64) -> bool {
        (value - self.min).abs() <= margin || (value - self.max).abs() <= margin
    }
}

/// One row of a size chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeChartRow {
    /// Size label ("S", "M", "L", "XL", "2XL")
    pub size: String,
    /// Height range covered by this size (cm)
    pub height_cm: ClosedRange,
    /// Weight range covered by this size (kg)
    pub weight_kg: ClosedRange,
    /// Waist range covered by this size (cm); pants charts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<ClosedRange>,
}

/// A reference size chart for one garment family
///
/// Rows are ordered smallest size first; the engine relies on that order
/// for its first-match tie-break but does not verify it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeChart {
    /// Garment family this chart classifies
    pub garment: Garment,
    /// Rows, smallest size first
    pub rows: Vec<SizeChartRow>,
}

impl SizeChart {
    /// The built-in shirt reference chart
    #[must_use]
    pub fn default_shirt() -> Self {
        Self {
            garment: Garment::Shirt,
            rows: vec![
                shirt_row("S", 150.0, 157.0, 45.0, 55.0),
                shirt_row("M", 158.0, 165.0, 55.0, 62.0),
                shirt_row("L", 166.0, 172.0, 63.0, 70.0),
                shirt_row("XL", 173.0, 180.0, 71.0, 80.0),
                shirt_row("2XL", 181.0, 188.0, 81.0, 95.0),
            ],
        }
    }

    /// The built-in pants reference chart
    #[must_use]
    pub fn default_pants() -> Self {
        Self {
            garment: Garment::Pants,
            rows: vec![
                pants_row("S", 150.0, 157.0, 45.0, 55.0, 60.0, 66.0),
                pants_row("M", 158.0, 165.0, 55.0, 62.0, 67.0, 72.0),
                pants_row("L", 166.0, 172.0, 63.0, 70.0, 73.0, 78.0),
                pants_row("XL", 173.0, 180.0, 71.0, 80.0, 79.0, 85.0),
                pants_row("2XL", 181.0, 188.0, 81.0, 95.0, 86.0, 95.0),
            ],
        }
    }

    /// Load a chart from a JSON definition and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Parse`] on malformed JSON, or any validation
    /// error from [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let chart: Self = serde_json::from_str(json)?;
        chart.validate()?;
        Ok(chart)
    }

    /// Validate the chart definition.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptyChart`] when no rows exist,
    /// [`ChartError::InvertedRange`] when a range has `min > max`, and
    /// [`ChartError::MissingWaistRange`] when a pants row omits its waist.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.rows.is_empty() {
            return Err(ChartError::EmptyChart(self.garment.as_str()));
        }
        for row in &self.rows {
            check_range(&row.size, "height_cm", row.height_cm)?;
            check_range(&row.size, "weight_kg", row.weight_kg)?;
            match (self.garment, row.waist_cm) {
                (Garment::Pants, None) => {
                    return Err(ChartError::MissingWaistRange(row.size.clone()));
                }
                (_, Some(waist)) => check_range(&row.size, "waist_cm", waist)?,
                (Garment::Shirt, None) => {}
            }
        }
        Ok(())
    }

    /// The chart's envelope over one extractor (e.g. heights), as the
    /// min of row minimums and max of row maximums.
    pub(crate) fn envelope(&self, range_of: impl Fn(&SizeChartRow) -> ClosedRange) -> ClosedRange {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.rows {
            let range = range_of(row);
            min = min.min(range.min);
            max = max.max(range.max);
        }
        ClosedRange::new(min, max)
    }

    /// Envelope over the waist ranges of rows that declare one; `None`
    /// when no row does (shirt charts)
    pub(crate) fn waist_envelope(&self) -> Option<ClosedRange> {
        self.rows
            .iter()
            .filter_map(|row| row.waist_cm)
            .fold(None, |acc: Option<ClosedRange>, range| {
                Some(acc.map_or(range, |acc| {
                    ClosedRange::new(acc.min.min(range.min), acc.max.max(range.max))
                }))
            })
    }

    /// The label of the row following `index`, if the chart has one
    pub(crate) fn next_size_after(&self, index: usize) -> Option<&str> {
        self.rows.get(index + 1).map(|row| row.size.as_str())
    }
}

fn shirt_row(size: &str, h_min: f64, h_max: f64, w_min: f64, w_max: f64) -> SizeChartRow {
    SizeChartRow {
        size: size.to_owned(),
        height_cm: ClosedRange::new(h_min, h_max),
        weight_kg: ClosedRange::new(w_min, w_max),
        waist_cm: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn pants_row(
    size: &str,
    h_min: f64,
    h_max: f64,
    w_min: f64,
    w_max: f64,
    waist_min: f64,
    waist_max: f64,
) -> SizeChartRow {
    SizeChartRow {
        waist_cm: Some(ClosedRange::new(waist_min, waist_max)),
        ..shirt_row(size, h_min, h_max, w_min, w_max)
    }
}

fn check_range(size: &str, field: &'static str, range: ClosedRange) -> Result<(), ChartError> {
    if range.min > range.max {
        return Err(ChartError::InvertedRange {
            size: size.to_owned(),
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_charts_validate() {
        SizeChart::default_shirt().validate().unwrap();
        SizeChart::default_pants().validate().unwrap();
    }

    #[test]
    fn pants_row_without_waist_is_rejected() {
        let mut chart = SizeChart::default_pants();
        chart.rows[2].waist_cm = None;
        assert!(matches!(
            chart.validate(),
            Err(ChartError::MissingWaistRange(size)) if size == "L"
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut chart = SizeChart::default_shirt();
        chart.rows[0].height_cm = ClosedRange::new(157.0, 150.0);
        assert!(matches!(
            chart.validate(),
            Err(ChartError::InvertedRange { field: "height_cm", .. })
        ));
    }

    #[test]
    fn empty_chart_is_rejected() {
        let chart = SizeChart {
            garment: Garment::Shirt,
            rows: Vec::new(),
        };
        assert!(matches!(chart.validate(), Err(ChartError::EmptyChart(_))));
    }

    #[test]
    fn chart_round_trips_through_json() {
        let chart = SizeChart::default_pants();
        let json = serde_json::to_string(&chart).unwrap();
        let loaded = SizeChart::from_json_str(&json).unwrap();
        assert_eq!(loaded, chart);
    }

    #[test]
    fn envelope_spans_all_rows() {
        let chart = SizeChart::default_shirt();
        let heights = chart.envelope(|row| row.height_cm);
        assert_eq!(heights, ClosedRange::new(150.0, 188.0));
        let weights = chart.envelope(|row| row.weight_kg);
        assert_eq!(weights, ClosedRange::new(45.0, 95.0));
    }
}
