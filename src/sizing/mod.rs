// ABOUTME: Size recommendation module with reference charts and classification engine
// ABOUTME: Classifies body measurements into size buckets with tolerance and boundary advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

//! # Size Recommendation
//!
//! Given height/weight (and waist for pants), classify the shopper into the
//! best-fit size bucket of a reference chart. Every outcome, including
//! implausible input and measurements the chart cannot cover, is a normal
//! [`SizeResult`] value surfaced as advisory text; nothing here panics or
//! returns `Err` at classification time.

/// Chart data model, defaults, and validation
pub mod chart;
/// Classification engine and result variants
pub mod engine;

pub use chart::{ClosedRange, Garment, SizeChart, SizeChartRow};
pub use engine::{Measurements, SizeEngine, SizeResult};
