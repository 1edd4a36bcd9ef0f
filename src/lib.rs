// ABOUTME: Core library for Lamode storefront navigation and size recommendation
// ABOUTME: Pure computations over category trees and size charts, no I/O surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

#![deny(unsafe_code)]

//! # Lamode Core
//!
//! Foundation crate for the Lamode storefront. Everything here is a pure,
//! synchronous computation over immutable inputs: the surrounding web
//! application fetches category data and form input, calls into this crate,
//! and renders whatever comes back. There is no network, file, or process
//! boundary in this crate.
//!
//! ## Modules
//!
//! - **category**: category tree path resolution, slug generation, and the
//!   slug-URL bridge used by breadcrumbs and canonical category links
//! - **sizing**: size recommendation engine classifying body measurements
//!   against shirt and pants reference charts
//! - **config**: named tolerances and plausibility bounds with environment
//!   overrides
//! - **constants**: application-wide constants organized by domain
//! - **errors**: chart definition errors (`ChartError`)

/// Chart definition error types
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Sizing configuration with environment overrides
pub mod config;

/// Category tree resolution, slugs, and URL building
pub mod category;

/// Size recommendation engine and reference charts
pub mod sizing;

pub use category::{
    breadcrumbs, category_url, extract_id_from_segment, find_path, generate_slug, slug_path,
    Breadcrumb, CategoryNode,
};
pub use config::SizingConfig;
pub use errors::ChartError;
pub use sizing::{Garment, Measurements, SizeChart, SizeChartRow, SizeEngine, SizeResult};
