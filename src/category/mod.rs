// ABOUTME: Category navigation module for tree resolution, slugs, and URLs
// ABOUTME: Bridges numeric category ids and human-readable breadcrumb/URL paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

//! # Category Navigation
//!
//! The storefront routes categories by human-readable slug URLs
//! (`/category/ao-nam-2/ao-thun-nam-11`) while the backend keys everything
//! by numeric id. This module owns both directions of that bridge plus the
//! path lookup that feeds breadcrumb trails.

/// URL-safe slug derivation from display names
pub mod slug;
/// Category tree types and path resolution
pub mod tree;
/// Slug path building and id extraction
pub mod url;

pub use slug::generate_slug;
pub use tree::{find_path, CategoryNode};
pub use url::{breadcrumbs, category_url, extract_id_from_segment, slug_path, Breadcrumb};
