// ABOUTME: Slug-URL bridge between numeric category ids and shareable paths
// ABOUTME: Builds canonical category URLs and breadcrumb trails, recovers ids from segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

use super::slug::generate_slug;
use super::tree::{find_path, CategoryNode};
use crate::constants::routing::{CATEGORY_MOUNT, SLUG_ID_SEPARATOR};
use serde::{Deserialize, Serialize};

/// One breadcrumb entry handed to the view layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Display label (the category name as-is)
    pub label: String,
    /// Canonical link target for this ancestor
    pub href: String,
}

/// Build the canonical slug path for a resolved category path.
///
/// Each node contributes `<slug(name)>-<id>`; segments are joined with `/`
/// under [`CATEGORY_MOUNT`]. The id suffix disambiguates names that slug to
/// the same string, and the breadcrumb and router code both call this, so a
/// given node always yields the same URL.
#[must_use]
pub fn slug_path(path: &[&CategoryNode]) -> String {
    let mut url = String::from(CATEGORY_MOUNT);
    for node in path {
        url.push('/');
        url.push_str(&generate_slug(&node.name));
        url.push(SLUG_ID_SEPARATOR);
        url.push_str(&node.id.to_string());
    }
    url
}

/// Recover the category id from a slug URL segment.
///
/// Segments are expected to end in `-<digits>` as produced by
/// [`slug_path`]; anything else (no separator, empty or non-numeric suffix)
/// yields `None` so the router can fall through to a not-found view.
#[must_use]
pub fn extract_id_from_segment(segment: &str) -> Option<i64> {
    let (_, suffix) = segment.rsplit_once(SLUG_ID_SEPARATOR)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Build the canonical URL for a category id, resolving its path first.
///
/// Returns `None` when the id is not in the forest; callers suppress the
/// dependent link rather than render a broken one.
#[must_use]
pub fn category_url(forest: &[CategoryNode], target_id: i64) -> Option<String> {
    find_path(forest, target_id).map(|path| slug_path(&path))
}

/// Build the breadcrumb trail for a category id.
///
/// Each ancestor gets its own cumulative href, so breadcrumb links land on
/// exactly the URLs [`slug_path`] produces for those ancestors. `None` when
/// the id is absent; the view hides the trail in that case.
#[must_use]
pub fn breadcrumbs(forest: &[CategoryNode], target_id: i64) -> Option<Vec<Breadcrumb>> {
    let path = find_path(forest, target_id)?;
    let trail = path
        .iter()
        .enumerate()
        .map(|(depth, node)| Breadcrumb {
            label: node.name.clone(),
            href: slug_path(&path[..=depth]),
        })
        .collect();
    Some(trail)
}
