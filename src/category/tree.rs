// ABOUTME: Category tree types and root-to-node path resolution
// ABOUTME: Preorder depth-first lookup over the category forest from the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

use serde::{Deserialize, Serialize};
use tracing::trace;

/// One node of the category tree as delivered by the category service
///
/// The forest is loaded once per session and read-only afterwards; lookups
/// borrow from it rather than cloning subtrees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    /// Unique id across the whole tree
    pub id: i64,
    /// Display name, also the source of the URL slug
    pub name: String,
    /// Child categories in source order; leaves omit the field in JSON
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a leaf node
    #[must_use]
    pub fn leaf(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children
    #[must_use]
    pub fn branch(id: i64, name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            id,
            name: name.into(),
            children,
        }
    }
}

/// Find the root-to-node path for `target_id` in the category forest.
///
/// Traversal is preorder depth-first using source child order; the first
/// node whose id matches wins, so the result is the first-encountered path,
/// not necessarily the shortest one. Returns `None` when no node matches.
///
/// Precondition: the forest is a strict tree. The category service never
/// emits shared or cyclic nodes, so no visited-set guard is kept here; a
/// cyclic input would recurse without bound.
#[must_use]
pub fn find_path(forest: &[CategoryNode], target_id: i64) -> Option<Vec<&CategoryNode>> {
    let mut path = Vec::new();
    if walk(forest, target_id, &mut path) {
        Some(path)
    } else {
        trace!(target_id, "category id not found in forest");
        None
    }
}

fn walk<'a>(nodes: &'a [CategoryNode], target_id: i64, path: &mut Vec<&'a CategoryNode>) -> bool {
    for node in nodes {
        path.push(node);
        if node.id == target_id {
            return true;
        }
        if !node.children.is_empty() && walk(&node.children, target_id, path) {
            return true;
        }
        path.pop();
    }
    false
}
