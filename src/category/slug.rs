// ABOUTME: URL-safe slug derivation from category and product display names
// ABOUTME: Strips Vietnamese diacritics via NFD decomposition, bit-exact with shipped URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lamode

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped after NFD decomposition
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Derive a URL-safe slug from a display name.
///
/// The pipeline is fixed and order-sensitive because its output is embedded
/// in shareable URLs that must stay stable across releases:
///
/// 1. lowercase
/// 2. NFD decomposition (base letter + combining marks)
/// 3. strip combining marks U+0300–U+036F (Vietnamese tone and vowel marks)
/// 4. collapse whitespace runs into a single hyphen
/// 5. drop everything that is not ASCII alphanumeric, `_`, or `-`
/// 6. collapse hyphen runs
/// 7. trim leading/trailing hyphens
///
/// The function is pure and idempotent; output is always lowercase ASCII
/// `[a-z0-9_-]` with no leading, trailing, or doubled hyphen.
///
/// # Examples
///
/// ```
/// use lamode_core::category::generate_slug;
///
/// assert_eq!(generate_slug("Áo Thun Nam"), "ao-thun-nam");
/// assert_eq!(generate_slug("  Quần  Jean / Slim-fit  "), "quan-jean-slim-fit");
/// ```
#[must_use]
pub fn generate_slug(text: &str) -> String {
    let decomposed: String = text.to_lowercase().nfd().collect();

    let mut slug = String::with_capacity(decomposed.len());
    let mut pending_hyphen = false;
    for ch in decomposed.chars() {
        if COMBINING_MARKS.contains(&ch) {
            continue;
        }
        if ch.is_whitespace() {
            pending_hyphen = !slug.is_empty();
            continue;
        }
        let keep = ch.is_ascii_alphanumeric() || ch == '_' || ch == '-';
        if !keep {
            continue;
        }
        if ch == '-' {
            pending_hyphen = !slug.is_empty();
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        slug.push(ch);
    }
    slug
}
