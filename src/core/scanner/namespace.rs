//! Namespace suggestion from a file's position in the source tree.
//!
//! `app/[locale]/(dashboard)/inventory/purchase-orders/page.tsx` becomes
//! `inventory.purchaseOrders`: route groups, dynamic segments and generic
//! framework names are skipped, the first remaining segment is the module and
//! the last one the page.

use std::path::{Component, Path};

use crate::core::catalog::KeyPath;
use crate::core::slug::{SENTINEL_KEY, generate_key};

/// Used when no meaningful path segment remains.
pub const DEFAULT_NAMESPACE: &str = "common";

const GENERIC_SEGMENTS: &[&str] = &[
    "src",
    "app",
    "pages",
    "page",
    "components",
    "index",
    "layout",
    "route",
    "views",
];

/// Derive the suggested namespace for `relative_path` (relative to the
/// source root).
pub fn namespace_for(relative_path: &Path, max_words: usize) -> KeyPath {
    let names: Vec<&str> = relative_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect();

    let mut segments: Vec<String> = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let name = if i + 1 == names.len() {
            Path::new(name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(name)
        } else {
            name
        };
        if is_structural(name) {
            continue;
        }
        let slug = generate_key(&split_words(name), max_words);
        if slug == SENTINEL_KEY && !name.eq_ignore_ascii_case(SENTINEL_KEY) {
            continue;
        }
        segments.push(slug);
    }

    match segments.as_slice() {
        [] => KeyPath::new(vec![DEFAULT_NAMESPACE.to_string()]),
        [only] => KeyPath::new(vec![only.clone()]),
        [module, .., page] => KeyPath::new(vec![module.clone(), page.clone()]),
    }
}

/// Segments that describe routing structure rather than a feature.
fn is_structural(name: &str) -> bool {
    (name.starts_with('(') && name.ends_with(')'))
        || name.starts_with('[')
        || name.starts_with('@')
        || name.starts_with('_')
        || GENERIC_SEGMENTS.contains(&name.to_ascii_lowercase().as_str())
}

/// Turn `purchase-orders`, `order_table` or `OrderTable` into space
/// separated words.
fn split_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            out.push(' ');
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.push(c);
    }
    out
}
