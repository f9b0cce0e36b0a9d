//! Master/target catalog synchronization.
//!
//! The master catalog decides which key paths exist. Each target is rebuilt
//! against it: missing leaves get a pending marker, orphans are dropped,
//! existing translations are kept verbatim.

use std::collections::BTreeSet;

use super::catalog::{Catalog, CatalogNode, KeyPath};
use super::error::{Error, Result, TypeConflict};
use super::pending::{pending_marker, pending_source};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Re-stamp pending markers whose embedded text no longer matches the
    /// master text. Translated leaves are never touched.
    pub refresh_pending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub updated: Catalog,
    /// Leaf paths inserted with a pending marker.
    pub added: BTreeSet<KeyPath>,
    /// Orphan leaf paths dropped from the target.
    pub removed: BTreeSet<KeyPath>,
    /// Pending leaves re-stamped with new master text.
    pub refreshed: BTreeSet<KeyPath>,
    /// Target-only namespaces dropped without holding any leaf.
    pub pruned: BTreeSet<KeyPath>,
}

impl SyncOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.refreshed.is_empty()
            && self.pruned.is_empty()
    }
}

/// Synchronize `target` (the catalog of `locale`) with `master`.
///
/// Sibling order in the result follows the master catalog. Every path that
/// is a leaf on one side and a namespace on the other is collected; if there
/// is any, the whole locale fails with [`Error::TypeConflicts`].
pub fn sync(
    master: &Catalog,
    target: &Catalog,
    locale: &str,
    options: SyncOptions,
) -> Result<SyncOutcome> {
    let mut merge = Merge {
        options,
        added: BTreeSet::new(),
        removed: BTreeSet::new(),
        refreshed: BTreeSet::new(),
        pruned: BTreeSet::new(),
        conflicts: Vec::new(),
    };
    let updated = merge.merge(master, Some(target), &KeyPath::default());

    if !merge.conflicts.is_empty() {
        return Err(Error::TypeConflicts {
            locale: locale.to_string(),
            conflicts: merge.conflicts,
            master_file: None,
            target_file: None,
        });
    }

    Ok(SyncOutcome {
        updated,
        added: merge.added,
        removed: merge.removed,
        refreshed: merge.refreshed,
        pruned: merge.pruned,
    })
}

struct Merge {
    options: SyncOptions,
    added: BTreeSet<KeyPath>,
    removed: BTreeSet<KeyPath>,
    refreshed: BTreeSet<KeyPath>,
    pruned: BTreeSet<KeyPath>,
    conflicts: Vec<TypeConflict>,
}

impl Merge {
    fn merge(&mut self, master: &Catalog, target: Option<&Catalog>, prefix: &KeyPath) -> Catalog {
        let mut out = Catalog::new();

        for (key, master_node) in master.iter() {
            let path = prefix.child(key);
            let target_node = target.and_then(|t| t.entry(key));

            let node = match (master_node, target_node) {
                (CatalogNode::Leaf(text), None) => {
                    self.added.insert(path);
                    CatalogNode::Leaf(pending_marker(text))
                }
                (CatalogNode::Leaf(text), Some(CatalogNode::Leaf(existing))) => {
                    CatalogNode::Leaf(self.keep_leaf(text, existing, path))
                }
                (CatalogNode::Branch(child), None) => {
                    CatalogNode::Branch(self.merge(child, None, &path))
                }
                (CatalogNode::Branch(child), Some(CatalogNode::Branch(existing))) => {
                    CatalogNode::Branch(self.merge(child, Some(existing), &path))
                }
                (expected, Some(found)) => {
                    self.conflicts.push(TypeConflict {
                        path,
                        expected: expected.kind(),
                        found: found.kind(),
                    });
                    found.clone()
                }
            };
            out.insert(key, node);
        }

        if let Some(target) = target {
            for (key, node) in target.iter() {
                if master.entry(key).is_some() {
                    continue;
                }
                let path = prefix.child(key);
                match node {
                    CatalogNode::Leaf(_) => {
                        self.removed.insert(path);
                    }
                    // The whole namespace goes; it has no counterpart in master.
                    CatalogNode::Branch(orphan) if orphan.leaf_count() == 0 => {
                        self.pruned.insert(path);
                    }
                    CatalogNode::Branch(orphan) => {
                        self.removed
                            .extend(orphan.leaf_paths().iter().map(|leaf| path.join(leaf)));
                    }
                }
            }
        }

        out
    }

    fn keep_leaf(&mut self, master_text: &str, existing: &str, path: KeyPath) -> String {
        if self.options.refresh_pending
            && pending_source(existing).is_some_and(|stamped| stamped != master_text)
        {
            self.refreshed.insert(path);
            return pending_marker(master_text);
        }
        existing.to_string()
    }
}
