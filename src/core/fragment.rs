//! Catalog fragments built from suggestions, ready to paste into the master
//! catalog.

use std::{collections::BTreeSet, path::PathBuf};

use super::catalog::{Catalog, KeyPath};
use super::error::{Error, Result, TypeConflict};
use super::scanner::ExtractedString;

/// Why a suggestion could not be placed in the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionReason {
    /// The key was already suggested for a different text.
    DifferentText { existing: String },
    /// The key is a leaf for one suggestion and a namespace for another.
    Shape(TypeConflict),
}

/// A suggestion that was left out of the fragment because its key is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub path: KeyPath,
    pub text: String,
    pub source_file: PathBuf,
    pub source_line: usize,
    pub reason: CollisionReason,
}

#[derive(Debug, Default)]
pub struct SuggestionFragment {
    pub catalog: Catalog,
    pub collisions: Vec<KeyCollision>,
}

/// Fold suggestions into one catalog. The first suggestion for a key wins;
/// repeated identical texts are merged silently.
pub fn suggestion_fragment(extracted: &[ExtractedString]) -> Result<SuggestionFragment> {
    let mut fragment = SuggestionFragment::default();

    for item in extracted {
        let path = &item.suggested_key_path;
        let reason = match fragment.catalog.get_leaf(path) {
            Some(existing) if existing == item.text => continue,
            Some(existing) => CollisionReason::DifferentText {
                existing: existing.to_string(),
            },
            None => match fragment.catalog.set(path, item.text.as_str()) {
                Ok(()) => continue,
                Err(Error::TypeConflict(conflict)) => CollisionReason::Shape(conflict),
                Err(other) => return Err(other),
            },
        };
        fragment.collisions.push(KeyCollision {
            path: path.clone(),
            text: item.text.clone(),
            source_file: item.source_file.clone(),
            source_line: item.source_line,
            reason,
        });
    }

    Ok(fragment)
}

/// The master text of every `added` path, in master order.
pub fn added_fragment(master: &Catalog, added: &BTreeSet<KeyPath>) -> Result<Catalog> {
    let mut fragment = Catalog::new();
    for (path, text) in master.leaves() {
        if added.contains(&path) {
            fragment.set(&path, text)?;
        }
    }
    Ok(fragment)
}
