//! In-memory model of a locale catalog.
//!
//! A catalog is an ordered tree: every key maps either to a leaf string or to
//! a nested catalog (a namespace). Sibling order is insertion order and
//! survives load/save and flatten/rebuild unchanged.

mod json;
mod key_path;

pub use json::{ParseError, is_valid_key};
pub use key_path::KeyPath;

use super::error::{Error, NodeKind, Result, TypeConflict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    Leaf(String),
    Branch(Catalog),
}

impl CatalogNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            CatalogNode::Leaf(_) => NodeKind::Leaf,
            CatalogNode::Branch(_) => NodeKind::Namespace,
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            CatalogNode::Leaf(value) => Some(value),
            CatalogNode::Branch(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, CatalogNode)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct children in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Look up a direct child.
    pub fn entry(&self, key: &str) -> Option<&CatalogNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, node)| node)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut CatalogNode> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Insert a direct child. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, node: CatalogNode) -> Option<CatalogNode> {
        let key = key.into();
        match self.entry_mut(&key) {
            Some(existing) => Some(std::mem::replace(existing, node)),
            None => {
                self.entries.push((key, node));
                None
            }
        }
    }

    /// Remove a direct child, keeping the order of its siblings.
    pub fn remove(&mut self, key: &str) -> Option<CatalogNode> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, path: &KeyPath) -> Option<&CatalogNode> {
        let (first, rest) = path.segments().split_first()?;
        let mut node = self.entry(first)?;
        for segment in rest {
            node = match node {
                CatalogNode::Branch(child) => child.entry(segment)?,
                CatalogNode::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    pub fn get_leaf(&self, path: &KeyPath) -> Option<&str> {
        self.get(path).and_then(CatalogNode::as_leaf)
    }

    /// Set a leaf value, creating intermediate namespaces as needed.
    ///
    /// Fails with a type conflict when an intermediate segment is a leaf or
    /// when the final segment is already a namespace.
    pub fn set(&mut self, path: &KeyPath, value: impl Into<String>) -> Result<()> {
        let Some((last, parents)) = path.split_last() else {
            return Err(Error::EmptyKeyPath);
        };

        let parent = self.namespace_mut(parents)?;
        if let Some(CatalogNode::Branch(_)) = parent.entry(last) {
            return Err(TypeConflict {
                path: path.clone(),
                expected: NodeKind::Leaf,
                found: NodeKind::Namespace,
            }
            .into());
        }
        parent.insert(last.clone(), CatalogNode::Leaf(value.into()));
        Ok(())
    }

    /// Make sure `path` exists as a namespace, creating it if needed.
    pub fn ensure_namespace(&mut self, path: &KeyPath) -> Result<()> {
        if path.is_empty() {
            return Err(Error::EmptyKeyPath);
        }
        self.namespace_mut(path.segments()).map(|_| ())
    }

    fn namespace_mut(&mut self, segments: &[String]) -> Result<&mut Catalog> {
        let mut current = self;
        for (depth, segment) in segments.iter().enumerate() {
            if current.entry(segment).is_none() {
                current.insert(segment.clone(), CatalogNode::Branch(Catalog::new()));
            }
            current = match current.entry_mut(segment) {
                Some(CatalogNode::Branch(child)) => child,
                _ => {
                    return Err(TypeConflict {
                        path: KeyPath::new(segments[..=depth].to_vec()),
                        expected: NodeKind::Namespace,
                        found: NodeKind::Leaf,
                    }
                    .into());
                }
            };
        }
        Ok(current)
    }

    /// Remove the node at `path`. Emptied ancestors are left in place; see
    /// [`Catalog::prune_empty`].
    pub fn delete_path(&mut self, path: &KeyPath) -> Option<CatalogNode> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = match current.entry_mut(segment)? {
                CatalogNode::Branch(child) => child,
                CatalogNode::Leaf(_) => return None,
            };
        }
        current.remove(last)
    }

    /// Recursively remove namespaces that hold no leaves. Returns how many
    /// namespaces were removed.
    pub fn prune_empty(&mut self) -> usize {
        let mut pruned = 0;
        for (_, node) in &mut self.entries {
            if let CatalogNode::Branch(child) = node {
                pruned += child.prune_empty();
            }
        }
        let before = self.entries.len();
        self.entries
            .retain(|(_, node)| !matches!(node, CatalogNode::Branch(child) if child.is_empty()));
        pruned + before - self.entries.len()
    }

    /// Flatten to `(dotted path, value)` pairs in pre-order.
    ///
    /// Namespaces appear with `None` before their children so that leaf and
    /// namespace paths can be told apart.
    pub fn flatten(&self) -> Vec<(String, Option<String>)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, Option<String>)>) {
        for (key, node) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match node {
                CatalogNode::Leaf(value) => out.push((path, Some(value.clone()))),
                CatalogNode::Branch(child) => {
                    out.push((path.clone(), None));
                    child.flatten_into(&path, out);
                }
            }
        }
    }

    /// Rebuild a catalog from [`Catalog::flatten`] output.
    pub fn from_flat<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Option<String>)>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::new();
        for (path, value) in entries {
            let path = KeyPath::parse(path.as_ref());
            match value {
                Some(value) => catalog.set(&path, value)?,
                None => catalog.ensure_namespace(&path)?,
            }
        }
        Ok(catalog)
    }

    /// All leaves with their full paths, in pre-order.
    pub fn leaves(&self) -> Vec<(KeyPath, &str)> {
        let mut out = Vec::new();
        self.collect_leaves(&KeyPath::default(), &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &KeyPath, out: &mut Vec<(KeyPath, &'a str)>) {
        for (key, node) in &self.entries {
            let path = prefix.child(key.clone());
            match node {
                CatalogNode::Leaf(value) => out.push((path, value)),
                CatalogNode::Branch(child) => child.collect_leaves(&path, out),
            }
        }
    }

    pub fn leaf_paths(&self) -> Vec<KeyPath> {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                CatalogNode::Leaf(_) => 1,
                CatalogNode::Branch(child) => child.leaf_count(),
            })
            .sum()
    }
}

impl FromIterator<(String, CatalogNode)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogNode)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (key, node) in iter {
            catalog.insert(key, node);
        }
        catalog
    }
}

impl IntoIterator for Catalog {
    type Item = (String, CatalogNode);
    type IntoIter = std::vec::IntoIter<(String, CatalogNode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
