//! Attribute store
//!
//! Node-addressable attribute storage inside an open hierarchical
//! metadata container.

use std::collections::BTreeMap;

use crate::error::MetadataError;
use crate::metadata::value::AttrValue;

/// Insertion-ordered map of attribute keys to scalar values.
///
/// Re-setting an existing key replaces its value but keeps its original
/// position, so iteration always reflects first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, last write wins
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttrMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// Write access to node-scoped attribute mappings, addressed by node path
pub trait AttributeStore {
    /// Set one attribute on the node at `path`
    fn set_attr(&mut self, path: &str, key: &str, value: AttrValue) -> Result<(), MetadataError>;

    /// Read one attribute from the node at `path`
    fn get_attr(&self, path: &str, key: &str) -> Result<Option<AttrValue>, MetadataError>;
}

/// An open, in-memory hierarchical attribute container.
///
/// Nodes are addressed by absolute slash-separated paths ("/", "/a/b").
/// The root node always exists; other nodes must be created before their
/// attributes can be written, and addressing a missing node is an error.
#[derive(Debug, Default)]
pub struct AttrTree {
    root: Node,
}

#[derive(Debug, Default)]
struct Node {
    attrs: AttrMap,
    children: BTreeMap<String, Node>,
}

impl AttrTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the node at `path`, creating missing intermediate nodes
    pub fn create_node(&mut self, path: &str) -> Result<(), MetadataError> {
        let segments = split_node_path(path)?;
        if segments.is_empty() {
            return Err(MetadataError::NodeExists(path.to_string()));
        }

        let mut node = &mut self.root;
        let last = segments.len() - 1;
        for (i, segment) in segments.iter().enumerate() {
            if i == last && node.children.contains_key(*segment) {
                return Err(MetadataError::NodeExists(path.to_string()));
            }
            node = node.children.entry(segment.to_string()).or_default();
        }
        Ok(())
    }

    /// Check whether a node exists at `path`
    pub fn has_node(&self, path: &str) -> bool {
        self.find(path).is_ok()
    }

    /// The attribute mapping of the node at `path`
    pub fn attrs(&self, path: &str) -> Result<&AttrMap, MetadataError> {
        Ok(&self.find(path)?.attrs)
    }

    fn find(&self, path: &str) -> Result<&Node, MetadataError> {
        let mut node = &self.root;
        for segment in split_node_path(path)? {
            node = node
                .children
                .get(segment)
                .ok_or_else(|| MetadataError::NodeNotFound(path.to_string()))?;
        }
        Ok(node)
    }

    fn find_mut(&mut self, path: &str) -> Result<&mut Node, MetadataError> {
        let mut node = &mut self.root;
        for segment in split_node_path(path)? {
            node = node
                .children
                .get_mut(segment)
                .ok_or_else(|| MetadataError::NodeNotFound(path.to_string()))?;
        }
        Ok(node)
    }
}

impl AttributeStore for AttrTree {
    fn set_attr(&mut self, path: &str, key: &str, value: AttrValue) -> Result<(), MetadataError> {
        self.find_mut(path)?.attrs.set(key, value);
        Ok(())
    }

    fn get_attr(&self, path: &str, key: &str) -> Result<Option<AttrValue>, MetadataError> {
        Ok(self.find(path)?.attrs.get(key).cloned())
    }
}

/// Split a node path into segments; "" and "/" address the root
fn split_node_path(path: &str) -> Result<Vec<&str>, MetadataError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(MetadataError::InvalidNodePath(path.to_string()));
    }
    Ok(segments)
}
