use std::collections::HashMap;

use super::Container;
use crate::error::PatchError;
use crate::node::Node;

/// Unordered key to node mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMap(pub HashMap<String, Node>);

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Container for NodeMap {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, key: &str) -> Result<Option<&Node>, PatchError> {
        Ok(self.0.get(key))
    }

    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Node>, PatchError> {
        Ok(self.0.get_mut(key))
    }

    fn set(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        self.0.insert(key.to_string(), val);
        Ok(())
    }

    // No order to keep, so add is the same upsert as set.
    fn add(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        self.set(key, val)
    }

    fn remove(&mut self, key: &str) -> Result<Node, PatchError> {
        self.0.remove(key).ok_or_else(|| PatchError::not_found(key))
    }
}

impl FromIterator<(String, Node)> for NodeMap {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
