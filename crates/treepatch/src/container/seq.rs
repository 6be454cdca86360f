use treepatch_pointer::parse_index;

use super::Container;
use crate::error::PatchError;
use crate::node::Node;

/// Token that addresses the slot one past the last element.
pub const APPEND_TOKEN: &str = "-";

/// Dense, zero-based sequence of nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeSeq(pub Vec<Node>);

impl NodeSeq {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(key: &str) -> Result<usize, PatchError> {
        parse_index(key).ok_or_else(|| PatchError::invalid_index(key))
    }
}

impl Container for NodeSeq {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, key: &str) -> Result<Option<&Node>, PatchError> {
        let i = Self::index(key)?;
        match self.0.get(i) {
            Some(node) => Ok(Some(node)),
            None => Err(PatchError::invalid_index(key)),
        }
    }

    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Node>, PatchError> {
        let i = Self::index(key)?;
        match self.0.get_mut(i) {
            Some(node) => Ok(Some(node)),
            None => Err(PatchError::invalid_index(key)),
        }
    }

    /// Overwrites slot `key`, growing the sequence with null nodes first
    /// when `key` is past the end.
    fn set(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        let i = Self::index(key)?;
        let needed = i.checked_add(1).ok_or_else(|| PatchError::invalid_index(key))?;
        if needed > self.0.len() {
            self.0.resize_with(needed, Node::default);
        }
        // Unreachable after the resize above; kept for callers that bypass it.
        let slot = self
            .0
            .get_mut(i)
            .ok_or_else(|| PatchError::invalid_index(key))?;
        *slot = val;
        Ok(())
    }

    /// Inserts before `key`, shifting later elements right. `-` appends.
    fn add(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        if key == APPEND_TOKEN {
            self.0.push(val);
            return Ok(());
        }
        let i = Self::index(key)?;
        if i > self.0.len() {
            return Err(PatchError::invalid_index(key));
        }
        self.0.insert(i, val);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Node, PatchError> {
        let i = Self::index(key)?;
        if i >= self.0.len() {
            return Err(PatchError::invalid_index(key));
        }
        Ok(self.0.remove(i))
    }
}

impl FromIterator<Node> for NodeSeq {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
