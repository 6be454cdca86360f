use super::Container;
use crate::error::PatchError;
use crate::node::Node;

#[derive(Debug, Clone, PartialEq)]
pub struct MapItem {
    pub key: String,
    pub node: Node,
}

/// Order-preserving key to node mapping, for documents whose key order must
/// survive a round trip.
///
/// Overwrites land in the existing slot; new keys go last. Keys are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMapSlice(pub Vec<MapItem>);

impl NodeMapSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|item| item.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|item| (item.key.as_str(), &item.node))
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|item| item.key == key)
    }

    /// Puts `key` back at slot `index`, clamped to the end. Used to undo a
    /// removal without moving the key to the back.
    pub(crate) fn insert_at(&mut self, index: usize, key: &str, val: Node) {
        if let Some(i) = self.position(key) {
            self.0.remove(i);
        }
        let index = index.min(self.0.len());
        self.0.insert(
            index,
            MapItem {
                key: key.to_string(),
                node: val,
            },
        );
    }

    fn upsert(&mut self, key: &str, val: Node) {
        match self.0.iter_mut().find(|item| item.key == key) {
            Some(item) => item.node = val,
            None => self.0.push(MapItem {
                key: key.to_string(),
                node: val,
            }),
        }
    }
}

impl Container for NodeMapSlice {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, key: &str) -> Result<Option<&Node>, PatchError> {
        Ok(self
            .0
            .iter()
            .find(|item| item.key == key)
            .map(|item| &item.node))
    }

    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Node>, PatchError> {
        Ok(self
            .0
            .iter_mut()
            .find(|item| item.key == key)
            .map(|item| &mut item.node))
    }

    fn set(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        self.upsert(key, val);
        Ok(())
    }

    fn add(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        self.upsert(key, val);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Node, PatchError> {
        match self.position(key) {
            Some(i) => Ok(self.0.remove(i).node),
            None => Err(PatchError::not_found(key)),
        }
    }
}

impl FromIterator<(String, Node)> for NodeMapSlice {
    /// Later duplicates overwrite earlier ones in place.
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, node) in iter {
            out.upsert(&key, node);
        }
        out
    }
}
