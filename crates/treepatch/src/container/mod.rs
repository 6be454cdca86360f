//! The container contract and its three backing representations.
//!
//! Every variant answers the same four calls. `get` distinguishes a missing
//! key (`Ok(None)`) from a malformed one (`Err`); `set` and `add` differ only
//! for sequences, where `add` inserts and `set` overwrites.
//!
//! [`ContainerRef`] and [`ContainerMut`] are the closed set of views a
//! [`Node`] hands out, so dispatch over the variants is an exhaustive match.

mod map;
mod map_slice;
mod seq;

pub use map::NodeMap;
pub use map_slice::{MapItem, NodeMapSlice};
pub use seq::{NodeSeq, APPEND_TOKEN};

use crate::error::PatchError;
use crate::node::Node;

/// Key-addressed access to child nodes.
///
/// Keys arrive already decoded. For sequences they are decimal indices, plus
/// `-` for [`Container::add`].
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The child at `key`, or `None` if a mapping has no such key.
    fn get(&self, key: &str) -> Result<Option<&Node>, PatchError>;

    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Node>, PatchError>;

    fn set(&mut self, key: &str, val: Node) -> Result<(), PatchError>;

    fn add(&mut self, key: &str, val: Node) -> Result<(), PatchError>;

    /// Removes and returns the child at `key`.
    fn remove(&mut self, key: &str) -> Result<Node, PatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Mapping,
    OrderedMapping,
    Sequence,
}

// ── Shared view ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum ContainerRef<'a> {
    Mapping(&'a NodeMap),
    OrderedMapping(&'a NodeMapSlice),
    Sequence(&'a NodeSeq),
}

impl<'a> ContainerRef<'a> {
    pub fn kind(&self) -> ContainerKind {
        match self {
            ContainerRef::Mapping(_) => ContainerKind::Mapping,
            ContainerRef::OrderedMapping(_) => ContainerKind::OrderedMapping,
            ContainerRef::Sequence(_) => ContainerKind::Sequence,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ContainerRef::Mapping(m) => m.len(),
            ContainerRef::OrderedMapping(m) => m.len(),
            ContainerRef::Sequence(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same as [`Container::get`], borrowing for the view's full lifetime.
    pub fn get(&self, key: &str) -> Result<Option<&'a Node>, PatchError> {
        match *self {
            ContainerRef::Mapping(m) => m.get(key),
            ContainerRef::OrderedMapping(m) => m.get(key),
            ContainerRef::Sequence(s) => s.get(key),
        }
    }
}

// ── Exclusive view ────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ContainerMut<'a> {
    Mapping(&'a mut NodeMap),
    OrderedMapping(&'a mut NodeMapSlice),
    Sequence(&'a mut NodeSeq),
}

impl<'a> ContainerMut<'a> {
    pub fn kind(&self) -> ContainerKind {
        match self {
            ContainerMut::Mapping(_) => ContainerKind::Mapping,
            ContainerMut::OrderedMapping(_) => ContainerKind::OrderedMapping,
            ContainerMut::Sequence(_) => ContainerKind::Sequence,
        }
    }

    /// Consumes the view and hands out the child with the view's lifetime,
    /// which is what lets the resolver walk down without re-borrowing the root.
    pub fn into_child(self, key: &str) -> Result<Option<&'a mut Node>, PatchError> {
        match self {
            ContainerMut::Mapping(m) => m.get_mut(key),
            ContainerMut::OrderedMapping(m) => m.get_mut(key),
            ContainerMut::Sequence(s) => s.get_mut(key),
        }
    }

    pub fn view(&self) -> ContainerRef<'_> {
        match self {
            ContainerMut::Mapping(m) => ContainerRef::Mapping(m),
            ContainerMut::OrderedMapping(m) => ContainerRef::OrderedMapping(m),
            ContainerMut::Sequence(s) => ContainerRef::Sequence(s),
        }
    }
}

impl Container for ContainerMut<'_> {
    fn len(&self) -> usize {
        self.view().len()
    }

    fn get(&self, key: &str) -> Result<Option<&Node>, PatchError> {
        match self {
            ContainerMut::Mapping(m) => m.get(key),
            ContainerMut::OrderedMapping(m) => m.get(key),
            ContainerMut::Sequence(s) => s.get(key),
        }
    }

    fn get_mut(&mut self, key: &str) -> Result<Option<&mut Node>, PatchError> {
        match self {
            ContainerMut::Mapping(m) => m.get_mut(key),
            ContainerMut::OrderedMapping(m) => m.get_mut(key),
            ContainerMut::Sequence(s) => s.get_mut(key),
        }
    }

    fn set(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        match self {
            ContainerMut::Mapping(m) => m.set(key, val),
            ContainerMut::OrderedMapping(m) => m.set(key, val),
            ContainerMut::Sequence(s) => s.set(key, val),
        }
    }

    fn add(&mut self, key: &str, val: Node) -> Result<(), PatchError> {
        match self {
            ContainerMut::Mapping(m) => m.add(key, val),
            ContainerMut::OrderedMapping(m) => m.add(key, val),
            ContainerMut::Sequence(s) => s.add(key, val),
        }
    }

    fn remove(&mut self, key: &str) -> Result<Node, PatchError> {
        match self {
            ContainerMut::Mapping(m) => m.remove(key),
            ContainerMut::OrderedMapping(m) => m.remove(key),
            ContainerMut::Sequence(s) => s.remove(key),
        }
    }
}
