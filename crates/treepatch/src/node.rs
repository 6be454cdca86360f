//! The document tree.
//!
//! A [`Node`] is a scalar or one of the three container variants. Children
//! are owned exclusively, so the tree has no sharing and no cycles.

use serde_json::{Map, Number, Value};
use treepatch_pointer::OpPath;

use crate::container::{ContainerMut, ContainerRef, MapItem, NodeMap, NodeMapSlice, NodeSeq};
use crate::error::PatchError;
use crate::resolve::resolve;

// ── Scalar ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

// ── Node ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Mapping(NodeMap),
    OrderedMapping(NodeMapSlice),
    Sequence(NodeSeq),
}

/// The null scalar; also what sequence growth fills new slots with.
impl Default for Node {
    fn default() -> Self {
        Node::Scalar(Scalar::Null)
    }
}

impl Node {
    pub fn null() -> Self {
        Self::default()
    }

    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Node::Scalar(value.into())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Shared container view, or `None` for a scalar.
    pub fn container(&self) -> Option<ContainerRef<'_>> {
        match self {
            Node::Scalar(_) => None,
            Node::Mapping(m) => Some(ContainerRef::Mapping(m)),
            Node::OrderedMapping(m) => Some(ContainerRef::OrderedMapping(m)),
            Node::Sequence(s) => Some(ContainerRef::Sequence(s)),
        }
    }

    /// Exclusive container view, or `None` for a scalar.
    pub fn container_mut(&mut self) -> Option<ContainerMut<'_>> {
        match self {
            Node::Scalar(_) => None,
            Node::Mapping(m) => Some(ContainerMut::Mapping(m)),
            Node::OrderedMapping(m) => Some(ContainerMut::OrderedMapping(m)),
            Node::Sequence(s) => Some(ContainerMut::Sequence(s)),
        }
    }

    /// Look up the node a full pointer addresses. `""` is the node itself.
    ///
    /// ```
    /// use serde_json::json;
    /// use treepatch::Node;
    ///
    /// let doc = Node::from(json!({"a": [10, 20]}));
    /// assert_eq!(doc.pointer("/a/1").unwrap(), Some(&Node::from(json!(20))));
    /// assert_eq!(doc.pointer("/b").unwrap(), None);
    /// ```
    pub fn pointer(&self, pointer: &str) -> Result<Option<&Node>, PatchError> {
        let path = OpPath::parse(pointer)?;
        self.lookup(&path)
    }

    pub(crate) fn lookup(&self, path: &OpPath) -> Result<Option<&Node>, PatchError> {
        if path.is_root() {
            return Ok(Some(self));
        }
        let (container, key) = resolve(self, path)?;
        container.get(&key)
    }

    pub fn to_json(&self) -> Value {
        Value::from(self)
    }
}

// ── JSON bridge ───────────────────────────────────────────────────────────

impl From<Value> for Node {
    /// Objects become ordered mappings so key order survives a round trip.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Scalar(Scalar::Null),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Array(arr) => Node::Sequence(arr.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::OrderedMapping(NodeMapSlice(
                map.into_iter()
                    .map(|(key, v)| MapItem {
                        key,
                        node: Node::from(v),
                    })
                    .collect(),
            )),
        }
    }
}

impl From<&Scalar> for Value {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Scalar(s) => Value::from(s),
            Node::Mapping(m) => {
                Value::Object(m.0.iter().map(|(k, v)| (k.clone(), Value::from(v))).collect())
            }
            Node::OrderedMapping(m) => {
                let mut out = Map::with_capacity(m.0.len());
                for (key, node) in m.iter() {
                    out.insert(key.to_string(), Value::from(node));
                }
                Value::Object(out)
            }
            Node::Sequence(s) => Value::Array(s.0.iter().map(Value::from).collect()),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}
