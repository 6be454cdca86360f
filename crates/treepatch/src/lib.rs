//! Structural patch engine.
//!
//! Applies JSON Pointer (RFC 6901) addressed edits to a document tree whose
//! nodes are scalars, unordered mappings, order-preserving mappings, or
//! sequences. The interesting part is resolution: a pointer such as
//! `/a/b/2/c` is walked through nested containers down to the immediate
//! parent of the target, and the caller then issues exactly one of
//! get, set, add, or remove on that parent.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use treepatch::{resolve_mut, Container, Node, OpPath};
//!
//! let mut doc = Node::from(json!({"a": {"list": [1, 3]}}));
//! let path = OpPath::parse("/a/list/1").unwrap();
//!
//! let (mut parent, key) = resolve_mut(&mut doc, &path).unwrap();
//! parent.add(&key, Node::from(json!(2))).unwrap();
//!
//! assert_eq!(doc.to_json(), json!({"a": {"list": [1, 2, 3]}}));
//! ```
//!
//! The [`patch`] module layers RFC 6902 operations on top:
//!
//! ```
//! use serde_json::json;
//! use treepatch::{patch, Node};
//!
//! let ops = patch::from_json_patch(&json!([
//!     {"op": "add", "path": "/b", "value": 2},
//!     {"op": "move", "from": "/a", "path": "/c"}
//! ]))
//! .unwrap();
//! let result = patch::apply_ops(Node::from(json!({"a": 1})), &ops).unwrap();
//! assert_eq!(result.doc.to_json(), json!({"b": 2, "c": 1}));
//! ```

pub mod container;
pub mod error;
pub mod node;
pub mod patch;
pub mod resolve;

pub use container::{
    Container, ContainerKind, ContainerMut, ContainerRef, MapItem, NodeMap, NodeMapSlice, NodeSeq,
};
pub use error::PatchError;
pub use node::{Node, Scalar};
pub use resolve::{find_container, find_container_mut, resolve, resolve_mut};
pub use treepatch_pointer::{decode_patch_key, OpPath};
