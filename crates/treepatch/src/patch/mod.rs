//! Patch operations (RFC 6902) over the container contract.
//!
//! # Operations
//!
//! `add`, `remove`, `replace`, `move`, and `copy` are supported. `test` is
//! not; its comparison semantics are outside this crate.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, OpResult, Operation, PatchResult};
