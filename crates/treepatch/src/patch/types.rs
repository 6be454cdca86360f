//! Core types for the patch layer.

use treepatch_pointer::OpPath;

use crate::node::Node;

// ── Operation ─────────────────────────────────────────────────────────────

/// An RFC 6902 operation that edits the tree through the container contract.
///
/// `test` is not represented; the codec rejects it.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add { path: OpPath, value: Node },
    Remove { path: OpPath },
    Replace { path: OpPath, value: Node },
    Move { from: OpPath, path: OpPath },
    Copy { from: OpPath, path: OpPath },
}

impl Operation {
    pub fn op_name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
            Operation::Replace { .. } => "replace",
            Operation::Move { .. } => "move",
            Operation::Copy { .. } => "copy",
        }
    }

    /// The target pointer of the operation.
    pub fn path(&self) -> &OpPath {
        match self {
            Operation::Add { path, .. }
            | Operation::Remove { path }
            | Operation::Replace { path, .. }
            | Operation::Move { path, .. }
            | Operation::Copy { path, .. } => path,
        }
    }

    /// The source pointer of `move` and `copy`.
    pub fn from_path(&self) -> Option<&OpPath> {
        match self {
            Operation::Move { from, .. } | Operation::Copy { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Node,
    /// The node the operation displaced, if any.
    pub old: Option<Node>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Node,
    pub res: Vec<OpResult>,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, apply in place without recording per-operation snapshots.
    /// If false, record the document after every operation.
    pub mutate: bool,
}
