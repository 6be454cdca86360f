//! Patch apply logic.
//!
//! Every operation resolves its pointer once and then issues container calls
//! on the resolved parent; nothing here reaches into a container's backing
//! storage directly.

use treepatch_pointer::OpPath;

use super::types::{ApplyPatchOptions, OpResult, Operation, PatchResult};
use crate::container::{Container, ContainerMut, ContainerRef};
use crate::error::PatchError;
use crate::node::Node;
use crate::resolve::{resolve, resolve_mut};

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Node, path: &OpPath, value: Node) -> Result<Option<Node>, PatchError> {
    if path.is_root() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (mut parent, key) = resolve_mut(doc, path)?;
    parent.add(&key, value)?;
    Ok(None)
}

fn apply_remove(doc: &mut Node, path: &OpPath) -> Result<Node, PatchError> {
    let (mut parent, key) = resolve_mut(doc, path)?;
    parent.remove(&key)
}

fn apply_replace(doc: &mut Node, path: &OpPath, value: Node) -> Result<Option<Node>, PatchError> {
    if path.is_root() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (mut parent, key) = resolve_mut(doc, path)?;
    let old = parent
        .get(&key)?
        .cloned()
        .ok_or_else(|| PatchError::NotFound { key: key.clone() })?;
    parent.set(&key, value)?;
    Ok(Some(old))
}

fn apply_copy(doc: &mut Node, path: &OpPath, from: &OpPath) -> Result<Option<Node>, PatchError> {
    let src = doc
        .lookup(from)?
        .cloned()
        .ok_or_else(|| PatchError::NotFound {
            key: from.last_key().unwrap_or_default(),
        })?;
    apply_add(doc, path, src)
}

fn apply_move(doc: &mut Node, path: &OpPath, from: &OpPath) -> Result<Option<Node>, PatchError> {
    if path.is_descendant_of(from) {
        return Err(PatchError::InvalidOp(format!(
            "cannot move {from} into its own child {path}"
        )));
    }
    let slot = source_slot(doc, from);
    let value = apply_remove(doc, from)?;
    match apply_add(doc, path, value.clone()) {
        Ok(old) => Ok(old),
        Err(err) => {
            reinstate(doc, from, slot, value);
            Err(err)
        }
    }
}

/// Slot of `from` inside an ordered mapping, if that is its parent.
fn source_slot(doc: &Node, from: &OpPath) -> Option<usize> {
    match resolve(doc, from).ok()? {
        (ContainerRef::OrderedMapping(m), key) => m.position(&key),
        _ => None,
    }
}

/// Puts a removed node back where it came from after a failed `move`.
fn reinstate(doc: &mut Node, from: &OpPath, slot: Option<usize>, value: Node) {
    let restored = resolve_mut(doc, from).and_then(|(parent, key)| match (parent, slot) {
        (ContainerMut::OrderedMapping(m), Some(index)) => {
            m.insert_at(index, &key, value);
            Ok(())
        }
        (mut parent, _) => parent.add(&key, value),
    });
    if let Err(err) = restored {
        tracing::warn!(target: "treepatch::patch", from = %from, error = %err, "move source not restored");
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────

/// Apply a single operation in place, returning the node it displaced.
///
/// The displaced node is the removed value for `remove`, the overwritten
/// value for `replace`, and the previous document for a whole-document
/// `add` or `replace`.
pub fn apply_op(doc: &mut Node, op: &Operation) -> Result<Option<Node>, PatchError> {
    tracing::debug!(target: "treepatch::patch", op = op.op_name(), path = %op.path(), "apply");
    let result = match op {
        Operation::Add { path, value } => apply_add(doc, path, value.clone()),
        Operation::Remove { path } => apply_remove(doc, path).map(Some),
        Operation::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Operation::Move { from, path } => apply_move(doc, path, from),
        Operation::Copy { from, path } => apply_copy(doc, path, from),
    };
    result.inspect_err(|err| {
        tracing::debug!(target: "treepatch::patch", op = op.op_name(), path = %op.path(), error = %err, "failed");
    })
}

/// Apply a sequence of operations, returning the final document and per-op results.
///
/// Stops at the first failing operation. Earlier operations are not rolled back.
pub fn apply_ops(mut doc: Node, ops: &[Operation]) -> Result<PatchResult, PatchError> {
    let mut results = Vec::with_capacity(ops.len());
    for op in ops {
        let old = apply_op(&mut doc, op)?;
        results.push(OpResult {
            doc: doc.clone(),
            old,
        });
    }
    Ok(PatchResult { doc, res: results })
}

/// Apply a sequence of operations with options.
///
/// With `mutate: true` no intermediate snapshots are captured; otherwise this
/// is [`apply_ops`].
pub fn apply_patch(
    doc: Node,
    ops: &[Operation],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchError> {
    if options.mutate {
        let mut working = doc;
        for op in ops {
            apply_op(&mut working, op)?;
        }
        Ok(PatchResult {
            doc: working,
            res: vec![],
        })
    } else {
        apply_ops(doc, ops)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{NodeMap, NodeSeq};
    use serde_json::json;

    fn path(s: &str) -> OpPath {
        OpPath::parse(s).unwrap()
    }

    fn node(v: serde_json::Value) -> Node {
        Node::from(v)
    }

    #[test]
    fn add_to_mapping() {
        let mut doc = node(json!({"a": 1}));
        apply_op(&mut doc, &Operation::Add { path: path("/b"), value: node(json!(2)) }).unwrap();
        assert_eq!(doc.to_json(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn add_to_sequence_inserts() {
        let mut doc = node(json!([1, 2, 3]));
        apply_op(&mut doc, &Operation::Add { path: path("/1"), value: node(json!(99)) }).unwrap();
        assert_eq!(doc.to_json(), json!([1, 99, 2, 3]));
    }

    #[test]
    fn add_append_sequence() {
        let mut doc = node(json!({"list": [1, 2]}));
        apply_op(&mut doc, &Operation::Add { path: path("/list/-"), value: node(json!(3)) }).unwrap();
        assert_eq!(doc.to_json(), json!({"list": [1, 2, 3]}));
    }

    #[test]
    fn add_whole_document() {
        let mut doc = node(json!({"a": 1}));
        let old = apply_op(&mut doc, &Operation::Add { path: OpPath::root(), value: node(json!([])) }).unwrap();
        assert_eq!(doc.to_json(), json!([]));
        assert_eq!(old, Some(node(json!({"a": 1}))));
    }

    #[test]
    fn remove_from_mapping() {
        let mut doc = node(json!({"a": 1, "b": 2}));
        let old = apply_op(&mut doc, &Operation::Remove { path: path("/a") }).unwrap();
        assert_eq!(doc.to_json(), json!({"b": 2}));
        assert_eq!(old, Some(node(json!(1))));
    }

    #[test]
    fn remove_missing_key() {
        let mut doc = Node::Mapping(NodeMap::new());
        let err = apply_op(&mut doc, &Operation::Remove { path: path("/a") }).unwrap_err();
        assert_eq!(err, PatchError::NotFound { key: "a".to_string() });
    }

    #[test]
    fn remove_whole_document_is_malformed() {
        let mut doc = node(json!({"a": 1}));
        let err = apply_op(&mut doc, &Operation::Remove { path: OpPath::root() }).unwrap_err();
        assert!(matches!(err, PatchError::MalformedPointer(_)));
    }

    #[test]
    fn replace_keeps_ordered_position() {
        let mut doc = node(json!({"a": 1, "b": 2, "c": 3}));
        let old = apply_op(&mut doc, &Operation::Replace { path: path("/b"), value: node(json!(20)) }).unwrap();
        assert_eq!(old, Some(node(json!(2))));
        assert_eq!(
            serde_json::to_string(&doc.to_json()).unwrap(),
            r#"{"a":1,"b":20,"c":3}"#
        );
    }

    #[test]
    fn replace_missing_key_fails() {
        let mut doc = node(json!({"a": 1}));
        let err = apply_op(&mut doc, &Operation::Replace { path: path("/z"), value: node(json!(0)) }).unwrap_err();
        assert_eq!(err, PatchError::NotFound { key: "z".to_string() });
        assert_eq!(doc.to_json(), json!({"a": 1}));
    }

    #[test]
    fn replace_sequence_out_of_range_fails() {
        let mut doc = Node::Sequence(NodeSeq::from_iter([node(json!(1))]));
        let err = apply_op(&mut doc, &Operation::Replace { path: path("/3"), value: node(json!(0)) }).unwrap_err();
        assert_eq!(err, PatchError::InvalidIndex { index: "3".to_string() });
    }

    #[test]
    fn copy_op() {
        let mut doc = node(json!({"a": {"x": 1}, "b": {}}));
        apply_op(&mut doc, &Operation::Copy { from: path("/a/x"), path: path("/b/x") }).unwrap();
        assert_eq!(doc.to_json(), json!({"a": {"x": 1}, "b": {"x": 1}}));
    }

    #[test]
    fn copy_missing_source() {
        let mut doc = node(json!({"a": {}}));
        let err = apply_op(&mut doc, &Operation::Copy { from: path("/a/x"), path: path("/b") }).unwrap_err();
        assert_eq!(err, PatchError::NotFound { key: "x".to_string() });
    }

    #[test]
    fn move_op() {
        let mut doc = node(json!({"a": 1, "b": 2}));
        apply_op(&mut doc, &Operation::Move { from: path("/a"), path: path("/c") }).unwrap();
        assert_eq!(doc.to_json(), json!({"b": 2, "c": 1}));
    }

    #[test]
    fn move_within_sequence() {
        let mut doc = node(json!(["a", "b", "c"]));
        apply_op(&mut doc, &Operation::Move { from: path("/0"), path: path("/-") }).unwrap();
        assert_eq!(doc.to_json(), json!(["b", "c", "a"]));
    }

    #[test]
    fn move_into_own_child_fails() {
        let mut doc = node(json!({"a": {"b": {}}}));
        let err = apply_op(&mut doc, &Operation::Move { from: path("/a"), path: path("/a/b/c") }).unwrap_err();
        assert!(matches!(err, PatchError::InvalidOp(_)));
        assert_eq!(doc.to_json(), json!({"a": {"b": {}}}));
    }

    #[test]
    fn failed_move_to_missing_parent_keeps_source() {
        let mut doc = node(json!({"a": 1, "b": 2}));
        let err = apply_op(&mut doc, &Operation::Move { from: path("/a"), path: path("/missing/x") }).unwrap_err();
        assert_eq!(err, PatchError::PathNotFound { path: "/missing/x".to_string() });
        assert_eq!(
            serde_json::to_string(&doc.to_json()).unwrap(),
            r#"{"a":1,"b":2}"#
        );
    }

    #[test]
    fn failed_move_to_bad_index_keeps_source() {
        let mut doc = node(json!({"a": 1, "s": [0]}));
        let err = apply_op(&mut doc, &Operation::Move { from: path("/a"), path: path("/s/5") }).unwrap_err();
        assert_eq!(err, PatchError::InvalidIndex { index: "5".to_string() });
        assert_eq!(
            serde_json::to_string(&doc.to_json()).unwrap(),
            r#"{"a":1,"s":[0]}"#
        );
    }

    #[test]
    fn failed_move_out_of_sequence_keeps_order() {
        let mut doc = node(json!({"s": ["x", "y", "z"], "n": 3}));
        let err = apply_op(&mut doc, &Operation::Move { from: path("/s/1"), path: path("/n/k") }).unwrap_err();
        assert!(matches!(err, PatchError::TypeMismatch { .. }));
        assert_eq!(doc.to_json(), json!({"s": ["x", "y", "z"], "n": 3}));
    }

    #[test]
    fn apply_ops_sequence() {
        let doc = node(json!({"a": 1}));
        let ops = vec![
            Operation::Add { path: path("/b"), value: node(json!(2)) },
            Operation::Replace { path: path("/a"), value: node(json!(10)) },
        ];
        let result = apply_ops(doc, &ops).unwrap();
        assert_eq!(result.doc.to_json(), json!({"a": 10, "b": 2}));
        assert_eq!(result.res.len(), 2);
        assert_eq!(result.res[0].doc.to_json(), json!({"a": 1, "b": 2}));
        assert_eq!(result.res[1].old, Some(node(json!(1))));
    }

    #[test]
    fn apply_patch_mutate_skips_snapshots() {
        let ops = vec![Operation::Add { path: path("/x"), value: node(json!(true)) }];
        let options = ApplyPatchOptions { mutate: true };
        let result = apply_patch(node(json!({})), &ops, &options).unwrap();
        assert!(result.res.is_empty());
        assert_eq!(result.doc.to_json(), json!({"x": true}));
    }

    #[test]
    fn apply_ops_stops_at_first_error() {
        let ops = vec![
            Operation::Add { path: path("/a"), value: node(json!(1)) },
            Operation::Remove { path: path("/missing/x") },
            Operation::Add { path: path("/b"), value: node(json!(2)) },
        ];
        let err = apply_patch(node(json!({})), &ops, &ApplyPatchOptions::default()).unwrap_err();
        assert_eq!(err, PatchError::PathNotFound { path: "/missing/x".to_string() });
    }
}
