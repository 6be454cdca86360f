//! JSON codec for patch operations.
//!
//! Converts operations to and from `serde_json::Value` in RFC 6902 format.

use serde_json::{json, Map, Value};
use treepatch_pointer::OpPath;

use super::types::Operation;
use crate::error::PatchError;
use crate::node::Node;

// ── Field helpers ─────────────────────────────────────────────────────────

fn decode_path(obj: &Map<String, Value>, field: &str) -> Result<OpPath, PatchError> {
    let s = obj
        .get(field)
        .ok_or_else(|| PatchError::InvalidOp(format!("missing \"{field}\"")))?
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp(format!("\"{field}\" must be a string")))?;
    Ok(OpPath::parse(s)?)
}

fn decode_value(obj: &Map<String, Value>) -> Result<Node, PatchError> {
    obj.get("value")
        .cloned()
        .map(Node::from)
        .ok_or_else(|| PatchError::InvalidOp("missing \"value\"".into()))
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Parse one operation object.
///
/// # Errors
///
/// - [`PatchError::InvalidOp`] for a non-object, a missing or unknown `op`,
///   or a missing field
/// - [`PatchError::MalformedPointer`] for an invalid `path` or `from`
/// - [`PatchError::Unsupported`] for `test`
pub fn from_json(v: &Value) -> Result<Operation, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing \"op\"".into()))?;

    match op {
        "add" => Ok(Operation::Add {
            path: decode_path(obj, "path")?,
            value: decode_value(obj)?,
        }),
        "remove" => Ok(Operation::Remove {
            path: decode_path(obj, "path")?,
        }),
        "replace" => Ok(Operation::Replace {
            path: decode_path(obj, "path")?,
            value: decode_value(obj)?,
        }),
        "move" => Ok(Operation::Move {
            from: decode_path(obj, "from")?,
            path: decode_path(obj, "path")?,
        }),
        "copy" => Ok(Operation::Copy {
            from: decode_path(obj, "from")?,
            path: decode_path(obj, "path")?,
        }),
        "test" => Err(PatchError::Unsupported("test".into())),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Parse a patch document (a JSON array of operations).
pub fn from_json_patch(v: &Value) -> Result<Vec<Operation>, PatchError> {
    v.as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?
        .iter()
        .map(from_json)
        .collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

pub fn to_json(op: &Operation) -> Value {
    match op {
        Operation::Add { path, value } => json!({
            "op": "add",
            "path": path.as_str(),
            "value": value.to_json()
        }),
        Operation::Remove { path } => json!({
            "op": "remove",
            "path": path.as_str()
        }),
        Operation::Replace { path, value } => json!({
            "op": "replace",
            "path": path.as_str(),
            "value": value.to_json()
        }),
        Operation::Move { from, path } => json!({
            "op": "move",
            "from": from.as_str(),
            "path": path.as_str()
        }),
        Operation::Copy { from, path } => json!({
            "op": "copy",
            "from": from.as_str(),
            "path": path.as_str()
        }),
    }
}

pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rfc6902_operations() {
        let patch = json!([
            {"op": "add", "path": "/a/-", "value": {"k": [1]}},
            {"op": "remove", "path": "/b"},
            {"op": "replace", "path": "/c~1d", "value": null},
            {"op": "move", "from": "/x", "path": "/y"},
            {"op": "copy", "from": "/y", "path": "/z"}
        ]);
        let ops = from_json_patch(&patch).unwrap();
        assert_eq!(
            ops.iter().map(Operation::op_name).collect::<Vec<_>>(),
            vec!["add", "remove", "replace", "move", "copy"]
        );
        assert_eq!(ops[2].path().as_str(), "/c~1d");
        assert_eq!(ops[3].from_path().map(OpPath::as_str), Some("/x"));
        assert_eq!(to_json_patch(&ops), patch);
    }

    #[test]
    fn test_op_is_unsupported() {
        let err = from_json(&json!({"op": "test", "path": "/a", "value": 1})).unwrap_err();
        assert_eq!(err, PatchError::Unsupported("test".into()));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(from_json(&json!([])), Err(PatchError::InvalidOp(_))));
        assert!(matches!(from_json(&json!({"path": "/a"})), Err(PatchError::InvalidOp(_))));
        assert!(matches!(
            from_json(&json!({"op": "frob", "path": "/a"})),
            Err(PatchError::InvalidOp(_))
        ));
        assert!(matches!(
            from_json(&json!({"op": "add", "path": "/a"})),
            Err(PatchError::InvalidOp(_))
        ));
        assert!(matches!(
            from_json(&json!({"op": "move", "path": "/a"})),
            Err(PatchError::InvalidOp(_))
        ));
        assert!(matches!(from_json_patch(&json!({})), Err(PatchError::InvalidOp(_))));
    }

    #[test]
    fn rejects_relative_pointer() {
        let err = from_json(&json!({"op": "remove", "path": "a/b"})).unwrap_err();
        assert!(matches!(err, PatchError::MalformedPointer(_)));
    }
}
