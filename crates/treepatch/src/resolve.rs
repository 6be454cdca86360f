//! Pointer resolution.
//!
//! Walks every segment but the last through nested containers and returns the
//! immediate parent of the target together with the decoded terminal key.
//! Resolution never touches the target itself, so the caller can follow up
//! with any of the four container calls on the same pair.

use treepatch_pointer::{decode_patch_key, OpPath};

use crate::container::{ContainerMut, ContainerRef};
use crate::error::PatchError;
use crate::node::Node;

fn path_not_found(path: &OpPath) -> PatchError {
    PatchError::PathNotFound {
        path: path.to_string(),
    }
}

fn type_mismatch(path: &OpPath, segment: String) -> PatchError {
    PatchError::TypeMismatch {
        path: path.to_string(),
        segment,
    }
}

fn log_failure(path: &OpPath, err: &PatchError) {
    tracing::debug!(target: "treepatch::resolve", pointer = %path, error = %err, "resolution failed");
}

/// Resolve `path` against a shared root container.
///
/// # Errors
///
/// - [`PatchError::MalformedPointer`] if `path` has no terminal key
/// - [`PatchError::PathNotFound`] if an intermediate segment is absent
/// - [`PatchError::TypeMismatch`] if an intermediate segment is a scalar
/// - [`PatchError::InvalidIndex`] if a sequence segment is not a valid index
pub fn find_container<'a>(
    root: ContainerRef<'a>,
    path: &OpPath,
) -> Result<(ContainerRef<'a>, String), PatchError> {
    path.decompose()
        .map_err(PatchError::from)
        .and_then(|(parts, key)| descend(root, path, &parts, key))
        .inspect_err(|err| log_failure(path, err))
}

fn descend<'a>(
    root: ContainerRef<'a>,
    path: &OpPath,
    parts: &[&str],
    key: &str,
) -> Result<(ContainerRef<'a>, String), PatchError> {
    let mut current = root;

    for part in parts {
        let segment = decode_patch_key(part);
        tracing::trace!(target: "treepatch::resolve", pointer = %path, segment = %segment, "descend");
        let node = current.get(&segment)?.ok_or_else(|| path_not_found(path))?;
        current = node
            .container()
            .ok_or_else(|| type_mismatch(path, segment))?;
    }

    Ok((current, decode_patch_key(key)))
}

/// Resolve `path` against an exclusive root container. Same rules as
/// [`find_container`].
///
/// ```
/// use serde_json::json;
/// use treepatch::{find_container_mut, Container, Node, OpPath};
///
/// let mut doc = Node::from(json!({"a": {"b": 5}}));
/// let path = OpPath::parse("/a/b").unwrap();
/// let (mut parent, key) = find_container_mut(doc.container_mut().unwrap(), &path).unwrap();
/// assert_eq!(key, "b");
/// parent.set(&key, Node::from(json!(6))).unwrap();
/// assert_eq!(doc.to_json(), json!({"a": {"b": 6}}));
/// ```
pub fn find_container_mut<'a>(
    root: ContainerMut<'a>,
    path: &OpPath,
) -> Result<(ContainerMut<'a>, String), PatchError> {
    path.decompose()
        .map_err(PatchError::from)
        .and_then(|(parts, key)| descend_mut(root, path, &parts, key))
        .inspect_err(|err| log_failure(path, err))
}

fn descend_mut<'a>(
    root: ContainerMut<'a>,
    path: &OpPath,
    parts: &[&str],
    key: &str,
) -> Result<(ContainerMut<'a>, String), PatchError> {
    let mut current = root;

    for part in parts {
        let segment = decode_patch_key(part);
        tracing::trace!(target: "treepatch::resolve", pointer = %path, segment = %segment, "descend");
        let node = current
            .into_child(&segment)?
            .ok_or_else(|| path_not_found(path))?;
        current = node
            .container_mut()
            .ok_or_else(|| type_mismatch(path, segment))?;
    }

    Ok((current, decode_patch_key(key)))
}

/// [`find_container`] starting from a document node. A scalar document has
/// nothing to descend into and fails with [`PatchError::TypeMismatch`] on the
/// first segment.
pub fn resolve<'a>(doc: &'a Node, path: &OpPath) -> Result<(ContainerRef<'a>, String), PatchError> {
    let root = doc.container();
    path.decompose()
        .map_err(PatchError::from)
        .and_then(|(parts, key)| match root {
            Some(root) => descend(root, path, &parts, key),
            None => Err(type_mismatch(path, first_segment(&parts, key))),
        })
        .inspect_err(|err| log_failure(path, err))
}

/// [`find_container_mut`] starting from a document node.
pub fn resolve_mut<'a>(
    doc: &'a mut Node,
    path: &OpPath,
) -> Result<(ContainerMut<'a>, String), PatchError> {
    let root = doc.container_mut();
    path.decompose()
        .map_err(PatchError::from)
        .and_then(|(parts, key)| match root {
            Some(root) => descend_mut(root, path, &parts, key),
            None => Err(type_mismatch(path, first_segment(&parts, key))),
        })
        .inspect_err(|err| log_failure(path, err))
}

fn first_segment(parts: &[&str], key: &str) -> String {
    decode_patch_key(parts.first().copied().unwrap_or(key))
}
