use thiserror::Error;
use treepatch_pointer::PointerError;

/// Every failure the container layer, the resolver, or the patch applier
/// can report. Absence of a key is not an error; see [`crate::Container::get`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// The pointer was rejected before any traversal started.
    #[error("malformed pointer: {0}")]
    MalformedPointer(#[from] PointerError),
    /// An intermediate segment resolved to nothing.
    #[error("path does not exist: {path}")]
    PathNotFound { path: String },
    /// An intermediate segment resolved to a scalar.
    #[error("cannot descend into scalar at segment {segment:?} of {path}")]
    TypeMismatch { path: String, segment: String },
    #[error("unable to access invalid index: {index:?}")]
    InvalidIndex { index: String },
    #[error("unable to remove nonexistent key: {key:?}")]
    NotFound { key: String },
    #[error("invalid operation: {0}")]
    InvalidOp(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl PatchError {
    pub(crate) fn invalid_index(index: &str) -> Self {
        Self::InvalidIndex {
            index: index.to_string(),
        }
    }

    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }
}
