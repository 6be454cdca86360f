//! Type definitions for JSON Pointer.

use std::fmt;
use std::str::FromStr;

use crate::util::{decode_patch_key, format_json_pointer, is_child, parse_json_pointer};
use crate::validate::validate_json_pointer;
use crate::PointerError;

/// A decoded step in a path.
pub type PathStep = String;

/// A decoded path.
pub type Path = Vec<PathStep>;

/// An immutable, validated RFC 6901 pointer as it appears in a patch.
///
/// Segments are stored still escaped. The last segment is the terminal key
/// of an operation; every other segment is an intermediate traversal step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OpPath(String);

impl OpPath {
    /// Validate and wrap a pointer string.
    ///
    /// ```
    /// use treepatch_pointer::OpPath;
    ///
    /// assert!(OpPath::parse("/a/b").is_ok());
    /// assert!(OpPath::parse("").is_ok());
    /// assert!(OpPath::parse("a/b").is_err());
    /// ```
    pub fn parse(pointer: impl Into<String>) -> Result<Self, PointerError> {
        let pointer = pointer.into();
        validate_json_pointer(&pointer)?;
        Ok(Self(pointer))
    }

    /// The pointer addressing the whole document.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build a pointer from decoded path components.
    pub fn from_path(path: &[String]) -> Self {
        Self(format_json_pointer(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw, still-escaped segments. Empty for the root pointer.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').skip(1)
    }

    /// Split the pointer into intermediate segments and the terminal key,
    /// both still escaped.
    ///
    /// # Errors
    ///
    /// The root pointer has no terminal key and yields
    /// [`PointerError::NoTargetKey`].
    ///
    /// ```
    /// use treepatch_pointer::OpPath;
    ///
    /// let path = OpPath::parse("/a/b~1c/2").unwrap();
    /// let (parts, key) = path.decompose().unwrap();
    /// assert_eq!(parts, vec!["a", "b~1c"]);
    /// assert_eq!(key, "2");
    /// ```
    pub fn decompose(&self) -> Result<(Vec<&str>, &str), PointerError> {
        let mut parts: Vec<&str> = self.segments().collect();
        match parts.pop() {
            Some(key) => Ok((parts, key)),
            None => Err(PointerError::NoTargetKey),
        }
    }

    /// Decoded path components.
    pub fn to_path(&self) -> Path {
        parse_json_pointer(&self.0)
    }

    /// Decoded terminal key, if any.
    pub fn last_key(&self) -> Option<String> {
        self.segments().last().map(decode_patch_key)
    }

    /// True if `self` addresses a node strictly inside `other`.
    pub fn is_descendant_of(&self, other: &OpPath) -> bool {
        is_child(&other.to_path(), &self.to_path())
    }
}

impl fmt::Display for OpPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OpPath {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for OpPath {
    type Error = PointerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for OpPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
