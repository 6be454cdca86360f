//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate provides the pointer half of treepatch: decoding reference
//! tokens, validating pointers, and decomposing an [`OpPath`] into the
//! intermediate segments a resolver walks plus the terminal key an operation
//! acts on.
//!
//! # Example
//!
//! ```
//! use treepatch_pointer::{decode_patch_key, parse_json_pointer, format_json_pointer, OpPath};
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let op_path = OpPath::parse("/a~1b/c").unwrap();
//! let (parts, key) = op_path.decompose().unwrap();
//! assert_eq!(decode_patch_key(parts[0]), "a/b");
//! assert_eq!(key, "c");
//! ```

use thiserror::Error;

pub mod types;
pub use types::{OpPath, Path, PathStep};

pub mod util;
pub use util::{
    decode_patch_key, encode_patch_key, format_json_pointer, is_child, is_valid_index,
    parent, parse_index, parse_json_pointer,
};

pub mod validate;
pub use validate::{validate_json_pointer, validate_path, MAX_PATH_LENGTH, MAX_POINTER_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("pointer is {0} bytes long, limit is {limit}", limit = MAX_POINTER_LENGTH)]
    PointerTooLong(usize),
    #[error("path has {0} segments, limit is {limit}", limit = MAX_PATH_LENGTH)]
    PathTooLong(usize),
    #[error("pointer addresses the whole document but a target key is required")]
    NoTargetKey,
    #[error("root path has no parent")]
    NoParent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_patch_key() {
        assert_eq!(decode_patch_key("foo"), "foo");
        assert_eq!(decode_patch_key("a~0b"), "a~b");
        assert_eq!(decode_patch_key("c~1d"), "c/d");
        assert_eq!(decode_patch_key("a~0b~1c"), "a~b/c");
        assert_eq!(decode_patch_key("~0~0"), "~~");
        assert_eq!(decode_patch_key("~1~1"), "//");
    }

    #[test]
    fn test_decode_order() {
        assert_eq!(decode_patch_key("~01"), "~1");
        assert_eq!(decode_patch_key("~10"), "/0");
    }

    #[test]
    fn test_encode_patch_key() {
        assert_eq!(encode_patch_key("foo"), "foo");
        assert_eq!(encode_patch_key("a~b/c"), "a~0b~1c");
        assert_eq!(encode_patch_key("~1"), "~01");
    }

    #[test]
    fn test_parse_json_pointer() {
        assert_eq!(parse_json_pointer(""), Vec::<String>::new());
        assert_eq!(parse_json_pointer("/"), vec![""]);
        assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
        assert_eq!(parse_json_pointer("/foo///"), vec!["foo", "", "", ""]);
        assert_eq!(parse_json_pointer("/a~0b/c~1d/1"), vec!["a~b", "c/d", "1"]);
    }

    #[test]
    fn test_format_json_pointer() {
        assert_eq!(format_json_pointer(&[]), "");
        assert_eq!(format_json_pointer(&["".to_string()]), "/");
        assert_eq!(
            format_json_pointer(&["a~b".to_string(), "c/d".to_string()]),
            "/a~0b/c~1d"
        );
    }

    #[test]
    fn test_parent() {
        let path = vec!["foo".to_string(), "bar".to_string()];
        assert_eq!(parent(&path).unwrap(), vec!["foo"]);
        assert_eq!(parent(&[]), Err(PointerError::NoParent));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("1.5"), None);
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }

    #[test]
    fn test_limit_messages() {
        assert_eq!(
            PointerError::PointerTooLong(MAX_POINTER_LENGTH + 1).to_string(),
            format!("pointer is {} bytes long, limit is {MAX_POINTER_LENGTH}", MAX_POINTER_LENGTH + 1)
        );
        assert_eq!(
            PointerError::PathTooLong(300).to_string(),
            format!("path has 300 segments, limit is {MAX_PATH_LENGTH}")
        );
    }

    #[test]
    fn test_roundtrip() {
        for pointer in ["", "/", "/foo", "/a~0b/c~1d/1", "/foo///", "/~0/~1"] {
            let path = parse_json_pointer(pointer);
            assert_eq!(format_json_pointer(&path), pointer, "roundtrip {pointer:?}");
        }
    }
}
