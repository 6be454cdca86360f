//! Validation functions for JSON Pointer.

use crate::PointerError;

/// Maximum allowed pointer string length.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - The pointer exceeds [`MAX_POINTER_LENGTH`] bytes
/// - The pointer has more than [`MAX_PATH_LENGTH`] segments
///
/// # Example
///
/// ```
/// use treepatch_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::MissingLeadingSlash(pointer.to_string()));
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PointerError::PointerTooLong(pointer.len()));
    }
    let depth = pointer.bytes().filter(|&b| b == b'/').count();
    if depth > MAX_PATH_LENGTH {
        return Err(PointerError::PathTooLong(depth));
    }
    Ok(())
}

/// Validate a decoded path.
///
/// ```
/// use treepatch_pointer::validate_path;
///
/// validate_path(&["foo".to_string(), "bar".to_string()]).unwrap();
/// validate_path(&(0..300).map(|i| i.to_string()).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[String]) -> Result<(), PointerError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PointerError::PathTooLong(path.len()));
    }
    Ok(())
}
