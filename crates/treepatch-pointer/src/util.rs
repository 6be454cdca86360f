use crate::PointerError;

/// Decodes a JSON Pointer reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` first and `~0` with `~` second.
/// Reversing the order would turn `~01` into `/` instead of `~1`.
///
/// # Example
///
/// ```
/// use treepatch_pointer::decode_patch_key;
///
/// assert_eq!(decode_patch_key("a~0b"), "a~b");
/// assert_eq!(decode_patch_key("c~1d"), "c/d");
/// assert_eq!(decode_patch_key("~01"), "~1");
/// ```
pub fn decode_patch_key(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Encodes a key so it can be embedded in a JSON Pointer.
///
/// # Example
///
/// ```
/// use treepatch_pointer::encode_patch_key;
///
/// assert_eq!(encode_patch_key("a~b"), "a~0b");
/// assert_eq!(encode_patch_key("c/d"), "c~1d");
/// ```
pub fn encode_patch_key(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ first, or the ~ introduced by ~1 would be escaped again
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into decoded path components.
///
/// - Empty string returns an empty vec (the whole document)
/// - The leading `/` is stripped
/// - Each component is decoded
///
/// # Example
///
/// ```
/// use treepatch_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    match pointer.strip_prefix('/') {
        Some(rest) => rest.split('/').map(decode_patch_key).collect(),
        None if pointer.is_empty() => Vec::new(),
        None => pointer.split('/').map(decode_patch_key).collect(),
    }
}

/// Format decoded path components into a JSON Pointer string.
///
/// ```
/// use treepatch_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a/b".to_string(), "0".to_string()]), "/a~1b/0");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&encode_patch_key(component));
    }
    out
}

/// Check if `parent` path is a proper prefix of `child`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PointerError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<Vec<String>, PointerError> {
    match path.split_last() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(PointerError::NoParent),
    }
}

/// Check if a token is a valid sequence index: decimal digits with no
/// leading zero (except `"0"` itself).
///
/// ```
/// use treepatch_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Parse a sequence index token.
///
/// Returns `None` for anything [`is_valid_index`] rejects, and for digit
/// strings too large for `usize`.
pub fn parse_index(index: &str) -> Option<usize> {
    if !is_valid_index(index) {
        return None;
    }
    index.parse().ok()
}
