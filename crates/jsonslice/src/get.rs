//! Path-directed partial extraction: locate a target value by walking the
//! path against the raw bytes, skipping every sibling subtree, and only
//! decode the value the walk lands on.
use crate::decoder::{self, skip_ws};
use crate::error::{GetError, SyntaxError};
use crate::path::PathComponent;
use crate::skip;
use crate::value::Value;

/// The outcome of walking a (possibly empty) remaining path against one
/// position in the document.
enum Resolved {
    /// The remaining path is empty: the target is the value at this
    /// position, not yet decoded.
    AtValue(usize),
    /// The path could not be resolved; carries the last byte position
    /// visited during the unsuccessful search.
    NotFound(usize),
}

pub(crate) fn get(path: &[PathComponent], input: &[u8]) -> Result<Value, GetError> {
    match locate(path, input, 0)? {
        Resolved::AtValue(pos) => {
            let (value, _) = decoder::parse_value(input, pos)?;
            Ok(value)
        }
        Resolved::NotFound(pos) => Err(GetError::NotFound(pos)),
    }
}

/// Walks `path` against the value starting at `pos`. A path component
/// that cannot apply to the value it's matched against (an index against
/// an object, a key against an array, either against a scalar) simply
/// never matches as the scan proceeds, and falls out as [`Resolved::NotFound`]
/// without any special-cased shape check.
fn locate(path: &[PathComponent], bytes: &[u8], pos: usize) -> Result<Resolved, SyntaxError> {
    let pos = skip_ws(bytes, pos);
    if path.is_empty() {
        return Ok(Resolved::AtValue(pos));
    }
    match bytes.get(pos) {
        Some(b'{') => locate_in_object(path, bytes, pos + 1),
        Some(b'[') => locate_in_array(path, bytes, pos + 1),
        Some(_) => skip::skip_value(bytes, pos).map(Resolved::NotFound),
        None => Err(SyntaxError::UnexpectedEof(bytes.len())),
    }
}

/// `pos` points just after the opening `{`. Scans every member, skipping
/// values that don't match `path[0]`. On a key match the value isn't
/// decoded immediately: the object mapping is last-key-wins, so a later
/// duplicate of the same key must still win, exactly as it does in
/// [`crate::decode`]. The scan remembers the most recent match and only
/// recurses into it once the whole object has been scanned.
fn locate_in_object(
    path: &[PathComponent],
    bytes: &[u8],
    pos: usize,
) -> Result<Resolved, SyntaxError> {
    let target_key = match &path[0] {
        PathComponent::Key(key) => Some(key.as_str()),
        PathComponent::Index(_) => None,
    };

    let mut pos = skip_ws(bytes, pos);
    let mut last_match = None;

    if bytes.get(pos) == Some(&b'}') {
        return Ok(Resolved::NotFound(pos));
    }

    loop {
        if bytes.get(pos) != Some(&b'"') {
            return Err(SyntaxError::InvalidCharacter(pos));
        }
        let (key, after_key) = crate::string::parse(bytes, pos + 1)?;

        pos = skip_ws(bytes, after_key);
        if bytes.get(pos) != Some(&b':') {
            return Err(SyntaxError::InvalidCharacter(pos));
        }
        let value_start = pos + 1;

        if target_key == Some(key.as_str()) {
            last_match = Some(value_start);
        }

        pos = skip::skip_value(bytes, value_start)?;
        pos = skip_ws(bytes, pos);
        match bytes.get(pos) {
            Some(b',') => pos = skip_ws(bytes, pos + 1),
            Some(b'}') => {
                return match last_match {
                    Some(value_start) => locate(&path[1..], bytes, value_start),
                    None => Ok(Resolved::NotFound(pos)),
                };
            }
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}

/// `pos` points just after the opening `[`. Array indices are 1-based:
/// the first element is index `1`.
fn locate_in_array(
    path: &[PathComponent],
    bytes: &[u8],
    pos: usize,
) -> Result<Resolved, SyntaxError> {
    let target_index = match &path[0] {
        PathComponent::Index(index) => Some(*index),
        PathComponent::Key(_) => None,
    };

    let mut pos = skip_ws(bytes, pos);
    if bytes.get(pos) == Some(&b']') {
        return Ok(Resolved::NotFound(pos));
    }

    let mut current = 1usize;
    loop {
        let value_start = pos;
        if target_index == Some(current) {
            return locate(&path[1..], bytes, value_start);
        }

        pos = skip::skip_value(bytes, value_start)?;
        pos = skip_ws(bytes, pos);
        match bytes.get(pos) {
            Some(b',') => {
                pos = skip_ws(bytes, pos + 1);
                current += 1;
            }
            Some(b']') => return Ok(Resolved::NotFound(pos)),
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::path;

    use super::*;

    #[test]
    fn gets_array_element_by_one_based_index() {
        let doc = br#"{"test":[1,2,3,4,5]}"#;
        let value = get(&path!["test", 4], doc).unwrap();
        assert_eq!(value, Value::Integer(4));
    }

    #[test]
    fn gets_whole_array() {
        let doc = br#"{"test":[1,2,3,4,5]}"#;
        let value = get(&path!["test"], doc).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3),
                Value::Integer(4),
                Value::Integer(5),
            ])
        );
    }

    #[test]
    fn gets_nested_object_value() {
        let doc = br#"{"a":1,"b":{"c":"x"}}"#;
        let value = get(&path!["b", "c"], doc).unwrap();
        assert_eq!(value, Value::String("x".into()));
    }

    #[test]
    fn missing_key_reports_end_of_object_byte() {
        let doc = br#"{"a":1}"#;
        let err = get(&path!["b"], doc).unwrap_err();
        assert_eq!(err, GetError::NotFound(6));
    }

    #[test]
    fn empty_path_decodes_whole_document() {
        let doc = br#"{"a":1}"#;
        let value = get(&[], doc).unwrap();
        assert_eq!(value, crate::decode(doc).unwrap());
    }

    #[test]
    fn key_against_array_never_matches() {
        let doc = br#"[1,2,3]"#;
        assert!(matches!(
            get(&path!["a"], doc),
            Err(GetError::NotFound(_))
        ));
    }

    #[test]
    fn index_against_object_never_matches() {
        let doc = br#"{"a":1}"#;
        assert!(matches!(get(&path![1], doc), Err(GetError::NotFound(_))));
    }

    #[test]
    fn duplicate_key_get_agrees_with_decode_last_key_wins() {
        let doc = br#"{"a":1,"a":2}"#;
        assert_eq!(get(&path!["a"], doc).unwrap(), Value::Integer(2));
    }

    #[test]
    fn malformed_input_before_target_is_malformed_not_not_found() {
        let doc = br#"{"a" 1}"#;
        assert!(matches!(get(&path!["a"], doc), Err(GetError::Malformed(_))));
    }

    #[test]
    fn out_of_range_index_reports_end_of_array_byte() {
        let doc = br#"[1,2,3]"#;
        let err = get(&path![10], doc).unwrap_err();
        assert_eq!(err, GetError::NotFound(6));
    }
}
