//! A duplicate-key-preserving decode: an alternate entry point for callers
//! who need every object member as written, not just the one
//! [`crate::decode`]'s last-key-wins mapping keeps.
use alloc::{string::String, vec::Vec};

use crate::decoder::skip_ws;
use crate::error::{ParseError, SyntaxError};
use crate::number::{self, Number};
use crate::string;

/// A decoded value that preserves every object member in document order,
/// including repeated keys.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderedValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<OrderedValue>),
    Object(OrderedObject),
}

/// An object's members in document order. Unlike [`crate::Map`], a
/// repeated key appears as two separate entries rather than overwriting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderedObject {
    entries: Vec<(String, OrderedValue)>,
}

impl OrderedObject {
    /// The object's members, in document order.
    #[must_use]
    pub fn entries(&self) -> &[(String, OrderedValue)] {
        &self.entries
    }

    /// Folds this object down to [`crate::decode`]'s last-key-wins view:
    /// later entries for a given key replace earlier ones, and the
    /// resulting order follows [`crate::Map`]'s key ordering.
    #[must_use]
    pub fn last_wins(&self) -> crate::Map {
        let mut map = crate::Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.clone().last_wins());
        }
        map
    }
}

impl OrderedValue {
    /// Folds this value down to [`crate::decode`]'s last-key-wins
    /// [`crate::Value`] representation, recursively.
    #[must_use]
    pub fn last_wins(self) -> crate::Value {
        match self {
            Self::Null => crate::Value::Null,
            Self::Bool(b) => crate::Value::Bool(b),
            Self::Integer(i) => crate::Value::Integer(i),
            Self::Float(f) => crate::Value::Float(f),
            Self::String(s) => crate::Value::String(s),
            Self::Array(items) => {
                crate::Value::Array(items.into_iter().map(Self::last_wins).collect())
            }
            Self::Object(object) => crate::Value::Object(object.last_wins()),
        }
    }
}

/// Decodes a complete JSON document, keeping every object member
/// (including duplicate keys) in document order.
///
/// # Errors
///
/// Returns [`ParseError`] carrying the byte offset of the first byte that
/// could not be consumed, with the same strict trailing-content check
/// [`crate::decode`] applies.
pub fn decode_ordered(bytes: &[u8]) -> Result<OrderedValue, ParseError> {
    let (value, end) = parse_value(bytes, 0).map_err(ParseError::from)?;
    let end = skip_ws(bytes, end);
    if end != bytes.len() {
        return Err(ParseError(end));
    }
    Ok(value)
}

fn parse_value(bytes: &[u8], pos: usize) -> Result<(OrderedValue, usize), SyntaxError> {
    let pos = skip_ws(bytes, pos);
    match bytes.get(pos) {
        Some(b'{') => {
            let (object, end) = parse_object(bytes, pos + 1)?;
            Ok((OrderedValue::Object(object), end))
        }
        Some(b'[') => {
            let (items, end) = parse_array(bytes, pos + 1)?;
            Ok((OrderedValue::Array(items), end))
        }
        Some(b'"') => {
            let (text, end) = string::parse(bytes, pos + 1)?;
            Ok((OrderedValue::String(text), end))
        }
        Some(b'-' | b'0'..=b'9') => {
            let (number, end) = number::scan(bytes, pos)?;
            Ok((number_to_value(number), end))
        }
        Some(b't') => parse_literal(bytes, pos, b"true").map(|end| (OrderedValue::Bool(true), end)),
        Some(b'f') => {
            parse_literal(bytes, pos, b"false").map(|end| (OrderedValue::Bool(false), end))
        }
        Some(b'n') => parse_literal(bytes, pos, b"null").map(|end| (OrderedValue::Null, end)),
        Some(_) => Err(SyntaxError::InvalidCharacter(pos)),
        None => Err(SyntaxError::UnexpectedEof(bytes.len())),
    }
}

fn number_to_value(number: Number) -> OrderedValue {
    match number {
        Number::Integer(i) => OrderedValue::Integer(i),
        Number::Float(f) => OrderedValue::Float(f),
    }
}

fn parse_literal(bytes: &[u8], pos: usize, literal: &'static [u8]) -> Result<usize, SyntaxError> {
    let end = pos + literal.len();
    match bytes.get(pos..end) {
        Some(slice) if slice == literal => Ok(end),
        Some(_) => Err(SyntaxError::InvalidCharacter(pos)),
        None => Err(SyntaxError::UnexpectedEof(bytes.len())),
    }
}

fn parse_object(bytes: &[u8], pos: usize) -> Result<(OrderedObject, usize), SyntaxError> {
    let mut entries = Vec::new();
    let mut pos = skip_ws(bytes, pos);

    if bytes.get(pos) == Some(&b'}') {
        return Ok((OrderedObject { entries }, pos + 1));
    }

    loop {
        if bytes.get(pos) != Some(&b'"') {
            return Err(SyntaxError::InvalidCharacter(pos));
        }
        let (key, after_key) = string::parse(bytes, pos + 1)?;

        pos = skip_ws(bytes, after_key);
        if bytes.get(pos) != Some(&b':') {
            return Err(SyntaxError::InvalidCharacter(pos));
        }

        let (value, after_value) = parse_value(bytes, pos + 1)?;
        entries.push((key, value));

        pos = skip_ws(bytes, after_value);
        match bytes.get(pos) {
            Some(b',') => pos = skip_ws(bytes, pos + 1),
            Some(b'}') => return Ok((OrderedObject { entries }, pos + 1)),
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}

fn parse_array(bytes: &[u8], pos: usize) -> Result<(Vec<OrderedValue>, usize), SyntaxError> {
    let mut items = Vec::new();
    let pos0 = skip_ws(bytes, pos);

    if bytes.get(pos0) == Some(&b']') {
        return Ok((items, pos0 + 1));
    }

    let mut pos = pos0;
    loop {
        let (value, after_value) = parse_value(bytes, pos)?;
        items.push(value);

        pos = skip_ws(bytes, after_value);
        match bytes.get(pos) {
            Some(b',') => pos += 1,
            Some(b']') => return Ok((items, pos + 1)),
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn preserves_duplicate_keys_in_order() {
        let value = decode_ordered(br#"{"a":1,"a":2}"#).unwrap();
        let OrderedValue::Object(object) = value else {
            panic!("expected object");
        };
        assert_eq!(
            object.entries(),
            &[
                ("a".to_string(), OrderedValue::Integer(1)),
                ("a".to_string(), OrderedValue::Integer(2)),
            ]
        );
    }

    #[test]
    fn last_wins_matches_default_decode() {
        let ordered = decode_ordered(br#"{"a":1,"a":2,"b":3}"#).unwrap();
        let folded = ordered.last_wins();
        assert_eq!(folded, crate::decode(br#"{"a":2,"b":3}"#).unwrap());
    }

    #[test]
    fn nested_duplicates_fold_recursively() {
        let ordered = decode_ordered(br#"{"a":{"x":1,"x":2}}"#).unwrap();
        let folded = ordered.last_wins();
        assert_eq!(folded, crate::decode(br#"{"a":{"x":2}}"#).unwrap());
    }
}
