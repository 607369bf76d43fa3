//! The materialising decoder: value dispatcher, object parser, array
//! parser, wired to the shared `number`/`string` scanners.
use alloc::vec::Vec;

use crate::error::SyntaxError;
use crate::number::{self, Number};
use crate::string;
use crate::value::{Map, Value};

/// Skips ASCII whitespace (space, tab, LF, CR) — the only whitespace this
/// decoder recognizes.
pub(crate) fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while matches!(bytes.get(pos), Some(b' ' | b'\t' | b'\n' | b'\r')) {
        pos += 1;
    }
    pos
}

/// The value dispatcher. Skips leading whitespace, classifies the next
/// byte, and routes to the matching sub-parser.
pub(crate) fn parse_value(bytes: &[u8], pos: usize) -> Result<(Value, usize), SyntaxError> {
    let pos = skip_ws(bytes, pos);
    match bytes.get(pos) {
        Some(b'{') => {
            let (map, end) = parse_object(bytes, pos + 1)?;
            Ok((Value::Object(map), end))
        }
        Some(b'[') => {
            let (items, end) = parse_array(bytes, pos + 1)?;
            Ok((Value::Array(items), end))
        }
        Some(b'"') => {
            let (text, end) = string::parse(bytes, pos + 1)?;
            Ok((Value::String(text), end))
        }
        Some(b'-' | b'0'..=b'9') => {
            let (number, end) = number::scan(bytes, pos)?;
            Ok((number_to_value(number), end))
        }
        Some(b't') => parse_literal(bytes, pos, b"true").map(|end| (Value::Bool(true), end)),
        Some(b'f') => parse_literal(bytes, pos, b"false").map(|end| (Value::Bool(false), end)),
        Some(b'n') => parse_literal(bytes, pos, b"null").map(|end| (Value::Null, end)),
        Some(_) => Err(SyntaxError::InvalidCharacter(pos)),
        None => Err(SyntaxError::UnexpectedEof(bytes.len())),
    }
}

fn number_to_value(number: Number) -> Value {
    match number {
        Number::Integer(i) => Value::Integer(i),
        Number::Float(f) => Value::Float(f),
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

/// Parses `{ ... }` with `pos` pointing just after the opening brace.
pub(crate) fn parse_object(bytes: &[u8], pos: usize) -> Result<(Map, usize), SyntaxError> {
    let mut map = Map::new();
    let mut pos = skip_ws(bytes, pos);

    if bytes.get(pos) == Some(&b'}') {
        return Ok((map, pos + 1));
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
        // BTreeMap::insert overwrites on a repeated key: last-key-wins,
        // falling straight out of the mapping representation.
        map.insert(key, value);

        pos = skip_ws(bytes, after_value);
        match bytes.get(pos) {
            Some(b',') => pos = skip_ws(bytes, pos + 1),
            Some(b'}') => return Ok((map, pos + 1)),
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}

/// Parses `[ ... ]` with `pos` pointing just after the opening bracket.
pub(crate) fn parse_array(bytes: &[u8], pos: usize) -> Result<(Vec<Value>, usize), SyntaxError> {
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
    use alloc::{string::ToString, vec};

    use rstest::rstest;

    use super::*;

    fn decode(input: &str) -> Value {
        parse_value(input.as_bytes(), 0).unwrap().0
    }

    #[test]
    fn decodes_scalars() {
        assert_eq!(decode("null"), Value::Null);
        assert_eq!(decode("true"), Value::Bool(true));
        assert_eq!(decode("false"), Value::Bool(false));
        assert_eq!(decode("42"), Value::Integer(42));
        assert_eq!(decode("4.5"), Value::Float(4.5));
        assert_eq!(decode(r#""hi""#), Value::String("hi".to_string()));
    }

    #[test]
    fn decodes_nested_object_and_array() {
        let value = decode(r#"{"test":[1,2,3,4,5]}"#);
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        assert_eq!(
            map.get("test"),
            Some(&Value::Array(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3),
                Value::Integer(4),
                Value::Integer(5),
            ]))
        );
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(decode("{}"), Value::Object(Map::new()));
        assert_eq!(decode("[]"), Value::Array(vec![]));
    }

    #[test]
    fn last_key_wins_on_duplicate_keys() {
        assert_eq!(decode(r#"{"a":1,"a":2}"#), decode(r#"{"a":2}"#));
    }

    #[rstest]
    #[case("{ \"a\" : 1 , \"b\" : 2 }")]
    #[case("{\t\"a\":1,\n\"b\":2\r}")]
    #[case("{\"a\":1,\"b\":2}")]
    fn whitespace_is_irrelevant_between_tokens(#[case] input: &str) {
        let Value::Object(map) = decode(input) else {
            panic!("expected object");
        };
        assert_eq!(map.get("a"), Some(&Value::Integer(1)));
        assert_eq!(map.get("b"), Some(&Value::Integer(2)));
    }

    #[test]
    fn trailing_comma_is_rejected() {
        assert!(parse_value(b"[1,2,]", 0).is_err());
        assert!(parse_value(br#"{"a":1,}"#, 0).is_err());
    }

    #[test]
    fn truncated_object_fails_at_buffer_end() {
        let input = br#"{"a":"#;
        let err = parse_value(input, 0).unwrap_err();
        assert_eq!(err.position(), input.len());
    }

    #[test]
    fn bom_is_not_stripped_and_is_invalid_at_zero() {
        let input = [0xEF, 0xBB, 0xBF, b'1'];
        let err = parse_value(&input, 0).unwrap_err();
        assert_eq!(err.position(), 0);
    }
}
