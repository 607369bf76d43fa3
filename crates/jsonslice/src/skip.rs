//! The skip engine: an allocation-free mirror of `decoder` that advances a
//! position past a value without ever materialising it. Skip and decode
//! always agree on the end position they reach for the same input.
use crate::decoder::skip_ws;
use crate::error::SyntaxError;
use crate::number;

/// Advances past one complete JSON value starting at `pos`, returning the
/// position of the first byte after it. Mirrors [`crate::decoder::parse_value`]
/// byte-for-byte but never builds a [`crate::Value`].
pub(crate) fn skip_value(bytes: &[u8], pos: usize) -> Result<usize, SyntaxError> {
    let pos = skip_ws(bytes, pos);
    match bytes.get(pos) {
        Some(b'{') => skip_object(bytes, pos + 1),
        Some(b'[') => skip_array(bytes, pos + 1),
        Some(b'"') => skip_string(bytes, pos + 1),
        Some(b'-' | b'0'..=b'9') => number::scan(bytes, pos).map(|(_, end)| end),
        Some(b't') => skip_literal(bytes, pos, b"true"),
        Some(b'f') => skip_literal(bytes, pos, b"false"),
        Some(b'n') => skip_literal(bytes, pos, b"null"),
        Some(_) => Err(SyntaxError::InvalidCharacter(pos)),
        None => Err(SyntaxError::UnexpectedEof(bytes.len())),
    }
}

fn skip_literal(bytes: &[u8], pos: usize, literal: &'static [u8]) -> Result<usize, SyntaxError> {
    let end = pos + literal.len();
    match bytes.get(pos..end) {
        Some(slice) if slice == literal => Ok(end),
        Some(_) => Err(SyntaxError::InvalidCharacter(pos)),
        None => Err(SyntaxError::UnexpectedEof(bytes.len())),
    }
}

/// Advances past a string with `pos` pointing just after the opening `"`.
///
/// Any `\X` escape is treated as a uniform two-byte unit rather than
/// dispatched per escape kind: for every valid JSON escape (including
/// `\uXXXX`, whose four hex digits are themselves never `"` or `\`) this
/// produces the same end position as [`crate::string::parse`] without
/// needing escape-specific logic.
pub(crate) fn skip_string(bytes: &[u8], pos: usize) -> Result<usize, SyntaxError> {
    let mut i = pos;
    loop {
        match bytes.get(i) {
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
            Some(b'"') => return Ok(i + 1),
            Some(b'\\') => {
                if bytes.get(i + 1).is_none() {
                    return Err(SyntaxError::UnexpectedEof(bytes.len()));
                }
                i += 2;
            }
            Some(&b) if b < 0x20 => return Err(SyntaxError::InvalidCharacter(i)),
            Some(_) => i += 1,
        }
    }
}

/// Advances past an object with `pos` pointing just after the opening `{`.
pub(crate) fn skip_object(bytes: &[u8], pos: usize) -> Result<usize, SyntaxError> {
    let mut pos = skip_ws(bytes, pos);
    if bytes.get(pos) == Some(&b'}') {
        return Ok(pos + 1);
    }

    loop {
        if bytes.get(pos) != Some(&b'"') {
            return Err(SyntaxError::InvalidCharacter(pos));
        }
        pos = skip_string(bytes, pos + 1)?;
        pos = skip_ws(bytes, pos);
        if bytes.get(pos) != Some(&b':') {
            return Err(SyntaxError::InvalidCharacter(pos));
        }
        pos = skip_value(bytes, pos + 1)?;
        pos = skip_ws(bytes, pos);
        match bytes.get(pos) {
            Some(b',') => pos = skip_ws(bytes, pos + 1),
            Some(b'}') => return Ok(pos + 1),
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}

/// Advances past an array with `pos` pointing just after the opening `[`.
pub(crate) fn skip_array(bytes: &[u8], pos: usize) -> Result<usize, SyntaxError> {
    let pos0 = skip_ws(bytes, pos);
    if bytes.get(pos0) == Some(&b']') {
        return Ok(pos0 + 1);
    }

    let mut pos = pos0;
    loop {
        pos = skip_value(bytes, pos)?;
        pos = skip_ws(bytes, pos);
        match bytes.get(pos) {
            Some(b',') => pos += 1,
            Some(b']') => return Ok(pos + 1),
            Some(_) => return Err(SyntaxError::InvalidCharacter(pos)),
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
        }
    }
}
