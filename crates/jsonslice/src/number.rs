//! The number state machine: `minus`, `zero`, `integer`, `fractional`,
//! `exponent`.
//!
//! [`scan`] is shared, byte-for-byte, by both the materialising decoder and
//! the skip engine; the skip engine only discards the returned value and
//! keeps the position.
use crate::error::SyntaxError;

/// A scanned JSON number, not yet converted to [`crate::Value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Integer(i64),
    Float(f64),
}

/// Scans a number starting at `start` (the position of the leading `-` or
/// first digit). Returns the number and the position of the first byte
/// not belonging to it — the terminator is never consumed.
pub(crate) fn scan(bytes: &[u8], start: usize) -> Result<(Number, usize), SyntaxError> {
    let mut pos = start;
    let mut is_float = false;

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => pos += 1, // ZERO: no further integer-digit transition
        Some(b'1'..=b'9') => {
            pos += 1;
            while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return Err(SyntaxError::InvalidNumber(pos)),
    }

    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        if !matches!(bytes.get(frac_start), Some(b'0'..=b'9')) {
            return Err(SyntaxError::InvalidNumber(frac_start));
        }
        is_float = true;
        pos = frac_start + 1;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut digit_pos = pos + 1;
        if matches!(bytes.get(digit_pos), Some(b'+' | b'-')) {
            digit_pos += 1;
        }
        if !matches!(bytes.get(digit_pos), Some(b'0'..=b'9')) {
            return Err(SyntaxError::InvalidNumber(digit_pos));
        }
        is_float = true;
        pos = digit_pos + 1;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    // Every byte accepted above is ASCII, so this slice is always valid
    // UTF-8 and, in fact, valid Rust float/integer literal syntax.
    let text = core::str::from_utf8(&bytes[start..pos])
        .expect("number scanner only ever accepts ASCII digits, '-', '.', 'e', 'E', '+'");

    if is_float {
        let value: f64 = text
            .parse()
            .map_err(|_| SyntaxError::InvalidNumber(start))?;
        Ok((Number::Float(value), pos))
    } else {
        match text.parse::<i64>() {
            Ok(value) => Ok((Number::Integer(value), pos)),
            // Beyond i64's range but otherwise a well-formed integer literal:
            // fall back to Float rather than fail.
            Err(_) => {
                let value: f64 = text
                    .parse()
                    .map_err(|_| SyntaxError::InvalidNumber(start))?;
                Ok((Number::Float(value), pos))
            }
        }
    }
}
