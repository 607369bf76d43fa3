//! The string parser: a fast no-escape scan that returns a verbatim
//! subrange, and a slow escape-handling path that builds an owned buffer.
use alloc::string::String;

use crate::error::SyntaxError;
use crate::escape::{combine_surrogate_pair, is_high_surrogate, is_low_surrogate, read_hex4};

/// Advances from `pos` over one run of plain string bytes — anything but
/// `"`, `\`, or a control byte — and returns the position of the first
/// byte that ends the run.
///
/// With the `utf8-scan` feature enabled, delegates to
/// [`crate::string_fast::scan_utf8_run`], which walks the run's UTF-8
/// continuation-byte structure directly instead of one byte at a time;
/// with the feature off (the default), the byte-at-a-time loop below runs
/// unchanged. Both validate the run's bytes the same way at the end, via
/// [`decode_utf8`]; the feature only changes how the run's end position
/// is found.
#[cfg(feature = "utf8-scan")]
fn scan_plain_run(bytes: &[u8], pos: usize) -> Result<usize, SyntaxError> {
    crate::string_fast::scan_utf8_run(bytes, pos)
}

#[cfg(not(feature = "utf8-scan"))]
fn scan_plain_run(bytes: &[u8], pos: usize) -> Result<usize, SyntaxError> {
    let mut i = pos;
    while matches!(bytes.get(i), Some(&b) if b != b'"' && b != b'\\' && b >= 0x20) {
        i += 1;
    }
    Ok(i)
}

/// Parses a string literal with `pos` pointing at the byte just after the
/// opening `"`. Returns the decoded text and the position just after the
/// closing `"`.
pub(crate) fn parse(bytes: &[u8], pos: usize) -> Result<(String, usize), SyntaxError> {
    let start = pos;
    let mut i = pos;

    // Fast path: no escape found before the closing quote.
    loop {
        i = scan_plain_run(bytes, i)?;
        match bytes.get(i) {
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
            Some(b'"') => return Ok((decode_utf8(bytes, start, i)?, i + 1)),
            Some(b'\\') => break,
            Some(&b) if b < 0x20 => return Err(SyntaxError::InvalidCharacter(i)),
            Some(_) => unreachable!("scan_plain_run only stops at '\"', '\\', a control byte, or eof"),
        }
    }

    // Slow path: at least one escape. Seed the owned buffer with
    // everything scanned so far, then continue byte-by-byte.
    let mut out = decode_utf8(bytes, start, i)?;

    loop {
        match bytes.get(i) {
            None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
            Some(b'"') => return Ok((out, i + 1)),
            Some(b'\\') => i = read_escape(bytes, i, &mut out)?,
            Some(&b) if b < 0x20 => return Err(SyntaxError::InvalidCharacter(i)),
            Some(_) => {
                let seg_start = i;
                i = scan_plain_run(bytes, i)?;
                out.push_str(&decode_utf8(bytes, seg_start, i)?);
            }
        }
    }
}

/// Handles one `\...` escape starting at `i` (the position of the `\`).
/// Returns the position right after the escape.
fn read_escape(bytes: &[u8], i: usize, out: &mut String) -> Result<usize, SyntaxError> {
    let esc_pos = i;
    let simple = match bytes.get(i + 1) {
        Some(b'"') => '"',
        Some(b'\\') => '\\',
        Some(b'/') => '/',
        Some(b'b') => '\u{0008}',
        Some(b'f') => '\u{000C}',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'u') => return read_unicode_escape(bytes, i + 2, esc_pos, out),
        Some(_) => return Err(SyntaxError::InvalidEscape(i + 1)),
        None => return Err(SyntaxError::UnexpectedEof(bytes.len())),
    };
    out.push(simple);
    Ok(i + 2)
}

/// Handles a `\uXXXX` escape (and a possible following surrogate pair),
/// with `digits_pos` pointing at the first hex digit.
fn read_unicode_escape(
    bytes: &[u8],
    digits_pos: usize,
    esc_pos: usize,
    out: &mut String,
) -> Result<usize, SyntaxError> {
    let (unit, after) = read_hex4(bytes, digits_pos)?;

    if is_high_surrogate(unit) {
        if bytes.get(after) == Some(&b'\\') && bytes.get(after + 1) == Some(&b'u') {
            let (low, after_low) = read_hex4(bytes, after + 2)?;
            if is_low_surrogate(low) {
                let code_point = combine_surrogate_pair(unit, low);
                let ch = char::from_u32(code_point)
                    .expect("a valid surrogate pair always yields a valid scalar value");
                out.push(ch);
                return Ok(after_low);
            }
        }
        // Lone high surrogate: tolerated, emitted as '?'. Scan resumes
        // right after the high escape only.
        out.push('?');
        Ok(after)
    } else if is_low_surrogate(unit) {
        // A lone low surrogate is not covered by any documented
        // tolerance rule and is fatal.
        Err(SyntaxError::InvalidUnicodeEscape(esc_pos))
    } else {
        let ch = char::from_u32(u32::from(unit))
            .expect("a non-surrogate code unit is always a valid scalar value");
        out.push(ch);
        Ok(after)
    }
}

fn decode_utf8(bytes: &[u8], start: usize, end: usize) -> Result<String, SyntaxError> {
    core::str::from_utf8(&bytes[start..end])
        .map(alloc::string::ToString::to_string)
        .map_err(|e| SyntaxError::InvalidUtf8(start + e.valid_up_to()))
}
