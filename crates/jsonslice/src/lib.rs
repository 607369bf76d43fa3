//! A single-pass JSON decoder for RFC 8259 text, with a second operation
//! that extracts one sub-value addressed by a path of object keys and
//! array indices without materialising anything outside that path.
//!
//! Two entry points:
//!
//! - [`decode`] parses a complete document into a [`Value`] tree.
//! - [`get`] walks a document guided by a [`Path`], skipping every sibling
//!   subtree that isn't on the way to the target, and only then decodes
//!   the value it lands on.
//!
//! Both share the same byte-level scanners (`number`, `string`); `get`'s
//! skip engine is a second, allocation-free mirror of those scanners (see
//! [`skip`]) rather than a wrapper around [`decode`].
#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod escape;
mod get;
mod number;
mod options;
mod ordered;
mod path;
mod skip;
mod string;
#[cfg(feature = "utf8-scan")]
mod string_fast;
mod value;

#[cfg(test)]
mod tests;

pub use error::{GetError, ParseError};
pub use options::{Options, TrailingPolicy};
pub use ordered::{decode_ordered, OrderedObject, OrderedValue};
pub use path::{Path, PathComponent};
pub use value::{Map, Value};

/// Decodes a complete JSON document with the default, strict [`Options`].
///
/// Leading whitespace before the root value is skipped. Any non-whitespace
/// byte left over after the root value is an error (see
/// [`TrailingPolicy::Reject`], the default); use [`decode_with`] with
/// [`TrailingPolicy::Ignore`] to accept trailing bytes silently.
///
/// # Errors
///
/// Returns [`ParseError`] carrying the byte offset of the first byte that
/// could not be consumed.
///
/// # Examples
///
/// ```
/// use jsonslice::{decode, Value};
///
/// let value = decode(br#"{"a":1,"a":2}"#).unwrap();
/// assert_eq!(value, decode(br#"{"a":2}"#).unwrap());
/// ```
pub fn decode(input: &[u8]) -> Result<Value, ParseError> {
    decode_with(input, Options::default())
}

/// Decodes a complete JSON document with the given [`Options`].
///
/// # Errors
///
/// Returns [`ParseError`] carrying the byte offset of the first byte that
/// could not be consumed.
pub fn decode_with(input: &[u8], options: Options) -> Result<Value, ParseError> {
    let (value, end) = decoder::parse_value(input, 0).map_err(ParseError::from)?;
    let end = decoder::skip_ws(input, end);
    match options.trailing {
        TrailingPolicy::Reject if end != input.len() => Err(ParseError(end)),
        _ => Ok(value),
    }
}

/// Extracts the sub-value addressed by `path` out of `input`, skipping
/// (never materialising) every sibling subtree along the way.
///
/// An empty `path` decodes the whole document, equivalent to [`decode`]
/// except that `get` never checks for trailing content: malformed bytes
/// after the resolved target are never observed.
///
/// # Errors
///
/// Returns [`GetError::Malformed`] if the input is invalid at or before the
/// point the target was located, or [`GetError::NotFound`] if no path
/// component of `path` could be resolved.
///
/// # Examples
///
/// ```
/// use jsonslice::{get, path, Value};
///
/// let doc = br#"{"test":[1,2,3,4,5]}"#;
/// assert_eq!(get(&path!["test", 4], doc).unwrap(), Value::Integer(4));
/// ```
pub fn get(path: &[PathComponent], input: &[u8]) -> Result<Value, GetError> {
    get::get(path, input)
}

/// Macro to build a `Vec<PathComponent>` from a heterogeneous list of keys
/// and indices.
///
/// Array indices in `jsonslice` are 1-based: the first element is index
/// `1`.
///
/// ```rust
/// use jsonslice::{path, PathComponent};
///
/// let p = path![1, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathComponent::Index(1),
///         PathComponent::Key("foo".into()),
///         PathComponent::Index(2),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {
        $crate::vec![$($crate::PathComponent::from($elem)),*]
    };
}

#[doc(hidden)]
pub use alloc::vec;
