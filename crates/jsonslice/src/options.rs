//! Decoder configuration.

/// Options controlling [`crate::decode_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// How to treat non-whitespace bytes left over after the root value.
    pub trailing: TrailingPolicy,
}

/// What [`crate::decode_with`] does with trailing bytes after the root
/// value.
///
/// The default is [`TrailingPolicy::Reject`]: `"0123"` is rejected even
/// though the number scanner alone would happily stop after the leading
/// `0`, since `decode` checks for leftover bytes after the root value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Any non-whitespace byte after the root value is a [`crate::ParseError`].
    #[default]
    Reject,
    /// Trailing bytes, whatever they are, are silently ignored.
    Ignore,
}
