//! Tokenizing raw command lines.
//!
//! A line is trimmed, every `=` is treated as a space, and the result is
//! split on whitespace runs. Runs collapse, so no token is ever empty, and
//! `--foo=bar` reads exactly like `--foo bar`. A value can therefore never
//! contain `=`.

use smallvec::SmallVec;

/// Character accepted between a flag and its value.
pub const VALUE_SEPARATOR: char = '=';

/// Tokens of one line, borrowed from the input.
///
/// Most command lines are short; eight tokens stay inline.
pub type Tokens<'a> = SmallVec<[&'a str; 8]>;

/// Returns true for characters that separate tokens.
#[inline]
pub fn is_separator(c: char) -> bool {
    c == VALUE_SEPARATOR || c.is_whitespace()
}

/// Split a raw line into tokens without copying.
///
/// # Example
///
/// ```
/// use cmdroute_proto::tokenize;
///
/// let tokens = tokenize("  deploy --target=prod   --force ");
/// assert_eq!(tokens.as_slice(), ["deploy", "--target", "prod", "--force"]);
/// ```
pub fn tokenize(raw: &str) -> Tokens<'_> {
    raw.split(is_separator).filter(|t| !t.is_empty()).collect()
}
