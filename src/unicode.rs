//! Unicode helpers for the case transforms.

use core::str;
use icu_casemap::CaseMapper;

/// \return the simple uppercase mapping of \p c, from UnicodeData.
/// Codepoints with no 1:1 mapping (only a multi-codepoint full mapping, as
/// for U+00DF) map to themselves.
#[inline]
pub fn to_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    CaseMapper::new().simple_uppercase(c)
}

/// \return the simple lowercase mapping of \p c, from UnicodeData.
#[inline]
pub fn to_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    CaseMapper::new().simple_lowercase(c)
}

/// \return whether \p c has the Alphabetic property.
#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_alphabetic()
}

/// \return the longest prefix of \p bytes which is well-formed UTF-8.
/// Everything from the first malformed sequence onwards is dropped.
pub fn decode_prefix(bytes: &[u8]) -> &str {
    match str::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
    }
}
