use crate::exec;
use crate::parse;
use crate::sink::Sink;

use core::str::FromStr;

pub use crate::error::Error;
pub use crate::ir::{GroupIndex, Node, Program};

/// Range is used to express the extent of a capture group, as byte indexes
/// into the original text.
pub type Range = core::ops::Range<usize>;

/// Compile `format` into a Program.
/// An Error is returned for the first malformed placeholder.
#[inline]
pub fn compile(format: &str) -> Result<Program, Error> {
    Program::new(format)
}

impl Program {
    /// Construct a Program by compiling `format`.
    /// An Error may be returned if the syntax is invalid. A Program is
    /// immutable; prefer to cache one which is used more than once.
    #[inline]
    pub fn new(format: &str) -> Result<Program, Error> {
        parse::try_parse(format)
    }

    /// Evaluate the Program against the captures of one match, appending the
    /// result to `out`.
    ///
    /// `groups[i]` is the byte range of capture group `i` within `text`, or
    /// None if the group did not participate. Group 0 is conventionally the
    /// whole match. Groups beyond `groups.len()`, and groups which matched
    /// empty text, behave as if they did not participate.
    ///
    /// ```rust
    /// use snippet_transform::Program;
    /// let p = Program::new("${1:/upcase}-${2:-none}").unwrap();
    /// let mut out = Vec::new();
    /// p.apply(b"abc", &[Some(0..3), Some(0..3)], &mut out);
    /// assert_eq!(out, b"ABC-none");
    /// ```
    #[inline]
    pub fn apply<S: Sink + ?Sized>(&self, text: &[u8], groups: &[Option<Range>], out: &mut S) {
        exec::run(self, text, groups, out)
    }

    /// Evaluate the Program with no captures at all. Only literals and the
    /// fallback text of Else and IfElse nodes are produced.
    /// Worthwhile only if [`Program::has_fallback`] is true.
    #[inline]
    pub fn apply_fallback<S: Sink + ?Sized>(&self, out: &mut S) {
        self.apply(&[], &[], out)
    }

    /// Evaluate the Program against captures of `text`, returning a String.
    ///
    /// ```rust
    /// use snippet_transform::Program;
    /// let p = Program::new("${1:/capitalize}").unwrap();
    /// assert_eq!(p.render("hello world", &[None, Some(0..11)]), "Hello World");
    /// ```
    pub fn render(&self, text: &str, groups: &[Option<Range>]) -> String {
        let mut out = Vec::with_capacity(text.len());
        self.apply(text.as_bytes(), groups, &mut out);
        match String::from_utf8(out) {
            Ok(s) => s,
            // A group range which splits a codepoint.
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

impl FromStr for Program {
    type Err = Error;

    /// Attempts to compile a string into a Program.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}
