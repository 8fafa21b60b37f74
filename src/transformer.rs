//! Pairing a Program with a regular expression.

use crate::api::{Error, Program, Range};
use regress::Regex;

/// Flags controlling a Transformer.
#[derive(Debug, Copy, Clone, Default)]
pub struct TransformFlags {
    /// Transform every match rather than only the first.
    /// Equivalent to the 'g' flag in JavaScript.
    pub global: bool,

    /// Flags passed to the regex.
    pub regex: regress::Flags,
}

impl From<&str> for TransformFlags {
    /// Construct from a string of JavaScript flag letters. 'g' selects global
    /// matching; everything else is handed to the regex, which silently skips
    /// letters it does not support.
    fn from(s: &str) -> Self {
        TransformFlags {
            global: s.contains('g'),
            regex: regress::Flags::from(s),
        }
    }
}

/// A Transformer rewrites the matches of a regex in some input with a
/// compiled Program.
///
/// ```rust
/// use snippet_transform::Transformer;
/// let t = Transformer::new(r"(\w+)@(\w+)", "${2:/upcase}:$1", "g").unwrap();
/// assert_eq!(t.transform("mail bob@home, amy@work"), "mail HOME:bob, WORK:amy");
/// ```
#[derive(Debug, Clone)]
pub struct Transformer {
    regex: Regex,
    program: Program,
    global: bool,
}

impl Transformer {
    /// Construct a Transformer by compiling `pattern` as a regex and
    /// `format` as a Program.
    pub fn new<F>(pattern: &str, format: &str, flags: F) -> Result<Transformer, Error>
    where
        F: Into<TransformFlags>,
    {
        let flags = flags.into();
        let regex = Regex::with_flags(pattern, flags.regex).map_err(|e| Error::Regex(e.text))?;
        let program = Program::new(format)?;
        Ok(Transformer {
            regex,
            program,
            global: flags.global,
        })
    }

    /// The compiled format.
    #[inline]
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The compiled regex.
    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Transform `input`, returning a new String.
    pub fn transform(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.transform_into(input, &mut out);
        out
    }

    /// Transform `input`, appending the result to `out`.
    ///
    /// Text outside the matches is copied unchanged. Matching stops after the
    /// first match unless global, and always after an empty match. If nothing
    /// matched and the Program has fallback text, the output is the fallback
    /// evaluation alone, without the input.
    pub fn transform_into(&self, input: &str, out: &mut String) {
        let mut groups: Vec<Option<Range>> = Vec::new();
        let mut offset = 0;
        let mut nmatch = 0usize;
        while let Some(m) = self.regex.find_from(input, offset).next() {
            nmatch += 1;
            let range = m.range();
            out.push_str(&input[offset..range.start]);

            groups.clear();
            groups.extend(m.groups());
            self.program.apply(input.as_bytes(), &groups, out);

            offset = range.end;
            if range.is_empty() || !self.global {
                break;
            }
        }
        log::trace!("transformer made {} replacement(s)", nmatch);

        if nmatch == 0 && self.program.has_fallback() {
            self.program.apply_fallback(out);
        } else {
            out.push_str(&input[offset..]);
        }
    }
}
