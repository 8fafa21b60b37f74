//! Scanner over a format string.

/// The escape character. A backslash makes the following codepoint literal.
pub const ESCAPE: char = '\\';

/// A cursor is an immutable view of the format string plus a byte position
/// into it. The position always sits on a char boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// \return the unconsumed remainder of the input.
    #[inline(always)]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Peek at the next codepoint.
    #[inline(always)]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// \return the next codepoint, advancing past it.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// If the next codepoint is \p c, consume it and return true.
    #[inline]
    pub fn try_consume(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Advance past the next occurrence of \p c, or to the end if there is
    /// none.
    pub fn skip_past(&mut self, c: char) {
        while let Some(nc) = self.pop() {
            if nc == c {
                break;
            }
        }
    }

    /// Accumulate text up to \p terminator, removing escape characters.
    /// The terminator itself is not consumed; the caller pops it.
    /// If the input ends first, \return the text if \p allow_end is set, and
    /// None otherwise.
    pub fn scan_until(&mut self, terminator: char, allow_end: bool) -> Option<String> {
        debug_assert!(terminator.is_ascii(), "terminator must be ASCII");
        let term = terminator as u8;
        let mut text = String::new();
        loop {
            let bytes = self.rest().as_bytes();
            // Both needles are ASCII, so every hit is on a char boundary.
            match memchr::memchr2(term, ESCAPE as u8, bytes) {
                None => {
                    if !allow_end {
                        return None;
                    }
                    text.push_str(self.rest());
                    self.pos = self.src.len();
                    return Some(text);
                }
                Some(idx) => {
                    text.push_str(&self.rest()[..idx]);
                    self.pos += idx;
                    if bytes[idx] == term {
                        return Some(text);
                    }
                    // Escape: drop the backslash, keep whatever follows.
                    self.pos += 1;
                    match self.pop() {
                        Some(c) => text.push(c),
                        None if allow_end => {
                            text.push(ESCAPE);
                            return Some(text);
                        }
                        None => return None,
                    }
                }
            }
        }
    }
}
