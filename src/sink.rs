//! Output buffers which a Program appends to.

/// A growable buffer receiving the output of a Program.
/// Implementations must append; they never see the same output twice.
pub trait Sink {
    /// Append raw bytes, such as a capture group copied from the input.
    fn push_bytes(&mut self, bytes: &[u8]);

    /// Append a single codepoint.
    fn push_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.push_bytes(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Append text.
    #[inline]
    fn push_str(&mut self, s: &str) {
        self.push_bytes(s.as_bytes())
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn push_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes)
    }
}

/// Bytes which are not UTF-8 are replaced with U+FFFD.
impl Sink for String {
    #[inline]
    fn push_bytes(&mut self, bytes: &[u8]) {
        self.push_str(&String::from_utf8_lossy(bytes))
    }

    #[inline]
    fn push_char(&mut self, c: char) {
        self.push(c)
    }

    #[inline]
    fn push_str(&mut self, s: &str) {
        String::push_str(self, s)
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn push_bytes(&mut self, bytes: &[u8]) {
        (**self).push_bytes(bytes)
    }

    #[inline]
    fn push_char(&mut self, c: char) {
        (**self).push_char(c)
    }

    #[inline]
    fn push_str(&mut self, s: &str) {
        (**self).push_str(s)
    }
}
