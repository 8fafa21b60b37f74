//! Evaluation of a Program against a set of captures.

use crate::api::Range;
use crate::ir::{GroupIndex, Node, Program};
use crate::sink::Sink;
use crate::unicode;

/// The captures of one match, viewed against the text they index.
#[derive(Debug, Copy, Clone)]
struct Captures<'t, 'c> {
    text: &'t [u8],
    groups: &'c [Option<Range>],
}

impl<'t> Captures<'t, '_> {
    /// \return the bytes of group \p idx, or None if the group is out of
    /// range, did not participate, or does not lie within the text.
    #[inline]
    fn get(&self, idx: GroupIndex) -> Option<&'t [u8]> {
        let range = self.groups.get(idx)?.clone()?;
        self.text.get(range)
    }

    /// \return the bytes of group \p idx if it matched non-empty text.
    /// A zero-length capture counts as no match.
    #[inline]
    fn non_empty(&self, idx: GroupIndex) -> Option<&'t [u8]> {
        self.get(idx).filter(|bytes| !bytes.is_empty())
    }
}

/// Emit every codepoint of \p bytes through \p map.
/// Decoding stops at the first malformed sequence.
fn map_chars<S: Sink + ?Sized>(bytes: &[u8], out: &mut S, map: fn(char) -> char) {
    for c in unicode::decode_prefix(bytes).chars() {
        out.push_char(map(c));
    }
}

/// Uppercase the first codepoint of every word and lowercase the rest.
/// A word starts after any non-alphabetic codepoint.
fn capitalize<S: Sink + ?Sized>(bytes: &[u8], out: &mut S) {
    let mut capitalize_next = true;
    for c in unicode::decode_prefix(bytes).chars() {
        let alpha = unicode::is_alphabetic(c);
        if capitalize_next {
            out.push_char(unicode::to_upper(c));
            if alpha {
                capitalize_next = false;
            }
        } else {
            out.push_char(unicode::to_lower(c));
            if !alpha {
                capitalize_next = true;
            }
        }
    }
}

fn run_node<S: Sink + ?Sized>(node: &Node, caps: Captures, out: &mut S) {
    match node {
        Node::Literal(text) => out.push_str(text),
        Node::Group(idx) => {
            if let Some(bytes) = caps.non_empty(*idx) {
                out.push_bytes(bytes)
            }
        }
        Node::UpperCase(idx) => {
            if let Some(bytes) = caps.get(*idx) {
                map_chars(bytes, out, unicode::to_upper)
            }
        }
        Node::LowerCase(idx) => {
            if let Some(bytes) = caps.get(*idx) {
                map_chars(bytes, out, unicode::to_lower)
            }
        }
        Node::Capitalize(idx) => {
            if let Some(bytes) = caps.get(*idx) {
                capitalize(bytes, out)
            }
        }
        Node::If { idx, then } => {
            if caps.non_empty(*idx).is_some() {
                out.push_str(then)
            }
        }
        Node::Else { idx, fallback } => match caps.non_empty(*idx) {
            Some(bytes) => out.push_bytes(bytes),
            None => out.push_str(fallback),
        },
        Node::IfElse {
            idx,
            then,
            fallback,
        } => match caps.non_empty(*idx) {
            Some(_) => out.push_str(then),
            None => out.push_str(fallback),
        },
    }
}

/// Run \p program, appending its output to \p out.
/// Group `i` is `groups[i]`; `groups.len()` is the capture count.
pub fn run<S: Sink + ?Sized>(program: &Program, text: &[u8], groups: &[Option<Range>], out: &mut S) {
    let caps = Captures { text, groups };
    for node in program.nodes() {
        run_node(node, caps, out);
    }
}
