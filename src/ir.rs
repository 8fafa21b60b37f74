//! Intermediate representation for a compiled format string.

use core::fmt;

/// An index of a capture group. Group 0 is the whole match.
/// No upper bound is enforced when compiling.
pub type GroupIndex = usize;

/// The node types of a Program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Emit fixed text verbatim.
    Literal(Box<str>),

    /// Emit a capture group verbatim. Also produced for `/pascalcase` and
    /// `/camelcase`, which are accepted but not implemented.
    Group(GroupIndex),

    /// Emit a capture group mapped to uppercase.
    UpperCase(GroupIndex),

    /// Emit a capture group mapped to lowercase.
    LowerCase(GroupIndex),

    /// Emit a capture group with the first letter of each word uppercased and
    /// the rest lowercased.
    Capitalize(GroupIndex),

    /// Emit `then` if the group matched non-empty text.
    If { idx: GroupIndex, then: Box<str> },

    /// Emit the group if it matched non-empty text, otherwise `fallback`.
    Else { idx: GroupIndex, fallback: Box<str> },

    /// Emit `then` if the group matched non-empty text, otherwise `fallback`.
    IfElse {
        idx: GroupIndex,
        then: Box<str>,
        fallback: Box<str>,
    },
}

impl Node {
    /// \return whether this node produces text when its group is missing.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Node::Else { .. } | Node::IfElse { .. })
    }

    /// \return the group this node refers to, if any.
    pub fn group(&self) -> Option<GroupIndex> {
        match *self {
            Node::Literal(_) => None,
            Node::Group(idx)
            | Node::UpperCase(idx)
            | Node::LowerCase(idx)
            | Node::Capitalize(idx)
            | Node::If { idx, .. }
            | Node::Else { idx, .. }
            | Node::IfElse { idx, .. } => Some(idx),
        }
    }
}

/// A compiled format string: an ordered list of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub(crate) nodes: Vec<Node>,
    pub(crate) has_fallback: bool,
}

impl Program {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Program {
        let has_fallback = nodes.iter().any(Node::is_fallback);
        Program {
            nodes,
            has_fallback,
        }
    }

    /// The nodes, in evaluation order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// \return whether any node is an Else or IfElse.
    /// Callers use this to decide whether a "no match at all" pass with zero
    /// captures can produce anything.
    #[inline]
    pub fn has_fallback(&self) -> bool {
        self.has_fallback
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Write \p text escaping every character that is syntax somewhere in a
/// format string.
fn write_escaped(text: &str, f: &mut fmt::Formatter) -> fmt::Result {
    for c in text.chars() {
        if matches!(c, '$' | '\\' | '}' | ':') {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    /// Render the node in canonical placeholder syntax. Compiling the output
    /// yields an equal node.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Literal(text) => write_escaped(text, f),
            Node::Group(idx) => write!(f, "${{{}}}", idx),
            Node::UpperCase(idx) => write!(f, "${{{}:/upcase}}", idx),
            Node::LowerCase(idx) => write!(f, "${{{}:/downcase}}", idx),
            Node::Capitalize(idx) => write!(f, "${{{}:/capitalize}}", idx),
            Node::If { idx, then } => {
                write!(f, "${{{}:+", idx)?;
                write_escaped(then, f)?;
                f.write_str("}")
            }
            Node::Else { idx, fallback } => {
                write!(f, "${{{}:-", idx)?;
                write_escaped(fallback, f)?;
                f.write_str("}")
            }
            Node::IfElse {
                idx,
                then,
                fallback,
            } => {
                write!(f, "${{{}:?", idx)?;
                write_escaped(then, f)?;
                f.write_str(":")?;
                write_escaped(fallback, f)?;
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
