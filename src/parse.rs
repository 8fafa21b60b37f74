//! Compiler from format strings to a Program.

use crate::cursor::Cursor;
use crate::error::Error;
use crate::ir::{GroupIndex, Node, Program};

/// Introduces a placeholder.
const DOLLAR: char = '$';

/// The `/` transforms, each spelled with its closing brace, and the node they
/// compile to.
const TRANSFORMS: [(&str, fn(GroupIndex) -> Node); 5] = [
    ("/upcase}", Node::UpperCase),
    ("/downcase}", Node::LowerCase),
    ("/capitalize}", Node::Capitalize),
    // Accepted but not implemented; they emit the group unchanged.
    ("/pascalcase}", Node::Group),
    ("/camelcase}", Node::Group),
];

fn error<T>(err: Error) -> Result<T, Error> {
    Err(err)
}

/// Represents the state used to compile a format string.
struct Parser<'a> {
    /// The remaining input.
    input: Cursor<'a>,

    /// Nodes produced so far.
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn try_parse(mut self) -> Result<Program, Error> {
        while !self.input.at_end() {
            // A literal run may end at end of input.
            let text = self.input.scan_until(DOLLAR, true).unwrap_or_default();
            if !text.is_empty() {
                self.nodes.push(Node::Literal(text.into_boxed_str()));
            }
            if self.input.try_consume(DOLLAR) {
                let node = self.consume_placeholder()?;
                self.nodes.push(node);
            }
        }
        Ok(Program::from_nodes(self.nodes))
    }

    /// Consume a run of ASCII digits, the `$` having been consumed.
    /// Accumulation saturates: enormous indexes simply never match.
    fn consume_index(&mut self) -> Result<GroupIndex, Error> {
        match self.input.peek() {
            Some(c) if c.is_ascii_digit() => {}
            found => return error(Error::ExpectedIndex { found }),
        }
        let mut idx: GroupIndex = 0;
        while let Some(c) = self.input.peek() {
            let Some(digit) = c.to_digit(10) else {
                break;
            };
            self.input.pop();
            idx = idx.saturating_mul(10).saturating_add(digit as GroupIndex);
        }
        Ok(idx)
    }

    /// Parse a placeholder, following its `$`.
    fn consume_placeholder(&mut self) -> Result<Node, Error> {
        let braced = self.input.try_consume('{');
        let idx = self.consume_index()?;
        if !braced {
            return Ok(Node::Group(idx));
        }
        match self.input.pop() {
            Some('}') => return Ok(Node::Group(idx)),
            Some(':') => {}
            found => return error(Error::ExpectedColonOrBrace { found }),
        }
        self.consume_transform(idx)
    }

    /// Parse what follows `${N:`.
    fn consume_transform(&mut self, idx: GroupIndex) -> Result<Node, Error> {
        match self.input.peek() {
            Some('/') => {
                let rest = self.input.rest();
                match TRANSFORMS.iter().find(|(kw, _)| rest.starts_with(kw)) {
                    Some((_, make)) => {
                        self.input.skip_past('}');
                        Ok(make(idx))
                    }
                    None => error(Error::UnknownTransform {
                        text: rest.to_string(),
                    }),
                }
            }
            Some('+') => {
                self.input.pop();
                let then = self.consume_argument('}')?;
                Ok(Node::If { idx, then })
            }
            Some('?') => {
                self.input.pop();
                let then = self.consume_argument(':')?;
                let fallback = self.consume_argument('}')?;
                Ok(Node::IfElse {
                    idx,
                    then,
                    fallback,
                })
            }
            _ => {
                // The '-' is optional.
                self.input.try_consume('-');
                let fallback = self.consume_argument('}')?;
                Ok(Node::Else { idx, fallback })
            }
        }
    }

    /// Scan placeholder argument text up to and including \p terminator.
    /// The argument must be closed explicitly.
    fn consume_argument(&mut self, terminator: char) -> Result<Box<str>, Error> {
        match self.input.scan_until(terminator, false) {
            Some(text) => {
                self.input.pop();
                Ok(text.into_boxed_str())
            }
            None => error(Error::MissingTerminator { terminator }),
        }
    }
}

/// Compile a format string into a Program.
/// The first grammar violation aborts the compile.
pub fn try_parse(format: &str) -> Result<Program, Error> {
    let p = Parser {
        input: Cursor::new(format),
        nodes: Vec::new(),
    };
    match p.try_parse() {
        Ok(program) => {
            log::trace!(
                "compiled format {:?} into {} node(s), has_fallback={}",
                format,
                program.len(),
                program.has_fallback()
            );
            Ok(program)
        }
        Err(err) => {
            log::debug!("rejected format {:?}: {}", format, err);
            Err(err)
        }
    }
}
