use thiserror::Error as ThisError;

/// Represents an error encountered while compiling a format string, or while
/// building a Transformer.
/// The Display text is a human-readable message describing the first problem.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A `$` was not followed by a digit or `{`.
    #[error("malformed placeholder: expected number or '{{', found {}", describe(.found))]
    ExpectedIndex { found: Option<char> },

    /// The digits of `${N` were followed by something other than `:` or `}`.
    #[error("malformed placeholder: expected ':' or '}}', found {}", describe(.found))]
    ExpectedColonOrBrace { found: Option<char> },

    /// A `/` transform which is not one of the known keywords.
    #[error("malformed placeholder: unexpected transform {text}")]
    UnknownTransform { text: String },

    /// The input ended before a placeholder argument was closed.
    #[error("malformed placeholder: missing '{terminator}'")]
    MissingTerminator { terminator: char },

    /// The regular expression paired with a format failed to compile.
    #[error("invalid regex: {0}")]
    Regex(String),
}

fn describe(found: &Option<char>) -> String {
    match *found {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = Error::ExpectedIndex { found: Some('x') };
        assert_eq!(
            e.to_string(),
            "malformed placeholder: expected number or '{', found 'x'"
        );
        let e = Error::ExpectedColonOrBrace { found: None };
        assert_eq!(
            e.to_string(),
            "malformed placeholder: expected ':' or '}', found end of input"
        );
        let e = Error::MissingTerminator { terminator: '}' };
        assert_eq!(e.to_string(), "malformed placeholder: missing '}'");
    }
}
