/*!

# snippet-transform - editor snippet variable transforms

This crate compiles the placeholder language used by editor snippet
"variable transforms" (`${1:/upcase}`, `${1:+yes}`, `${1:-no}`,
`${1:?yes:no}`) and evaluates it against the capture groups of a regular
expression match.

# Example: compiling and applying a format

A capture group is a range of byte indexes into the original text. Group 0 is
conventionally the whole match.

```rust
use snippet_transform::Program;
let p = Program::new("$1-$2").unwrap();
let text = "foo bar";
assert_eq!(p.render(text, &[Some(0..7), Some(0..3), Some(4..7)]), "foo-bar");
```

# Example: transforming text with a regex

```rust
use snippet_transform::Transformer;
let t = Transformer::new(r"(\w+)", "${1:/capitalize}", "g").unwrap();
assert_eq!(t.transform("hello wide world"), "Hello Wide World");
```

# Format syntax

| Placeholder | Output |
|---|---|
| `$N`, `${N}` | group N |
| `${N:/upcase}`, `${N:/downcase}` | group N, upper or lower cased |
| `${N:/capitalize}` | group N, first letter of each word uppercased |
| `${N:/pascalcase}`, `${N:/camelcase}` | group N, unchanged (not implemented) |
| `${N:+text}` | text if group N matched |
| `${N:-text}`, `${N:text}` | group N if it matched, else text |
| `${N:?then:else}` | then if group N matched, else else |

A group "matched" only if it participated and is non-empty. A backslash makes
the next character literal: `\$1` is the text `$1`. No other escape sequences
exist; `\n` is the letter `n`.

# No match at all

When a regex finds nothing, a caller may evaluate the Program once with no
captures to produce the fallback text of its `${N:-text}` and
`${N:?then:else}` placeholders. [`Program::has_fallback`] reports whether that
is worth doing:

```rust
use snippet_transform::Program;
let p = Program::new("${1:-untitled}").unwrap();
assert!(p.has_fallback());
let mut out = String::new();
p.apply_fallback(&mut out);
assert_eq!(out, "untitled");
```

# Crate features

- **transformer** (default). Provides [`Transformer`], which uses the
  `regress` crate to find matches.

*/

#![warn(clippy::all)]

pub use crate::api::*;
pub use crate::sink::Sink;

#[cfg(feature = "transformer")]
pub use crate::transformer::{TransformFlags, Transformer};

mod api;
mod cursor;
mod error;
mod exec;
mod ir;
mod parse;
mod sink;
mod unicode;

#[cfg(feature = "transformer")]
mod transformer;
