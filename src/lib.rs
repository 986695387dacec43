/*!

# minirex - a tiny regular expression engine

This crate provides a small regular expression engine for hosts which want
predictable, dependency-light matching rather than a full regex language.

# Example: test if a whole string matches

```rust
use minirex::Regex;
let re = Regex::new(r"^[a-z]+\.rs$").unwrap();
assert!(re.is_full_match("main.rs"));
assert!(!re.is_full_match("main.rs.bak"));
```

# Example: finding the first match

```rust
use minirex::Regex;
let re = Regex::new(r"[0-9]{4}").unwrap();
let m = re.find("Today is 2020-20-05").unwrap();
assert_eq!(m.range(), 9..13);
```

# Example: using capture groups

Capture groups are available in the `Match` object produced by a successful match.
A capture group is a range of byte indexes into the input string.

```rust
use minirex::Regex;
let re = Regex::new(r"(a|b)c").unwrap();
let text = "xbc";
let m = re.find(text).unwrap();
let group = m.group(1).unwrap();
assert_eq!(&text[group], "b");
```

# Supported Syntax

- Literals, and `\` to escape any character. `\n`, `\t`, `\r` and `\f` are
  the usual control characters.
- `.` matches any single character.
- `[abc]`, `[a-z]`, `[^abc]` character classes. A `]` or `-` directly after
  the opening bracket is a literal member. Other syntax characters must be
  escaped, even inside brackets.
- `^` at the start of the pattern or an alternative, and `$` anywhere, match
  only at the start and end of the searched range. There is no multiline mode.
- `(...)` capturing groups, numbered by their opening parenthesis.
- `a|b` alternation, trying the left side first.
- `*`, `+`, `?`, `{n}`, `{n,}` and `{n,m}` quantifiers.

# Matching semantics

Quantifiers are greedy and never give back: once a quantifier has consumed
as many repetitions as it can, a later failure does not make it retry with
fewer. Likewise an alternation which succeeded is not revisited. For example
`a*a` never matches, because `a*` eats every `a`:

```rust
use minirex::Regex;
let re = Regex::new("a*a").unwrap();
assert!(re.find("aaa").is_none());
```

Each group records its span only the first time it is entered in an attempt.

# Inputs

Text may be matched as UTF-8 `&str` (one char per element, byte offsets),
as bytes (`find_bytes`, one byte per element), or with the `utf16` feature as
UCS-2 (`&[u16]`). Pattern literals are compared against elements by numeric
value.

# Debugging

[`Regex::dump`] renders the compiled node graph. With the `log` facade at
trace level the graph is logged for every compiled pattern.

*/

#![warn(clippy::all)]
// Clippy's manual_range_contains suggestion produces worse codegen.
#![allow(clippy::manual_range_contains)]

pub use crate::api::*;
pub use crate::indexing::{AsciiInput, ElementType, InputIndexer, Utf8Input};

#[cfg(feature = "utf16")]
pub use crate::indexing::Ucs2Input;

mod api;
mod bytesearch;
mod exec;
mod indexing;
mod ir;
mod matcher;
mod parse;
mod startpredicate;
mod types;
mod util;
