//! Lines of comma-separated unsigned integers.
//!
//! ```text
//! csv  ::= {line}
//! line ::= int {"," int} ["\n"]
//! ```
//!
//! No whitespace is skipped. An empty line is an empty row.
use super::combinators::*;

pub type LineRule = Terminated<SeparatedList0<primitives::Integer, Tag>, Opt<Tag>>;
pub type CsvRule = Many0<LineRule>;

/// Integers separated by commas, then an optional newline
pub fn line() -> LineRule {
    terminated(separated_list0(primitives::Integer, tag(",")), opt(tag("\n")))
}
/// As many [line]s as match.
/// A line that fails (say, on a dangling comma) ends the document there.
pub fn csv() -> CsvRule {
    many0(line())
}
