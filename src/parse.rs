//! Parser combinators over `&str` and the grammars built from them.
//!
//! Every parser implements [Parser]: it either returns the unconsumed
//! suffix together with a value, or [ParseError::NoMatch]. Combinators are
//! plain structs wrapping other parsers, so any composition can be named,
//! cloned and nested.
pub mod combinators;
pub mod csv;
pub mod grammar;
pub mod list;

pub use combinators::{Parsable, ParseError, ParseResult, Parser};
pub use grammar::{decode_escapes, StringChar};
pub use list::Element;
