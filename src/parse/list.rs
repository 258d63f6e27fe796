use std::fmt;

use super::combinators::*;

/// Element of a bracketed list: an integer or another list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Int(u64),
    List(Vec<Element>),
}
impl Parsable for Element {
    type Parser = ElementParser;
    fn parser() -> Self::Parser {
        ElementParser::default()
    }
}
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(n) => write!(f, "{n}"),
            Element::List(elements) => {
                write!(f, "[")?;
                for (idx, element) in elements.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Deepest bracket nesting a list may have
pub const MAX_DEPTH: usize = 128;

/// Parser of a single [Element], padded with whitespace.
///
/// The rule refers to itself through [ListParser], so it is assembled on
/// every call instead of being stored. `depth` counts the lists already
/// open around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementParser {
    depth: usize,
}
impl<'a> Parser<'a> for ElementParser {
    type Dest = Element;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        alt((
            primitives::Integer.map(Element::Int),
            ListParser { depth: self.depth }.map(Element::List),
        ))
        .token()
        .parse(input)
    }
}

/// Parser of `[` elements separated by commas `]`.
/// Opening a list past [MAX_DEPTH] is a no-match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParser {
    depth: usize,
}
impl<'a> Parser<'a> for ListParser {
    type Dest = Vec<Element>;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NoMatch);
        }
        let element = ElementParser {
            depth: self.depth + 1,
        };
        delimited(
            tag("[").token(),
            separated_list0(element, tag(",").token()),
            tag("]").token(),
        )
        .parse(input)
    }
}
/// Constructor of [ListParser]
pub fn list() -> ListParser {
    ListParser::default()
}
