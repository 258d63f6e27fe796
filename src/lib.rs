//! A small recursive-descent parsing toolkit.
//!
//! [parse::combinators] holds the engine, [parse::grammar],
//! [parse::list] and [parse::csv] the concrete grammars. [read_document] and
//! [parse_document] are the entry points used by the command line tool.
use std::fmt;
use std::io::Read;

pub mod parse;

pub use parse::{decode_escapes, Element, Parsable, ParseError, ParseResult, Parser};

use parse::{csv, grammar, list};

/// Top-level rule to apply to a whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `{"key","value", ...}`
    Map,
    /// `"text"`
    String,
    /// `[1, [2, 3]]`
    List,
    /// `1,2\n3,4\n`
    Csv,
}
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rule::Map => "map",
            Rule::String => "string",
            Rule::List => "list",
            Rule::Csv => "csv",
        })
    }
}

/// Owned result of a top-level rule.
///
/// Strings are kept exactly as written between the quotes, escapes
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Map(Vec<(String, String)>),
    String(String),
    List(Element),
    Csv(Vec<Vec<u64>>),
}
impl Document {
    /// Same document with every string passed through [decode_escapes]
    pub fn decoded(&self) -> Document {
        match self {
            Document::Map(pairs) => Document::Map(
                pairs
                    .iter()
                    .map(|(key, value)| (decode_escapes(key), decode_escapes(value)))
                    .collect(),
            ),
            Document::String(raw) => Document::String(decode_escapes(raw)),
            Document::List(element) => Document::List(element.clone()),
            Document::Csv(rows) => Document::Csv(rows.clone()),
        }
    }
}
/// Renders the document back in source syntax
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Map(pairs) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in pairs.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\", \"{value}\"")?;
                }
                write!(f, "}}")
            }
            Document::String(raw) => write!(f, "\"{raw}\""),
            Document::List(element) => write!(f, "{element}"),
            Document::Csv(rows) => {
                for row in rows {
                    for (idx, value) in row.iter().enumerate() {
                        if idx > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{value}")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Parsed document and whatever input the rule did not consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub document: Document,
    pub remaining: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input does not match the {rule} rule")]
    NoMatch {
        rule: Rule,
        #[source]
        source: ParseError,
    },
}

/// Apply `rule` to an in-memory document
pub fn parse_document(input: &str, rule: Rule) -> Result<Parsed, ReadError> {
    let parsed = match rule {
        Rule::Map => grammar::map().parse(input).map(|(remaining, pairs)| {
            let pairs = pairs
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect();
            (remaining, Document::Map(pairs))
        }),
        Rule::String => grammar::string()
            .parse(input)
            .map(|(remaining, raw)| (remaining, Document::String(raw.to_owned()))),
        Rule::List => list::list()
            .parse(input)
            .map(|(remaining, elements)| (remaining, Document::List(Element::List(elements)))),
        Rule::Csv => csv::csv()
            .parse(input)
            .map(|(remaining, rows)| (remaining, Document::Csv(rows))),
    };
    let (remaining, document) = parsed.map_err(|source| ReadError::NoMatch { rule, source })?;
    tracing::debug!(
        %rule,
        consumed = input.len() - remaining.len(),
        remaining = remaining.len(),
        "document parsed"
    );
    Ok(Parsed {
        document,
        remaining: remaining.to_owned(),
    })
}

/// Read the whole of `reader` and apply `rule` to it
pub fn read_document<R: Read>(mut reader: R, rule: Rule) -> Result<Parsed, ReadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    tracing::debug!(%rule, len = input.len(), "input read");
    parse_document(&input, rule)
}
