//! Quoted strings with backslash escapes and brace-delimited maps of them.
//!
//! Rule types are spelled out so that a grammar can be stored in a struct
//! field or a static without boxing.
use std::fmt;

use super::combinators::*;

/// Escape letters accepted after a backslash
const ESCAPABLE: [char; 5] = ['n', 'r', 't', '\\', '"'];

/// One character of a quoted string as it appears in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringChar {
    /// Anything but a backslash or a double quote
    Plain(char),
    /// A backslash (kept as matched) and the escaped letter
    Escaped(&'static str, char),
}
impl StringChar {
    /// The character this stands for once the escape is resolved
    pub fn decoded(self) -> char {
        match self {
            StringChar::Plain(c) => c,
            StringChar::Escaped(_, 'n') => '\n',
            StringChar::Escaped(_, 'r') => '\r',
            StringChar::Escaped(_, 't') => '\t',
            StringChar::Escaped(_, c) => c,
        }
    }
}
impl fmt::Display for StringChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringChar::Plain(c) => write!(f, "{c}"),
            StringChar::Escaped(backslash, c) => write!(f, "{backslash}{c}"),
        }
    }
}

pub type PlainChar = Satisfy<fn(char) -> bool>;
pub type Escaped = Seq<(Tag, Satisfy<fn(char) -> bool>)>;
pub type StringCharRule = Alt<(
    Map<Escaped, fn((&'static str, char)) -> StringChar>,
    Map<PlainChar, fn(char) -> StringChar>,
)>;
pub type StringRule = Delimited<Tag, Many0Recognise<StringCharRule>, Tag>;
pub type PairRule = SeparatedPair<StringRule, Token<Tag>, StringRule>;
pub type MapRule = Delimited<Token<Tag>, SeparatedList0<PairRule, Token<Tag>>, Token<Tag>>;

fn is_plain(c: char) -> bool {
    c != '\\' && c != '"'
}
fn is_escapable(c: char) -> bool {
    ESCAPABLE.contains(&c)
}
fn escape_sequence((backslash, c): (&'static str, char)) -> StringChar {
    StringChar::Escaped(backslash, c)
}

impl Parsable for StringChar {
    type Parser = StringCharRule;
    fn parser() -> Self::Parser {
        // escapes first: a backslash is never a plain char anyway
        alt((
            escaped().map(escape_sequence as fn((&'static str, char)) -> StringChar),
            plain_char().map(StringChar::Plain as fn(char) -> StringChar),
        ))
    }
}

/// Any character except backslash and double quote
pub fn plain_char() -> PlainChar {
    satisfy(is_plain as fn(char) -> bool)
}
/// Backslash followed by one of `n r t \ "`, yields both parts
pub fn escaped() -> Escaped {
    seq((tag("\\"), satisfy(is_escapable as fn(char) -> bool)))
}
/// [escaped], else [plain_char]
pub fn string_char() -> StringCharRule {
    StringChar::parser()
}
/// Double-quoted string. The value is the raw text between the quotes,
/// escapes left as written (see [decode_escapes]).
/// An unknown escape or a missing closing quote fails the whole string.
pub fn string() -> StringRule {
    delimited(tag("\""), many0_recognise(string_char()), tag("\""))
}
/// `"key","value"` with optional whitespace around the comma
pub fn pair() -> PairRule {
    separated_pair(string(), tag(",").token(), string())
}
/// `{` pairs separated by commas `}`, whitespace tolerated around
/// braces and commas. A trailing comma is an error.
pub fn map() -> MapRule {
    delimited(
        tag("{").token(),
        separated_list0(pair(), tag(",").token()),
        tag("}").token(),
    )
}

/// Resolve the escapes of a raw span returned by [string].
///
/// Decoding stops at the first text that is not string content (a bare
/// `"` or an unknown escape); from there the input is copied as is.
pub fn decode_escapes(raw: &str) -> String {
    let string_char = string_char();
    let mut result = String::with_capacity(raw.len());
    let mut remaining = raw;
    while let Ok((rest, c)) = string_char.parse(remaining) {
        result.push(c.decoded());
        remaining = rest;
    }
    result.push_str(remaining);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_char() {
        assert_eq!(plain_char().parse("ab"), Ok(("b", 'a')));
        assert_eq!(plain_char().parse(" "), Ok(("", ' ')));
        assert!(plain_char().parse("\\n").is_err());
        assert!(plain_char().parse("\"").is_err());
        assert!(plain_char().parse("").is_err());
    }

    #[test]
    fn test_escaped() {
        for c in ESCAPABLE {
            let input = format!("\\{c}rest");
            assert_eq!(escaped().parse(&input), Ok(("rest", ("\\", c))));
        }
        assert!(escaped().parse("\\x").is_err());
        assert!(escaped().parse("\\").is_err());
        assert!(escaped().parse("n").is_err());
    }

    #[test]
    fn test_string_char() {
        assert_eq!(
            string_char().parse("\\nhello"),
            Ok(("hello", StringChar::Escaped("\\", 'n')))
        );
        assert_eq!(string_char().parse("hello"), Ok(("ello", StringChar::Plain('h'))));
        assert!(string_char().parse("\\q").is_err());
        assert!(string_char().parse("\"").is_err());
    }

    #[test]
    fn test_string() {
        assert_eq!(string().parse(r#""hell yeah""#), Ok(("", "hell yeah")));
        assert_eq!(string().parse(r#""""#), Ok(("", "")));
        assert_eq!(string().parse(r#""a\"b" tail"#), Ok((" tail", r#"a\"b"#)));
        assert_eq!(string().parse(r#""\\""#), Ok(("", r#"\\"#)));
        assert_eq!(string().parse(r#""tab\there""#), Ok(("", r#"tab\there"#)));
        assert_eq!(string().parse("\"многобайтовые\""), Ok(("", "многобайтовые")));
    }

    #[test]
    fn test_string_failures() {
        assert!(string().parse(r#""unterminated"#).is_err());
        assert!(string().parse(r#""bad \q escape""#).is_err());
        assert!(string().parse(r#""ends in backslash\"#).is_err());
        assert!(string().parse(r#" "leading space""#).is_err());
        assert!(string().parse("plain").is_err());
    }

    #[test]
    fn test_pair() {
        assert_eq!(pair().parse(r#""a","b""#), Ok(("", ("a", "b"))));
        assert_eq!(pair().parse(r#""a" ,  "b"!"#), Ok(("!", ("a", "b"))));
        assert!(pair().parse(r#""a":"b""#).is_err());
        assert!(pair().parse(r#""a","#).is_err());
    }

    #[test]
    fn test_map() {
        assert_eq!(map().parse(r#"{"a","b"}"#), Ok(("", vec![("a", "b")])));
        assert_eq!(map().parse("{}"), Ok(("", vec![])));
        assert_eq!(map().parse(" {  } "), Ok(("", vec![])));
        assert_eq!(
            map().parse("{ \"this\" , \"is\" ,\n \"pretty\",\"cool\" } rest"),
            Ok(("rest", vec![("this", "is"), ("pretty", "cool")]))
        );
        assert_eq!(
            map().parse(r#"{"k\"ey","line\nbreak"}"#),
            Ok(("", vec![(r#"k\"ey"#, r#"line\nbreak"#)]))
        );
    }

    #[test]
    fn test_map_failures() {
        assert!(map().parse(r#"{"a","b",}"#).is_err());
        assert!(map().parse(r#"{"a","b""#).is_err());
        assert!(map().parse(r#"{"a"}"#).is_err());
        assert!(map().parse(r#"{"a":"b"}"#).is_err());
        assert!(map().parse(r#"["a","b"]"#).is_err());
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_escapes(r#"line\nbreak"#), "line\nbreak");
        assert_eq!(decode_escapes(r#"\t\r\\\""#), "\t\r\\\"");
        assert_eq!(decode_escapes("plain"), "plain");
        assert_eq!(decode_escapes(r#"a\qb"#), r#"a\qb"#);
        assert_eq!(decode_escapes(""), "");
        assert_eq!(decode_escapes(r#"a"b\n"#), r#"a"b\n"#);
        assert_eq!(decode_escapes(r#"\n\q\n"#), "\n\\q\\n");
    }

    #[test]
    fn test_string_char_display() {
        assert_eq!(StringChar::Escaped("\\", 'n').to_string(), r#"\n"#);
        assert_eq!(StringChar::Plain('x').to_string(), "x");
        assert_eq!(StringChar::Escaped("\\", 'n').decoded(), '\n');
    }
}
