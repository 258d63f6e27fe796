/// The single failure a parser can report.
///
/// It carries no position and no cause: the parser simply did not match
/// at the input it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input did not match the expected form at this position.
    #[error("no match")]
    NoMatch,
}

/// Outcome of a single parse attempt: the unconsumed suffix and the value,
/// or [ParseError::NoMatch].
pub type ParseResult<'a, T> = Result<(&'a str, T), ParseError>;

/// Trait to **implement** and to **require** the "parse and show what is
/// left to parse" method.
///
/// A failed attempt never leaks partial consumption: on `Err` the caller
/// still holds the input it passed in and may retry from there.
pub trait Parser<'a> {
    type Dest;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest>;

    /// See [Map]
    fn map<Dest, M>(self, map: M) -> Map<Self, M>
    where
        Self: Sized,
        M: Fn(Self::Dest) -> Dest,
    {
        Map { parser: self, map }
    }
    /// See [Token]
    fn token(self) -> Token<Self>
    where
        Self: Sized,
    {
        Token { parser: self }
    }
    /// See [Opt]
    fn opt(self) -> Opt<Self>
    where
        Self: Sized,
    {
        Opt { parser: self }
    }
}

/// Helper trait so a value type can name and build its own parser
/// (a distant analogue of `serde::Deserialize`).
pub trait Parsable: Sized {
    type Parser: for<'a> Parser<'a, Dest = Self>;
    fn parser() -> Self::Parser;
}

pub mod primitives {
    // parsers for std types
    use super::{ParseError, ParseResult, Parser};

    /// Unsigned decimal integer: either a lone `0` or a non-zero digit
    /// followed by any digits. `012` reads as `0` with `12` left over.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Integer;
    impl<'a> Parser<'a> for Integer {
        type Dest = u64;
        fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
            if let Some(remaining) = input.strip_prefix('0') {
                return Ok((remaining, 0));
            }
            let end_idx = input
                .char_indices()
                .find_map(|(idx, c)| (!c.is_ascii_digit()).then_some(idx))
                .unwrap_or(input.len());
            if end_idx == 0 {
                return Err(ParseError::NoMatch);
            }
            let value = input[..end_idx].parse().map_err(|_| ParseError::NoMatch)?;
            Ok((&input[end_idx..], value))
        }
    }
}

/// Parser of a single character matching a predicate
#[derive(Debug, Clone)]
pub struct Satisfy<F> {
    predicate: F,
}
impl<'a, F: Fn(char) -> bool> Parser<'a> for Satisfy<F> {
    type Dest = char;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if (self.predicate)(c) => Ok((chars.as_str(), c)),
            _ => Err(ParseError::NoMatch),
        }
    }
}
/// Constructor of [Satisfy]
pub fn satisfy<F: Fn(char) -> bool>(predicate: F) -> Satisfy<F> {
    Satisfy { predicate }
}
/// Parser of any single character, fails only on empty input
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChar;
impl<'a> Parser<'a> for AnyChar {
    type Dest = char;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let mut chars = input.chars();
        let c = chars.next().ok_or(ParseError::NoMatch)?;
        Ok((chars.as_str(), c))
    }
}
/// Constructor of [AnyChar]
pub fn any_char() -> AnyChar {
    AnyChar
}
/// Parser of constant strings
/// (analogue of `nom::bytes::complete::tag`)
#[derive(Debug, Clone)]
pub struct Tag {
    tag: &'static str,
}
impl<'a> Parser<'a> for Tag {
    type Dest = &'static str;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        Ok((input.strip_prefix(self.tag).ok_or(ParseError::NoMatch)?, self.tag))
    }
}
/// Constructor of [Tag]
pub fn tag(tag: &'static str) -> Tag {
    Tag { tag }
}
/// Parser of the longest prefix whose characters all match a predicate.
/// Never fails, the prefix may be empty.
#[derive(Debug, Clone)]
pub struct TakeWhile<F> {
    predicate: F,
}
impl<'a, F: Fn(char) -> bool> Parser<'a> for TakeWhile<F> {
    type Dest = &'a str;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let end_idx = input
            .char_indices()
            .find_map(|(idx, c)| (!(self.predicate)(c)).then_some(idx))
            .unwrap_or(input.len());
        Ok((&input[end_idx..], &input[..end_idx]))
    }
}
/// Constructor of [TakeWhile]
pub fn take_while<F: Fn(char) -> bool>(predicate: F) -> TakeWhile<F> {
    TakeWhile { predicate }
}
/// Parser that skips a run of whitespace (possibly empty)
#[derive(Debug, Clone, Copy, Default)]
pub struct Ws;
impl<'a> Parser<'a> for Ws {
    type Dest = ();
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        Ok((input.trim_start(), ()))
    }
}
/// Constructor of [Ws]
pub fn ws() -> Ws {
    Ws
}
/// Combinator that lets the child parse with surrounding whitespace
/// stripped on both sides
#[derive(Debug, Clone)]
pub struct Token<T> {
    parser: T,
}
impl<'a, T: Parser<'a>> Parser<'a> for Token<T> {
    type Dest = T::Dest;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let (remaining, ()) = Ws.parse(input)?;
        let (remaining, result) = self.parser.parse(remaining)?;
        let (remaining, ()) = Ws.parse(remaining)?;
        Ok((remaining, result))
    }
}
/// Constructor of [Token]
pub fn token<'a, T: Parser<'a>>(parser: T) -> Token<T> {
    Token { parser }
}
/// Combinator to parse what is needed, surrounded at the start and at the
/// end by something mandatory that does not take part in the result.
/// The result of the middle parser is the result of this combinator, the
/// remaining input is what is left after the last one.
/// (analogue of `delimited` from `nom`)
#[derive(Debug, Clone)]
pub struct Delimited<Prefix, T, Suffix> {
    prefix_to_ignore: Prefix,
    dest_parser: T,
    suffix_to_ignore: Suffix,
}
impl<'a, Prefix, T, Suffix> Parser<'a> for Delimited<Prefix, T, Suffix>
where
    Prefix: Parser<'a>,
    T: Parser<'a>,
    Suffix: Parser<'a>,
{
    type Dest = T::Dest;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let (remaining, _) = self.prefix_to_ignore.parse(input)?;
        let (remaining, result) = self.dest_parser.parse(remaining)?;
        self.suffix_to_ignore
            .parse(remaining)
            .map(|(remaining, _)| (remaining, result))
    }
}
/// Constructor of [Delimited]
pub fn delimited<'a, Prefix, T, Suffix>(
    prefix_to_ignore: Prefix,
    dest_parser: T,
    suffix_to_ignore: Suffix,
) -> Delimited<Prefix, T, Suffix>
where
    Prefix: Parser<'a>,
    T: Parser<'a>,
    Suffix: Parser<'a>,
{
    Delimited {
        prefix_to_ignore,
        dest_parser,
        suffix_to_ignore,
    }
}
/// Mapping combinator. Parses with the child parser and transforms the
/// result the way the caller wants
#[derive(Debug, Clone)]
pub struct Map<T, M> {
    parser: T,
    map: M,
}
impl<'a, T: Parser<'a>, Dest, M: Fn(T::Dest) -> Dest> Parser<'a> for Map<T, M> {
    type Dest = Dest;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        self.parser
            .parse(input)
            .map(|(remaining, pre_result)| (remaining, (self.map)(pre_result)))
    }
}
/// Constructor of [Map]
pub fn map<'a, T: Parser<'a>, Dest, M: Fn(T::Dest) -> Dest>(parser: T, map: M) -> Map<T, M> {
    Map { parser, map }
}
/// Combinator with a discarded prefix, a reduced [Delimited]
/// (analogue of `preceded` from `nom`)
#[derive(Debug, Clone)]
pub struct Preceded<Prefix, T> {
    prefix_to_ignore: Prefix,
    dest_parser: T,
}
impl<'a, Prefix, T> Parser<'a> for Preceded<Prefix, T>
where
    Prefix: Parser<'a>,
    T: Parser<'a>,
{
    type Dest = T::Dest;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let (remaining, _) = self.prefix_to_ignore.parse(input)?;
        self.dest_parser.parse(remaining)
    }
}
/// Constructor of [Preceded]
pub fn preceded<'a, Prefix, T>(prefix_to_ignore: Prefix, dest_parser: T) -> Preceded<Prefix, T>
where
    Prefix: Parser<'a>,
    T: Parser<'a>,
{
    Preceded {
        prefix_to_ignore,
        dest_parser,
    }
}
/// Combinator with a discarded suffix, the mirror of [Preceded]
/// (analogue of `terminated` from `nom`)
#[derive(Debug, Clone)]
pub struct Terminated<T, Suffix> {
    dest_parser: T,
    suffix_to_ignore: Suffix,
}
impl<'a, T, Suffix> Parser<'a> for Terminated<T, Suffix>
where
    T: Parser<'a>,
    Suffix: Parser<'a>,
{
    type Dest = T::Dest;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let (remaining, result) = self.dest_parser.parse(input)?;
        self.suffix_to_ignore
            .parse(remaining)
            .map(|(remaining, _)| (remaining, result))
    }
}
/// Constructor of [Terminated]
pub fn terminated<'a, T, Suffix>(dest_parser: T, suffix_to_ignore: Suffix) -> Terminated<T, Suffix>
where
    T: Parser<'a>,
    Suffix: Parser<'a>,
{
    Terminated {
        dest_parser,
        suffix_to_ignore,
    }
}
/// Combinator for two values with something ignored in between
/// (analogue of `separated_pair` from `nom`)
#[derive(Debug, Clone)]
pub struct SeparatedPair<A, Sep, B> {
    first: A,
    separator: Sep,
    second: B,
}
impl<'a, A, Sep, B> Parser<'a> for SeparatedPair<A, Sep, B>
where
    A: Parser<'a>,
    Sep: Parser<'a>,
    B: Parser<'a>,
{
    type Dest = (A::Dest, B::Dest);
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let (remaining, a) = self.first.parse(input)?;
        let (remaining, _) = self.separator.parse(remaining)?;
        self.second
            .parse(remaining)
            .map(|(remaining, b)| (remaining, (a, b)))
    }
}
/// Constructor of [SeparatedPair]
pub fn separated_pair<'a, A, Sep, B>(first: A, separator: Sep, second: B) -> SeparatedPair<A, Sep, B>
where
    A: Parser<'a>,
    Sep: Parser<'a>,
    B: Parser<'a>,
{
    SeparatedPair {
        first,
        separator,
        second,
    }
}
/// Combinator that requires all child parsers to succeed one after another,
/// the results come back as a tuple in the same order
/// (analogue of `tuple` from `nom`)
#[derive(Debug, Clone)]
pub struct Seq<T> {
    parsers: T,
}
/// Constructor of [Seq] for a tuple of up to eight parsers
pub fn seq<T>(parsers: T) -> Seq<T> {
    Seq { parsers }
}
/// Combinator that returns the result of the first child parser that
/// succeeds. Every child starts from the same input, later ones are not
/// tried once one has matched
/// (analogue of `alt` from `nom`)
#[derive(Debug, Clone)]
pub struct Alt<T> {
    parsers: T,
}
/// Constructor of [Alt] for a tuple of up to eight parsers
pub fn alt<T>(parsers: T) -> Alt<T> {
    Alt { parsers }
}

// Rust has no variadic generics, so both tuple combinators are stamped out
// per arity.
macro_rules! tuple_impls {
    ($($parser:ident)+) => {
        #[allow(non_snake_case)]
        impl<'a, $($parser: Parser<'a>),+> Parser<'a> for Seq<($($parser,)+)> {
            type Dest = ($($parser::Dest,)+);
            fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
                let ($($parser,)+) = &self.parsers;
                let remaining = input;
                $(let (remaining, $parser) = $parser.parse(remaining)?;)+
                Ok((remaining, ($($parser,)+)))
            }
        }
        #[allow(non_snake_case)]
        impl<'a, Dest, $($parser: Parser<'a, Dest = Dest>),+> Parser<'a> for Alt<($($parser,)+)> {
            type Dest = Dest;
            fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
                let ($($parser,)+) = &self.parsers;
                // lazy: a later parser runs only after every earlier one failed
                $(if let Ok(ok) = $parser.parse(input) {
                    return Ok(ok);
                })+
                Err(ParseError::NoMatch)
            }
        }
    };
}
tuple_impls!(A0);
tuple_impls!(A0 A1);
tuple_impls!(A0 A1 A2);
tuple_impls!(A0 A1 A2 A3);
tuple_impls!(A0 A1 A2 A3 A4);
tuple_impls!(A0 A1 A2 A3 A4 A5);
tuple_impls!(A0 A1 A2 A3 A4 A5 A6);
tuple_impls!(A0 A1 A2 A3 A4 A5 A6 A7);

/// Combinator that never fails: a failed child yields `None` and the
/// untouched input
/// (analogue of `opt` from `nom`)
#[derive(Debug, Clone)]
pub struct Opt<T> {
    parser: T,
}
impl<'a, T: Parser<'a>> Parser<'a> for Opt<T> {
    type Dest = Option<T::Dest>;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        match self.parser.parse(input) {
            Ok((remaining, result)) => Ok((remaining, Some(result))),
            Err(_) => Ok((input, None)),
        }
    }
}
/// Constructor of [Opt]
pub fn opt<'a, T: Parser<'a>>(parser: T) -> Opt<T> {
    Opt { parser }
}
/// Combinator applying the child parser as many times as it succeeds.
/// An iteration that consumes nothing ends the loop and its value is
/// dropped, so a child matching the empty string cannot spin forever
/// (analogue of `many0` from `nom`)
#[derive(Debug, Clone)]
pub struct Many0<T> {
    parser: T,
}
impl<'a, T: Parser<'a>> Parser<'a> for Many0<T> {
    type Dest = Vec<T::Dest>;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let mut remaining = input;
        let mut result = Vec::new();
        while let Ok((new_remaining, item)) = self.parser.parse(remaining) {
            if new_remaining.len() >= remaining.len() {
                break;
            }
            result.push(item);
            remaining = new_remaining;
        }
        Ok((remaining, result))
    }
}
/// Constructor of [Many0]
pub fn many0<'a, T: Parser<'a>>(parser: T) -> Many0<T> {
    Many0 { parser }
}
/// Combinator for a list of elements with separators in between.
///
/// An empty list is fine, but a separator must be followed by an element:
/// `a,a,` fails as a whole instead of stopping before the last comma
/// (analogue of `separated_list0` from `nom`)
#[derive(Debug, Clone)]
pub struct SeparatedList0<T, Sep> {
    parser: T,
    separator: Sep,
}
impl<'a, T: Parser<'a>, Sep: Parser<'a>> Parser<'a> for SeparatedList0<T, Sep> {
    type Dest = Vec<T::Dest>;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let Ok((mut remaining, first)) = self.parser.parse(input) else {
            return Ok((input, Vec::new()));
        };
        let mut result = vec![first];
        while let Ok((after_separator, _)) = self.separator.parse(remaining) {
            let (new_remaining, item) = self.parser.parse(after_separator)?;
            if new_remaining.len() >= remaining.len() {
                break;
            }
            result.push(item);
            remaining = new_remaining;
        }
        Ok((remaining, result))
    }
}
/// Constructor of [SeparatedList0]
pub fn separated_list0<'a, T: Parser<'a>, Sep: Parser<'a>>(
    parser: T,
    separator: Sep,
) -> SeparatedList0<T, Sep> {
    SeparatedList0 { parser, separator }
}
/// Like [Many0], but the result is the consumed slice of the input itself
/// rather than the values of the child parser.
/// Progress is tracked by remaining length, an iteration that does not
/// shorten the input ends the loop
/// (analogue of `recognize(many0(..))` from `nom`)
#[derive(Debug, Clone)]
pub struct Many0Recognise<T> {
    parser: T,
}
impl<'a, T: Parser<'a>> Parser<'a> for Many0Recognise<T> {
    type Dest = &'a str;
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Dest> {
        let mut remaining = input;
        while let Ok((new_remaining, _)) = self.parser.parse(remaining) {
            if new_remaining.len() >= remaining.len() {
                break;
            }
            remaining = new_remaining;
        }
        let consumed = input.len() - remaining.len();
        Ok((remaining, &input[..consumed]))
    }
}
/// Constructor of [Many0Recognise]
pub fn many0_recognise<'a, T: Parser<'a>>(parser: T) -> Many0Recognise<T> {
    Many0Recognise { parser }
}
