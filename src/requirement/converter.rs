//! Conversion of a single raw requirement value into a typed [`Arg`].
//!
//! Numeric text follows decimal literal syntax: optional sign, digits with an
//! optional fraction and exponent, or `Infinity`. Surrounding whitespace is
//! ignored. Empty text is not numeric.

use std::sync::LazyLock;

use regex::Regex;

use super::{Arg, Error, Pattern, RequirementKind, Resolver, Selection};

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$")
        .expect("numeric pattern is valid")
});

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("integer pattern is valid"));

/// Reads `text` as a number, or `None` if it is not numeric.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if !NUMERIC.is_match(text) {
        return None;
    }
    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => text.parse().ok(),
    }
}

/// Reads the integer part of numeric `text`, truncating any fraction.
///
/// # Errors
///
/// Returns [`Error::NotAnInteger`] if the text is not numeric or has no
/// leading digits (`.5`, `Infinity`), and [`Error::IntegerOutOfRange`] if the
/// integer part does not fit in an `i64`.
pub fn parse_integer(text: &str) -> Result<i64, Error> {
    let not_an_integer = || Error::NotAnInteger(text.to_string());
    parse_number(text).ok_or_else(not_an_integer)?;
    let digits = LEADING_INTEGER
        .find(text.trim())
        .ok_or_else(not_an_integer)?;
    digits
        .as_str()
        .parse()
        .map_err(|_| Error::IntegerOutOfRange(text.to_string()))
}

/// Converts `raw` according to `kind`.
///
/// # Errors
///
/// Returns the conversion error matching `kind`:
/// [`Error::NotAnInteger`], [`Error::IntegerOutOfRange`],
/// [`Error::NotANumber`], [`Error::NoSuchReference`] or
/// [`Error::InvalidPattern`].
pub fn convert(kind: RequirementKind, raw: &str, resolver: &dyn Resolver) -> Result<Arg, Error> {
    match kind {
        RequirementKind::String => Ok(Arg::String(raw.to_string())),
        RequirementKind::Integer => parse_integer(raw).map(Arg::Integer),
        RequirementKind::Number => parse_number(raw)
            .map(Arg::Number)
            .ok_or_else(|| Error::NotANumber(raw.to_string())),
        RequirementKind::Reference => Selection::new(raw.to_string(), resolver.resolve(raw))
            .map(Arg::Reference)
            .ok_or_else(|| Error::NoSuchReference(raw.to_string())),
        RequirementKind::Regexp => Pattern::from_requirement(raw).map(Arg::Regexp),
    }
}

/// Converts `raw` according to a textual type tag.
///
/// A missing or empty tag means `string`.
///
/// # Errors
///
/// Returns [`Error::UnknownRequirementType`] for an unrecognised tag, or any
/// error [`convert`] returns.
pub fn convert_tagged(
    tag: Option<&str>,
    raw: &str,
    resolver: &dyn Resolver,
) -> Result<Arg, Error> {
    convert(RequirementKind::from_tag(tag)?, raw, resolver)
}
