//! Regular expression requirements.
//!
//! A requirement of kind `regexp` is either a bare pattern (`ab+c`) or a
//! slash-delimited literal with optional flags (`/ab+c/gi`). Only the flags
//! `g`, `i`, `m` and `y` are recognised; anything else after the closing
//! slash means the input is not a literal and is used verbatim.

use std::{fmt, sync::LazyLock};

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer, ser::SerializeStruct};

use super::Error;

/// Fixed grammar of a literal: opening slash, body, closing slash, flags.
///
/// The body is greedy, so the closing slash is always the last one and the
/// flags are exactly the `[gimy]` run that follows it.
static LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(.*)/([gimy]*)$").expect("literal pattern is valid"));

/// A pattern body and flag string split out of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    /// The pattern body, without delimiters.
    pub pattern: &'a str,
    /// The flag characters, possibly empty.
    pub flags: &'a str,
}

/// Splits `/pattern/flags` syntax into its parts.
///
/// Input that is not in literal syntax is returned whole as the pattern, with
/// no flags.
#[must_use]
pub fn normalize_literal(input: &str) -> Literal<'_> {
    LITERAL.captures(input).map_or(
        Literal {
            pattern: input,
            flags: "",
        },
        |captures| {
            let body = captures.get(1).map_or("", |m| m.as_str());
            let flags = captures.get(2).map_or("", |m| m.as_str());
            Literal {
                pattern: body,
                flags,
            }
        },
    )
}

/// The set of flags attached to a [`Pattern`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// `g`: recorded only, a boolean match is unaffected.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `y`: the match must start at the beginning of the haystack.
    pub sticky: bool,
}

impl Flags {
    /// Parses a flag string such as `"gi"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] on an unsupported or repeated flag.
    pub fn parse(pattern: &str, flags: &str) -> Result<Self, Error> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            let slot = match flag {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multi_line,
                'y' => &mut parsed.sticky,
                other => {
                    return Err(Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: format!("unsupported flag '{other}'"),
                    });
                }
            };
            if *slot {
                return Err(Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: format!("repeated flag '{flag}'"),
                });
            }
            *slot = true;
        }
        Ok(parsed)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (set, flag) in [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.sticky, 'y'),
        ] {
            if set {
                write!(f, "{flag}")?;
            }
        }
        Ok(())
    }
}

/// A compiled regular expression requirement.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: Flags,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern body with the given flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a flag is unsupported or the body
    /// is not a valid regular expression.
    pub fn new(source: &str, flags: &str) -> Result<Self, Error> {
        let flags = Flags::parse(source, flags)?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multi_line)
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    /// Compiles a requirement that is either a bare pattern or a literal.
    ///
    /// # Errors
    ///
    /// See [`Pattern::new`].
    pub fn from_requirement(requirement: &str) -> Result<Self, Error> {
        let literal = normalize_literal(requirement);
        Self::new(literal.pattern, literal.flags)
    }

    /// The pattern body.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags the pattern was built with.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Tests `haystack` against the pattern, honouring the sticky flag.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        if self.flags.sticky {
            self.regex.find(haystack).is_some_and(|m| m.start() == 0)
        } else {
            self.regex.is_match(haystack)
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pattern", 2)?;
        state.serialize_field("pattern", &self.source)?;
        state.serialize_field("flags", &self.flags.to_string())?;
        state.end()
    }
}
