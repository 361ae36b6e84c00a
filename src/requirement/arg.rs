use std::fmt;

use serde::Serialize;

use super::{Pattern, Selection};

/// A typed requirement argument handed to capability handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    /// Raw text.
    String(String),
    /// A base-10 integer.
    Integer(i64),
    /// A floating point number.
    Number(f64),
    /// Elements matched by a selector.
    Reference(Selection),
    /// A compiled regular expression.
    Regexp(Pattern),
    /// Several arguments gathered into one, as produced by structured
    /// requirements or the legacy calling convention.
    List(Vec<Arg>),
}

impl Arg {
    /// Returns the text of a [`Arg::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the value of an [`Arg::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value of an [`Arg::Number`], widening integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the pattern of an [`Arg::Regexp`].
    #[must_use]
    pub const fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Regexp(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// Returns the selection of an [`Arg::Reference`].
    #[must_use]
    pub const fn as_selection(&self) -> Option<&Selection> {
        match self {
            Self::Reference(selection) => Some(selection),
            _ => None,
        }
    }

    /// Returns the members of an [`Arg::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Reference(selection) => f.write_str(selection.selector()),
            Self::Regexp(pattern) => write!(f, "{pattern}"),
            Self::List(items) => {
                let joined = items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{joined}]")
            }
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Pattern> for Arg {
    fn from(pattern: Pattern) -> Self {
        Self::Regexp(pattern)
    }
}

impl From<Vec<Self>> for Arg {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Arg::from("x").as_str(), Some("x"));
        assert_eq!(Arg::from(3_i64).as_integer(), Some(3));
        assert_eq!(Arg::from(3_i64).as_number(), Some(3.0));
        assert_eq!(Arg::from(2.5_f64).as_number(), Some(2.5));
        assert_eq!(Arg::from(2.5_f64).as_integer(), None);
        assert_eq!(Arg::from("x").as_number(), None);
        assert!(Arg::from(Pattern::new("a", "").unwrap()).as_pattern().is_some());
    }

    #[test]
    fn display() {
        let list = Arg::List(vec![Arg::from(1_i64), Arg::from("b"), Arg::from(2.5_f64)]);
        assert_eq!(list.to_string(), "[1, b, 2.5]");
        assert_eq!(
            Arg::from(Pattern::new("a+", "i").unwrap()).to_string(),
            "/a+/i"
        );
    }

    #[test]
    fn serializes_as_plain_json() {
        let list = Arg::List(vec![Arg::from(1_i64), Arg::from("b"), Arg::from(2.5_f64)]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!([1, "b", 2.5])
        );
    }
}
