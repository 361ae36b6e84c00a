use std::{fmt, str::FromStr};

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use super::{Error, array};

/// The tag describing how a single requirement value is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequirementKind {
    /// The raw text, unchanged.
    #[default]
    String,
    /// A base-10 integer.
    Integer,
    /// A floating point number.
    Number,
    /// A selector resolved against an external document.
    Reference,
    /// A regular expression, either bare or in `/pattern/flags` form.
    Regexp,
}

impl RequirementKind {
    /// Looks up a kind by its tag.
    ///
    /// A missing or empty tag falls back to [`RequirementKind::String`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRequirementType`] if the tag is not recognised.
    pub fn from_tag(tag: Option<&str>) -> Result<Self, Error> {
        match tag.unwrap_or_default() {
            "" | "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "reference" => Ok(Self::Reference),
            "regexp" => Ok(Self::Regexp),
            other => Err(Error::UnknownRequirementType(other.to_string())),
        }
    }

    /// Returns the tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Reference => "reference",
            Self::Regexp => "regexp",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(Some(s.trim()))
    }
}

/// The declared type of a validator's requirement.
///
/// Either a single kind, or a fixed-arity tuple of kinds written in the
/// requirement as `[v1, v2, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawType", into = "RawType")]
pub enum RequirementType {
    /// One value converted from the whole requirement string.
    Scalar(RequirementKind),
    /// One value per bracketed, comma-separated token.
    Tuple(NonEmpty<RequirementKind>),
}

impl RequirementType {
    /// Builds a tuple type from the given kinds.
    ///
    /// Returns `None` if `kinds` is empty.
    pub fn tuple<I>(kinds: I) -> Option<Self>
    where
        I: IntoIterator<Item = RequirementKind>,
    {
        NonEmpty::from_vec(kinds.into_iter().collect()).map(Self::Tuple)
    }

    /// Number of arguments a requirement of this type parses into.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Tuple(kinds) => kinds.len(),
        }
    }

    /// Returns `true` if this is a tuple type.
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple(_))
    }
}

impl Default for RequirementType {
    fn default() -> Self {
        Self::Scalar(RequirementKind::String)
    }
}

impl From<RequirementKind> for RequirementType {
    fn from(kind: RequirementKind) -> Self {
        Self::Scalar(kind)
    }
}

impl From<NonEmpty<RequirementKind>> for RequirementType {
    fn from(kinds: NonEmpty<RequirementKind>) -> Self {
        Self::Tuple(kinds)
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Tuple(kinds) => {
                let joined = kinds
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{joined}]")
            }
        }
    }
}

impl FromStr for RequirementType {
    type Err = Error;

    /// Parses `integer` or `[integer, number]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('[') {
            let kinds = array::split(s)?
                .into_iter()
                .map(str::parse::<RequirementKind>)
                .collect::<Result<Vec<_>, _>>()?;
            Self::tuple(kinds).ok_or_else(|| Error::UnknownRequirementType(s.to_string()))
        } else {
            s.parse().map(Self::Scalar)
        }
    }
}

/// Serialized form: a tag string or an array of tag strings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawType {
    Scalar(String),
    Tuple(Vec<String>),
}

impl TryFrom<RawType> for RequirementType {
    type Error = Error;

    fn try_from(raw: RawType) -> Result<Self, Self::Error> {
        match raw {
            RawType::Scalar(tag) => RequirementKind::from_tag(Some(&tag)).map(Self::Scalar),
            RawType::Tuple(tags) => {
                let kinds = tags
                    .iter()
                    .map(|tag| RequirementKind::from_tag(Some(tag)))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::tuple(kinds).ok_or_else(|| Error::UnknownRequirementType("[]".to_string()))
            }
        }
    }
}

impl From<RequirementType> for RawType {
    fn from(declared: RequirementType) -> Self {
        match declared {
            RequirementType::Scalar(kind) => Self::Scalar(kind.as_str().to_string()),
            RequirementType::Tuple(kinds) => {
                Self::Tuple(kinds.iter().map(|kind| kind.as_str().to_string()).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;
    use test_case::test_case;

    use super::*;

    #[test_case(None, RequirementKind::String; "absent tag")]
    #[test_case(Some(""), RequirementKind::String; "empty tag")]
    #[test_case(Some("string"), RequirementKind::String; "string")]
    #[test_case(Some("integer"), RequirementKind::Integer; "integer")]
    #[test_case(Some("number"), RequirementKind::Number; "number")]
    #[test_case(Some("reference"), RequirementKind::Reference; "reference")]
    #[test_case(Some("regexp"), RequirementKind::Regexp; "regexp")]
    fn known_tags(tag: Option<&str>, expected: RequirementKind) {
        assert_eq!(RequirementKind::from_tag(tag).unwrap(), expected);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            RequirementKind::from_tag(Some("date")),
            Err(Error::UnknownRequirementType("date".to_string()))
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(RequirementKind::from_tag(Some("Integer")).is_err());
    }

    #[test]
    fn default_type_is_scalar_string() {
        assert_eq!(
            RequirementType::default(),
            RequirementType::Scalar(RequirementKind::String)
        );
        assert_eq!(RequirementType::default().arity(), 1);
    }

    #[test]
    fn empty_tuple_is_not_a_type() {
        assert!(RequirementType::tuple([]).is_none());
    }

    #[test_case("integer", RequirementType::Scalar(RequirementKind::Integer); "scalar")]
    #[test_case(" regexp ", RequirementType::Scalar(RequirementKind::Regexp); "scalar padded")]
    #[test_case(
        "[integer, number]",
        RequirementType::Tuple(nonempty![RequirementKind::Integer, RequirementKind::Number]);
        "tuple"
    )]
    #[test_case(
        "[string]",
        RequirementType::Tuple(nonempty![RequirementKind::String]);
        "one element tuple"
    )]
    fn parse_type(input: &str, expected: RequirementType) {
        assert_eq!(input.parse::<RequirementType>().unwrap(), expected);
    }

    #[test]
    fn parse_type_with_unknown_member() {
        let error = "[integer, colour]".parse::<RequirementType>().unwrap_err();
        assert_eq!(error, Error::UnknownRequirementType("colour".to_string()));
    }

    #[test]
    fn display_matches_parse_syntax() {
        let declared =
            RequirementType::tuple([RequirementKind::Integer, RequirementKind::Regexp]).unwrap();
        assert_eq!(declared.to_string(), "[integer, regexp]");
        assert_eq!(declared.to_string().parse::<RequirementType>().unwrap(), declared);
    }

    #[test]
    fn deserialize_scalar_and_tuple() {
        #[derive(Deserialize)]
        struct Holder {
            scalar: RequirementType,
            tuple: RequirementType,
        }

        let holder: Holder =
            toml::from_str("scalar = \"number\"\ntuple = [\"integer\", \"integer\"]\n").unwrap();
        assert_eq!(holder.scalar, RequirementKind::Number.into());
        assert_eq!(holder.tuple.arity(), 2);
    }

    #[test]
    fn deserialize_rejects_unknown_tag() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Holder {
            declared: RequirementType,
        }

        assert!(toml::from_str::<Holder>("declared = \"colour\"\n").is_err());
        assert!(toml::from_str::<Holder>("declared = []\n").is_err());
    }
}
