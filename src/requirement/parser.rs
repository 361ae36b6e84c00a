use super::{Arg, Error, RequirementType, Resolver, array, converter};

/// Requirements as handed to a validator: raw text, or values that were
/// already parsed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Requirements {
    /// A raw requirement string, parsed according to the declared type.
    Text(String),
    /// A single structured value, passed through as a one-element sequence.
    Single(Arg),
    /// Structured values, passed through unchanged.
    List(Vec<Arg>),
}

impl Requirements {
    /// Turns the requirements into an argument sequence without any parsing.
    ///
    /// Text becomes a single string argument. A single value is wrapped into a
    /// one-element sequence unless it is itself a list, whose members pass
    /// through unchanged.
    #[must_use]
    pub fn into_args(self) -> Vec<Arg> {
        match self {
            Self::Text(text) => vec![Arg::String(text)],
            Self::Single(Arg::List(args)) | Self::List(args) => args,
            Self::Single(arg) => vec![arg],
        }
    }
}

impl From<&str> for Requirements {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Requirements {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Arg> for Requirements {
    fn from(arg: Arg) -> Self {
        match arg {
            Arg::List(args) => Self::List(args),
            arg => Self::Single(arg),
        }
    }
}

impl From<Vec<Arg>> for Requirements {
    fn from(args: Vec<Arg>) -> Self {
        Self::List(args)
    }
}

/// Parses requirements into an argument sequence.
///
/// Structured requirements pass through untouched; text is parsed with
/// [`parse_text`].
///
/// # Errors
///
/// See [`parse_text`].
pub fn parse(
    requirements: Requirements,
    declared: &RequirementType,
    resolver: &dyn Resolver,
) -> Result<Vec<Arg>, Error> {
    match requirements {
        Requirements::Text(text) => parse_text(&text, declared, resolver),
        structured => Ok(structured.into_args()),
    }
}

/// Parses a raw requirement string according to the declared type.
///
/// A scalar type converts the whole string into one argument. A tuple type
/// tokenizes `[v1, v2, ...]` to the tuple's arity and converts each value
/// with the kind at the same position.
///
/// # Errors
///
/// Returns a tokenizing error ([`Error::NotAnArray`],
/// [`Error::ArityMismatch`]) for tuple types, or the first conversion error.
pub fn parse_text(
    text: &str,
    declared: &RequirementType,
    resolver: &dyn Resolver,
) -> Result<Vec<Arg>, Error> {
    match declared {
        RequirementType::Scalar(kind) => Ok(vec![converter::convert(*kind, text, resolver)?]),
        RequirementType::Tuple(kinds) => array::tokenize(text, kinds.len())?
            .into_iter()
            .zip(kinds.iter())
            .map(|(token, kind)| converter::convert(*kind, token, resolver))
            .collect(),
    }
}
