//! Parsing of raw requirement strings into typed arguments.
//!
//! A requirement is the textual constraint attached to a value, for example
//! `"5"`, `"[1, 2]"` or `"/ab+c/gi"`. How it is interpreted depends on the
//! [`RequirementType`] a validator declares.

pub mod array;
mod arg;
pub mod converter;
mod kind;
mod parser;
pub mod reference;
pub mod regexp;

pub use arg::Arg;
pub use kind::{RequirementKind, RequirementType};
pub use parser::{Requirements, parse, parse_text};
pub use reference::{NoDocument, Resolver, Selection};
pub use regexp::{Flags, Pattern};

/// Errors raised while converting or parsing requirements.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The requirement type tag is not one of the recognised tags.
    #[error("Unknown requirement specification: \"{0}\"")]
    UnknownRequirementType(String),

    /// The requirement could not be read as an integer.
    #[error("Requirement is not an integer: \"{0}\"")]
    NotAnInteger(String),

    /// The requirement is numeric but its integer part does not fit in an
    /// `i64`.
    #[error("Requirement is outside the integer range: \"{0}\"")]
    IntegerOutOfRange(String),

    /// The requirement could not be read as a number.
    #[error("Requirement is not a number: \"{0}\"")]
    NotANumber(String),

    /// The selector resolved to nothing.
    #[error("No such reference: \"{0}\"")]
    NoSuchReference(String),

    /// A tuple requirement was not wrapped in brackets.
    #[error("Requirement is not an array: \"{0}\"")]
    NotAnArray(String),

    /// A tuple requirement has the wrong number of values.
    #[error("Requirement has {got} values when {want} are needed")]
    ArityMismatch {
        /// Number of values found in the requirement.
        got: usize,
        /// Number of values the requirement type declares.
        want: usize,
    },

    /// The regular expression body was rejected by the regex engine.
    #[error("Invalid regular expression /{pattern}/: {reason}")]
    InvalidPattern {
        /// The pattern body, without delimiters or flags.
        pattern: String,
        /// Description of the syntax error.
        reason: String,
    },
}
