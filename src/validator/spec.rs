use std::{fmt, sync::Arc};

use super::{
    Value,
    handler::{LegacyFn, MultipleFn, NumberFn, ParseFn, StringFn, TransformerFn},
};
use crate::requirement::{
    Arg, Error as RequirementError, NoDocument, RequirementType, Requirements, Resolver,
};

/// Priority given to validators that do not declare one.
pub const DEFAULT_PRIORITY: i32 = 2;

/// The declaration a validator is built from.
///
/// Declare a requirement type and at least one capability handler, then turn
/// the declaration into a [`Validator`](super::Validator).
///
/// ```
/// use reqval::{RequirementKind, RequirementType, ValidatorSpec};
///
/// let spec = ValidatorSpec::new("length")
///     .requirement_type(
///         RequirementType::tuple([RequirementKind::Integer, RequirementKind::Integer]).unwrap(),
///     )
///     .priority(30)
///     .validate_string(|value, args| {
///         let len = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
///         matches!(
///             (args[0].as_integer(), args[1].as_integer()),
///             (Some(min), Some(max)) if (min..=max).contains(&len)
///         )
///     });
/// ```
#[derive(Clone)]
pub struct ValidatorSpec {
    pub(super) name: String,
    pub(super) requirement_type: RequirementType,
    pub(super) priority: i32,
    pub(super) legacy: Option<Arc<LegacyFn>>,
    pub(super) multiple: Option<Arc<MultipleFn>>,
    pub(super) number: Option<Arc<NumberFn>>,
    pub(super) string: Option<Arc<StringFn>>,
    pub(super) parse: Option<Arc<ParseFn>>,
    pub(super) transformer: Option<Arc<TransformerFn>>,
    pub(super) resolver: Arc<dyn Resolver>,
}

impl ValidatorSpec {
    /// Starts a declaration with a `string` requirement type, the default
    /// priority and no handlers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement_type: RequirementType::default(),
            priority: DEFAULT_PRIORITY,
            legacy: None,
            multiple: None,
            number: None,
            string: None,
            parse: None,
            transformer: None,
            resolver: Arc::new(NoDocument),
        }
    }

    /// Declares how requirement strings are converted.
    #[must_use]
    pub fn requirement_type(mut self, requirement_type: impl Into<RequirementType>) -> Self {
        self.requirement_type = requirement_type.into();
        self
    }

    /// Sets the ordering hint callers use when running several validators.
    #[must_use]
    pub const fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Declares a legacy combined handler.
    ///
    /// It receives every value, scalar or collection, and takes precedence
    /// over any other handler.
    #[must_use]
    pub fn validate<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Value, Option<Arg>) -> bool + Send + Sync + 'static,
    {
        self.legacy = Some(Arc::new(handler));
        self
    }

    /// Declares a handler for collection values.
    #[must_use]
    pub fn validate_multiple<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[String], &[Arg]) -> bool + Send + Sync + 'static,
    {
        self.multiple = Some(Arc::new(handler));
        self
    }

    /// Declares a handler for numeric scalars.
    ///
    /// Scalars that do not read as numbers fail validation without reaching
    /// the handler.
    #[must_use]
    pub fn validate_number<F>(mut self, handler: F) -> Self
    where
        F: Fn(f64, &[Arg]) -> bool + Send + Sync + 'static,
    {
        self.number = Some(Arc::new(handler));
        self
    }

    /// Declares a handler for text scalars.
    #[must_use]
    pub fn validate_string<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &[Arg]) -> bool + Send + Sync + 'static,
    {
        self.string = Some(Arc::new(handler));
        self
    }

    /// Replaces the declared-type parser with a custom one.
    ///
    /// The parser only sees text requirements. Structured requirements
    /// ([`Requirements::Single`], [`Requirements::List`]) are already parsed
    /// and pass through without reaching it.
    #[must_use]
    pub fn parse_requirements<F>(mut self, parser: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<Arg>, RequirementError> + Send + Sync + 'static,
    {
        self.parse = Some(Arc::new(parser));
        self
    }

    /// Declares a transformer hook.
    ///
    /// Like [`ValidatorSpec::parse_requirements`], it only sees text
    /// requirements. A non-list result is wrapped into a one-element argument
    /// sequence; a list result passes through as is. The transformer takes
    /// precedence over [`ValidatorSpec::parse_requirements`].
    #[deprecated(note = "use `requirement_type` or `parse_requirements` instead")]
    #[must_use]
    pub fn parameters_transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(&str) -> Requirements + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    /// Sets the document `reference` requirements are resolved against.
    #[must_use]
    pub fn resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// The validator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ValidatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSpec")
            .field("name", &self.name)
            .field("requirement_type", &self.requirement_type)
            .field("priority", &self.priority)
            .field("legacy", &self.legacy.is_some())
            .field("multiple", &self.multiple.is_some())
            .field("number", &self.number.is_some())
            .field("string", &self.string.is_some())
            .field("parse", &self.parse.is_some())
            .field("transformer", &self.transformer.is_some())
            .finish_non_exhaustive()
    }
}
