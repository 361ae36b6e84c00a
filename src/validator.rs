//! Validator definitions and dispatch.
//!
//! A [`Validator`] is built once from a [`ValidatorSpec`] and then evaluated
//! against many values. Building resolves the declared handlers into a fixed
//! dispatch route ([`HandlerKind`]) and adapts the deprecated transformer
//! hook into a regular parser. Evaluation parses the requirement afresh on
//! every call; a definition holds no mutable state and can be shared between
//! threads.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::instrument;

mod handler;
mod spec;
mod value;

use handler::{Handlers, Scalar};
pub use handler::{HandlerKind, LegacyFn, MultipleFn, NumberFn, ParseFn, StringFn, TransformerFn};
pub use spec::{DEFAULT_PRIORITY, ValidatorSpec};
pub use value::Value;

use crate::requirement::{
    self, Arg, RequirementType, Requirements, Resolver, converter::parse_number,
};

/// Errors raised while evaluating a validator.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The requirement could not be parsed.
    #[error(transparent)]
    Requirement(#[from] requirement::Error),

    /// A collection value reached a validator without a collection handler.
    #[error("Validator {0} does not handle multiple values")]
    UnsupportedMultipleValues(String),

    /// A scalar value reached a validator without a scalar handler.
    #[error("Validator {0} only handles multiple values")]
    UnsupportedScalarValidator(String),
}

/// Set once the deprecated transformer hook has been reported.
static TRANSFORMER_NOTICE: AtomicBool = AtomicBool::new(false);

/// Returns `true` once the transformer deprecation notice has been emitted.
///
/// The notice is emitted at most once per process.
#[must_use]
pub fn deprecation_notice_emitted() -> bool {
    TRANSFORMER_NOTICE.load(Ordering::Relaxed)
}

fn notify_transformer_deprecated() {
    warn_transformer_once(&TRANSFORMER_NOTICE);
}

fn warn_transformer_once(notice: &AtomicBool) {
    if !notice.swap(true, Ordering::Relaxed) {
        tracing::warn!(
            "parameters_transformer is deprecated. Use requirement_type or define \
             parse_requirements instead"
        );
    }
}

#[derive(Clone)]
enum Parser {
    Declared,
    Custom(Arc<ParseFn>),
}

/// A registered validator.
#[derive(Clone)]
pub struct Validator {
    name: String,
    requirement_type: RequirementType,
    priority: i32,
    parser: Parser,
    handlers: Handlers,
    resolver: Arc<dyn Resolver>,
}

impl Validator {
    /// Builds a validator from its declaration.
    ///
    /// A declaration without any handler is accepted; the omission surfaces
    /// as an error when a value is first dispatched.
    #[must_use]
    pub fn new(spec: ValidatorSpec) -> Self {
        let parser = match (spec.transformer, spec.parse) {
            (Some(transformer), _) => {
                notify_transformer_deprecated();
                Parser::Custom(Arc::new(
                    move |text: &str| -> Result<Vec<Arg>, requirement::Error> {
                        Ok(transformer(text).into_args())
                    },
                ))
            }
            (None, Some(parse)) => Parser::Custom(parse),
            (None, None) => Parser::Declared,
        };
        let handlers = Handlers::resolve(spec.legacy, spec.multiple, spec.number, spec.string);

        let kind = handlers
            .kind()
            .map_or_else(|| "none".to_string(), |kind| kind.to_string());
        tracing::debug!(
            name = %spec.name,
            requirement_type = %spec.requirement_type,
            %kind,
            "built validator"
        );

        Self {
            name: spec.name,
            requirement_type: spec.requirement_type,
            priority: spec.priority,
            parser,
            handlers,
            resolver: spec.resolver,
        }
    }

    /// The validator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordering hint declared for this validator.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// The declared requirement type.
    #[must_use]
    pub const fn requirement_type(&self) -> &RequirementType {
        &self.requirement_type
    }

    /// The dispatch route, or `None` if no handler was declared.
    #[must_use]
    pub const fn kind(&self) -> Option<HandlerKind> {
        self.handlers.kind()
    }

    /// Parses requirements into handler arguments.
    ///
    /// Text goes through the custom parser if one was declared, otherwise
    /// through the declared requirement type. Structured requirements pass
    /// through as they are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Requirement`] if the text cannot be parsed.
    pub fn parse_requirements(
        &self,
        requirements: impl Into<Requirements>,
    ) -> Result<Vec<Arg>, Error> {
        let args = match (requirements.into(), &self.parser) {
            (Requirements::Text(text), Parser::Custom(parse)) => parse(&text)?,
            (requirements, _) => {
                requirement::parse(requirements, &self.requirement_type, &*self.resolver)?
            }
        };
        Ok(args)
    }

    /// Decides whether `value` satisfies already parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMultipleValues`] or
    /// [`Error::UnsupportedScalarValidator`] when the value's shape has no
    /// matching handler.
    pub fn validate(&self, value: &Value, mut args: Vec<Arg>) -> Result<bool, Error> {
        match &self.handlers {
            Handlers::Legacy(handler) => {
                let requirement = if args.len() > 1 {
                    Some(Arg::List(args))
                } else {
                    args.pop()
                };
                Ok(handler(value, requirement))
            }
            Handlers::Capabilities { multiple, scalar } => match value {
                Value::Multiple(values) => {
                    let handler = multiple
                        .as_ref()
                        .ok_or_else(|| Error::UnsupportedMultipleValues(self.name.clone()))?;
                    Ok(handler(values.as_slice(), args.as_slice()))
                }
                Value::Single(text) => match scalar {
                    Some(Scalar::Numeric(handler)) => {
                        let Some(number) = parse_number(text) else {
                            tracing::trace!(validator = %self.name, "value is not numeric");
                            return Ok(false);
                        };
                        Ok(handler(number, args.as_slice()))
                    }
                    Some(Scalar::Text(handler)) => Ok(handler(text.as_str(), args.as_slice())),
                    None => Err(Error::UnsupportedScalarValidator(self.name.clone())),
                },
            },
        }
    }

    /// Parses `requirements` and validates `value` against them.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Validator::parse_requirements`] or
    /// [`Validator::validate`].
    #[instrument(level = "trace", skip_all, fields(validator = %self.name))]
    pub fn evaluate(
        &self,
        value: &Value,
        requirements: impl Into<Requirements>,
    ) -> Result<bool, Error> {
        let args = self.parse_requirements(requirements)?;
        self.validate(value, args)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .field("requirement_type", &self.requirement_type)
            .field("priority", &self.priority)
            .field("kind", &self.kind())
            .field("custom_parser", &matches!(self.parser, Parser::Custom(_)))
            .finish_non_exhaustive()
    }
}
