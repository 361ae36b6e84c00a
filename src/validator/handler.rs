use std::{fmt, sync::Arc};

use super::Value;
use crate::requirement::{Arg, Error as RequirementError, Requirements};

/// Legacy combined handler: `(value, requirement)`.
///
/// When a requirement parses into several arguments they arrive gathered in a
/// single [`Arg::List`].
pub type LegacyFn = dyn Fn(&Value, Option<Arg>) -> bool + Send + Sync;

/// Handler for collection values.
pub type MultipleFn = dyn Fn(&[String], &[Arg]) -> bool + Send + Sync;

/// Handler for scalar values that read as numbers.
pub type NumberFn = dyn Fn(f64, &[Arg]) -> bool + Send + Sync;

/// Handler for scalar values as text.
pub type StringFn = dyn Fn(&str, &[Arg]) -> bool + Send + Sync;

/// Custom requirement parser replacing the declared-type parser.
pub type ParseFn = dyn Fn(&str) -> Result<Vec<Arg>, RequirementError> + Send + Sync;

/// Deprecated transformer hook, superseded by [`ParseFn`].
pub type TransformerFn = dyn Fn(&str) -> Requirements + Send + Sync;

/// The dispatch route a validator definition resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// A legacy combined handler receives every value.
    Legacy,
    /// Only collection values are handled.
    Multiple,
    /// Scalars are coerced to numbers; collections are handled if a
    /// collection handler is also declared.
    Numeric,
    /// Scalars are handled as text; collections are handled if a collection
    /// handler is also declared.
    StringOnly,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Multiple => write!(f, "multiple"),
            Self::Numeric => write!(f, "numeric"),
            Self::StringOnly => write!(f, "string"),
        }
    }
}

/// Handlers of a definition, resolved once at construction.
#[derive(Clone)]
pub(super) enum Handlers {
    Legacy(Arc<LegacyFn>),
    Capabilities {
        multiple: Option<Arc<MultipleFn>>,
        scalar: Option<Scalar>,
    },
}

#[derive(Clone)]
pub(super) enum Scalar {
    Numeric(Arc<NumberFn>),
    Text(Arc<StringFn>),
}

impl Handlers {
    /// Resolves the declared capabilities.
    ///
    /// A legacy handler shadows every other capability, and a numeric handler
    /// shadows a string handler.
    pub(super) fn resolve(
        legacy: Option<Arc<LegacyFn>>,
        multiple: Option<Arc<MultipleFn>>,
        number: Option<Arc<NumberFn>>,
        string: Option<Arc<StringFn>>,
    ) -> Self {
        if let Some(legacy) = legacy {
            return Self::Legacy(legacy);
        }
        let scalar = number
            .map(Scalar::Numeric)
            .or_else(|| string.map(Scalar::Text));
        Self::Capabilities { multiple, scalar }
    }

    /// The route these handlers take, or `None` if nothing was declared.
    pub(super) const fn kind(&self) -> Option<HandlerKind> {
        match self {
            Self::Legacy(_) => Some(HandlerKind::Legacy),
            Self::Capabilities {
                scalar: Some(Scalar::Numeric(_)),
                ..
            } => Some(HandlerKind::Numeric),
            Self::Capabilities {
                scalar: Some(Scalar::Text(_)),
                ..
            } => Some(HandlerKind::StringOnly),
            Self::Capabilities {
                multiple: Some(_),
                scalar: None,
            } => Some(HandlerKind::Multiple),
            Self::Capabilities {
                multiple: None,
                scalar: None,
            } => None,
        }
    }
}
