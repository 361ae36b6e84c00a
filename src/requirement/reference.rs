//! Resolution of `reference` requirements.
//!
//! A reference requirement is a selector into some external document (a form,
//! a page, a record set). The document lives outside this crate; it is reached
//! through a [`Resolver`].

use nonempty::NonEmpty;
use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Looks up selectors against an external document.
pub trait Resolver: Send + Sync {
    /// Returns the identifiers of every element matching `selector`.
    fn resolve(&self, selector: &str) -> Vec<String>;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn resolve(&self, selector: &str) -> Vec<String> {
        self(selector)
    }
}

/// A resolver with no document behind it; every selector resolves to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocument;

impl Resolver for NoDocument {
    fn resolve(&self, _selector: &str) -> Vec<String> {
        Vec::new()
    }
}

/// The non-empty result of resolving a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selector: String,
    matches: NonEmpty<String>,
}

impl Selection {
    /// Creates a selection, or `None` if nothing matched.
    #[must_use]
    pub fn new(selector: String, matches: Vec<String>) -> Option<Self> {
        NonEmpty::from_vec(matches).map(|matches| Self { selector, matches })
    }

    /// The selector that was resolved.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Identifiers of the matched elements, in document order.
    #[must_use]
    pub const fn matches(&self) -> &NonEmpty<String> {
        &self.matches
    }

    /// Identifier of the first matched element.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.matches.head
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Selection", 2)?;
        state.serialize_field("selector", &self.selector)?;
        state.serialize_field("matches", &self.matches.iter().collect::<Vec<_>>())?;
        state.end()
    }
}
