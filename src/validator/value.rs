/// A value under validation.
///
/// Form values arrive as text; a field that can hold several values (a
/// multi-select, a group of checkboxes) arrives as [`Value::Multiple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single scalar value.
    Single(String),
    /// A collection of values.
    Multiple(Vec<String>),
}

impl Value {
    /// Returns `true` for collection values.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the text of a scalar value.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text.as_str()),
            Self::Multiple(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_string).collect())
    }
}
