//! Tokenizing of bracketed tuple requirements such as `[1, 2, 3]`.

use std::sync::LazyLock;

use regex::Regex;

use super::Error;

static ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[(.*)\]\s*$").expect("array pattern is valid"));

/// Splits a bracketed requirement into its trimmed, comma-separated values.
///
/// Empty brackets yield a single empty value.
///
/// # Errors
///
/// Returns [`Error::NotAnArray`] if the requirement is not wrapped in
/// brackets.
pub fn split(requirement: &str) -> Result<Vec<&str>, Error> {
    let inner = ARRAY
        .captures(requirement)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::NotAnArray(requirement.to_string()))?;

    Ok(inner.as_str().split(',').map(str::trim).collect())
}

/// Splits a bracketed requirement into exactly `arity` trimmed values.
///
/// # Errors
///
/// Returns [`Error::NotAnArray`] if the requirement is not wrapped in
/// brackets, or [`Error::ArityMismatch`] if it holds the wrong number of
/// values.
pub fn tokenize(requirement: &str, arity: usize) -> Result<Vec<&str>, Error> {
    let values = split(requirement)?;
    if values.len() != arity {
        return Err(Error::ArityMismatch {
            got: values.len(),
            want: arity,
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("[1, 2, 3]", 3, &["1", "2", "3"]; "spaced")]
    #[test_case("[1,2,3]", 3, &["1", "2", "3"]; "compact")]
    #[test_case("  [ a ,b,  c ]  ", 3, &["a", "b", "c"]; "outer and inner padding")]
    #[test_case("[/a,b/]", 2, &["/a", "b/"]; "commas always split")]
    #[test_case("[]", 1, &[""]; "empty brackets")]
    #[test_case("[x,]", 2, &["x", ""]; "trailing comma")]
    #[test_case("[[1], 2]", 2, &["[1]", "2"]; "nested brackets are kept")]
    fn tokenize_valid(input: &str, arity: usize, expected: &[&str]) {
        assert_eq!(tokenize(input, arity).unwrap(), expected);
    }

    #[test]
    fn arity_mismatch() {
        assert_eq!(
            tokenize("[1,2]", 3),
            Err(Error::ArityMismatch { got: 2, want: 3 })
        );
        assert_eq!(
            tokenize("[1,2,3,4]", 3),
            Err(Error::ArityMismatch { got: 4, want: 3 })
        );
    }

    #[test_case("1,2"; "missing brackets")]
    #[test_case("[1,2"; "missing closing bracket")]
    #[test_case("1,2]"; "missing opening bracket")]
    #[test_case("x [1,2]"; "leading text")]
    #[test_case(""; "empty")]
    fn not_an_array(input: &str) {
        assert_eq!(
            tokenize(input, 2),
            Err(Error::NotAnArray(input.to_string()))
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            Error::ArityMismatch { got: 2, want: 3 }.to_string(),
            "Requirement has 2 values when 3 are needed"
        );
        assert_eq!(
            Error::NotAnArray("1,2".to_string()).to_string(),
            "Requirement is not an array: \"1,2\""
        );
    }
}
