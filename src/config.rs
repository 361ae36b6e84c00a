use std::path::Path;

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

use crate::{RequirementType, ValidatorSpec, validator::DEFAULT_PRIORITY};

/// A file of validator declarations.
///
/// Declarations carry the data half of a [`ValidatorSpec`]: its name,
/// requirement type and priority. Handlers are attached in code through
/// [`Declaration::into_spec`]. A later declaration replaces an earlier one
/// with the same name, keeping the earlier position.
///
/// ```toml
/// _version = "1"
///
/// [[validators]]
/// name = "length"
/// requirement_type = ["integer", "integer"]
/// priority = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    validators: Vec<Declaration>,
}

/// Errors reading a declaration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid declaration file.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Loads declarations from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// declaration file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// All declarations, in file order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.validators
    }

    /// Finds the declaration with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.validators.iter().find(|d| d.name() == name)
    }
}

/// The declared data of one validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeclaration", into = "RawDeclaration")]
pub struct Declaration {
    name: NonEmptyString,
    requirement_type: RequirementType,
    priority: i32,
}

impl Declaration {
    /// Declares a validator with the default priority.
    #[must_use]
    pub const fn new(name: NonEmptyString, requirement_type: RequirementType) -> Self {
        Self {
            name,
            requirement_type,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The validator name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared requirement type.
    #[must_use]
    pub const fn requirement_type(&self) -> &RequirementType {
        &self.requirement_type
    }

    /// The declared priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Starts a [`ValidatorSpec`] from this declaration.
    #[must_use]
    pub fn into_spec(self) -> ValidatorSpec {
        ValidatorSpec::new(self.name.as_str())
            .requirement_type(self.requirement_type)
            .priority(self.priority)
    }
}

const fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

#[derive(Debug, Serialize, Deserialize)]
struct RawDeclaration {
    name: String,
    #[serde(default)]
    requirement_type: RequirementType,
    #[serde(default = "default_priority")]
    priority: i32,
}

impl TryFrom<RawDeclaration> for Declaration {
    type Error = String;

    fn try_from(raw: RawDeclaration) -> Result<Self, Self::Error> {
        let name = NonEmptyString::new(raw.name)
            .map_err(|_| "validator name must not be empty".to_string())?;
        Ok(Self::new(name, raw.requirement_type).with_priority(raw.priority))
    }
}

impl From<Declaration> for RawDeclaration {
    fn from(declaration: Declaration) -> Self {
        Self {
            name: declaration.name.as_str().to_string(),
            requirement_type: declaration.requirement_type,
            priority: declaration.priority,
        }
    }
}

/// The serialized versions of the configuration.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        validators: Vec<Declaration>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { validators } => {
                let mut merged: Vec<Declaration> = Vec::with_capacity(validators.len());
                for declaration in validators {
                    match merged.iter_mut().find(|d| d.name() == declaration.name()) {
                        Some(existing) => *existing = declaration,
                        None => merged.push(declaration),
                    }
                }
                Self { validators: merged }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{RequirementKind, Validator, Value};

    fn name(s: &str) -> NonEmptyString {
        NonEmptyString::new(s.to_string()).unwrap()
    }

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\n\n[[validators]]\nname = \"length\"\nrequirement_type = [\"integer\", \"integer\"]\npriority = 30\n\n[[validators]]\nname = \"pattern\"\nrequirement_type = \"regexp\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.declarations().len(), 2);
        let length = config.find("length").unwrap();
        assert_eq!(length.priority(), 30);
        assert_eq!(length.requirement_type().arity(), 2);

        let pattern = config.find("pattern").unwrap();
        assert_eq!(pattern.priority(), DEFAULT_PRIORITY);
        assert_eq!(
            pattern.requirement_type(),
            &RequirementType::Scalar(RequirementKind::Regexp)
        );
    }

    #[test]
    fn missing_requirement_type_defaults_to_string() {
        let config: Config =
            toml::from_str("_version = \"1\"\n[[validators]]\nname = \"plain\"\n").unwrap();
        assert_eq!(
            config.find("plain").unwrap().requirement_type(),
            &RequirementType::default()
        );
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
    }

    #[test]
    fn load_rejects_unknown_requirement_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\n[[validators]]\nname = \"when\"\nrequirement_type = \"date\"\n",
        )
        .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn load_rejects_empty_name() {
        let result: Result<Config, _> =
            toml::from_str("_version = \"1\"\n[[validators]]\nname = \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn load_reads_tuple_and_scalar_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\n[[validators]]\nname = \"range\"\nrequirement_type = [\"number\", \"number\"]\npriority = 32\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        let expected = Declaration::new(
            name("range"),
            RequirementType::tuple([RequirementKind::Number, RequirementKind::Number]).unwrap(),
        )
        .with_priority(32);

        assert_eq!(config.declarations(), [expected].as_slice());
    }

    #[test]
    fn later_declaration_replaces_earlier_by_name() {
        let config: Config = toml::from_str(
            "_version = \"1\"\n\
             [[validators]]\nname = \"min\"\nrequirement_type = \"integer\"\n\
             [[validators]]\nname = \"max\"\n\
             [[validators]]\nname = \"min\"\nrequirement_type = \"number\"\npriority = 30\n",
        )
        .unwrap();

        let names: Vec<_> = config.declarations().iter().map(Declaration::name).collect();
        assert_eq!(names, ["min", "max"]);

        let min = config.find("min").unwrap();
        assert_eq!(
            min.requirement_type(),
            &RequirementType::Scalar(RequirementKind::Number)
        );
        assert_eq!(min.priority(), 30);
    }

    #[test]
    fn declaration_seeds_validator_spec() {
        let declaration =
            Declaration::new(name("min"), RequirementKind::Number.into()).with_priority(30);
        let validator = Validator::new(declaration.into_spec().validate_number(|value, args| {
            args[0].as_number().is_some_and(|min| value >= min)
        }));

        assert_eq!(validator.name(), "min");
        assert_eq!(validator.priority(), 30);
        assert_eq!(validator.evaluate(&Value::from("4"), "3.5"), Ok(true));
    }
}
