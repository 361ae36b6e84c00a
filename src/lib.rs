//! Pluggable rule validation.
//!
//! Validators are declared once and reused for every value checked against
//! them. Each declaration states how its textual constraint (the
//! "requirement", e.g. `"5"`, `"[1, 2]"` or `"/ab+c/i"`) is parsed into typed
//! arguments, and which capability handlers decide whether a value passes.
//!
//! ```
//! use reqval::{RequirementKind, Validator, ValidatorSpec};
//!
//! let min = Validator::new(
//!     ValidatorSpec::new("min")
//!         .requirement_type(RequirementKind::Number)
//!         .validate_number(|value, args| {
//!             args.first()
//!                 .and_then(reqval::Arg::as_number)
//!                 .is_some_and(|min| value >= min)
//!         }),
//! );
//!
//! assert!(min.evaluate(&"12".into(), "10").unwrap());
//! assert!(!min.evaluate(&"8".into(), "10").unwrap());
//! assert!(!min.evaluate(&"twelve".into(), "10").unwrap());
//! ```

/// Requirement types, typed arguments and the requirement parser.
pub mod requirement;
pub use requirement::{
    Arg, Error as RequirementError, Pattern, RequirementKind, RequirementType, Requirements,
    Resolver,
};

/// Validator definitions and capability-based dispatch.
pub mod validator;
pub use validator::{Error as ValidatorError, HandlerKind, Validator, ValidatorSpec, Value};

mod config;
pub use config::{Config, Declaration, LoadError};
