//! Validation rule engine module.
//!
//! This module provides the field table, format patterns and the validator
//! registry. Everything here is pure: evaluating a value never touches page
//! state.
//!
//! # Examples
//!
//! ```rust
//! use enrollform::validators::{FieldId, ValidatorRegistry};
//!
//! let outcome = ValidatorRegistry::global().evaluate(FieldId::Email, "a@b");
//! assert_eq!(outcome.message(), "Invalid input");
//! ```

pub use enrollform_validators::*;
