//! Validation rule engine for enrollform
//!
//! This crate holds the pure part of form validation:
//! - [`FieldId`]: the closed set of fields on the enrolment form
//! - [`FieldDescriptor`]: required message and optional [`Pattern`] per field
//! - [`Validator`]: evaluates one value for one field into a [`ValidationOutcome`]
//! - [`ValidatorRegistry`]: the fixed field → validator table
//!
//! Nothing here renders text or keeps page state; see `enrollform-forms` for
//! the controller that applies outcomes to the page.
//!
//! ## Example
//!
//! ```
//! use enrollform_validators::{FieldId, ValidatorRegistry};
//!
//! let registry = ValidatorRegistry::global();
//!
//! let outcome = registry.evaluate(FieldId::Telephone, "12345");
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.message(), "Invalid input");
//!
//! let outcome = registry.lookup("name").unwrap().evaluate("");
//! assert_eq!(outcome.message(), "Name is required");
//! ```

pub mod error;
pub mod field;
pub mod outcome;
pub mod patterns;
pub mod registry;
pub mod validator;

pub use error::{ValidationError, ValidationResult};
pub use field::{FieldDescriptor, FieldId};
pub use outcome::{INVALID_INPUT_MESSAGE, ValidationFailure, ValidationOutcome};
pub use patterns::{Pattern, is_input_whitespace, trim_input};
pub use registry::ValidatorRegistry;
pub use validator::Validator;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::error::*;
	pub use crate::field::*;
	pub use crate::outcome::*;
	pub use crate::patterns::*;
	pub use crate::registry::*;
	pub use crate::validator::*;
}
