//! Result of evaluating a single field

use std::fmt;

/// Message shown when a non-empty value fails its field's pattern.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
	/// The value was empty where one is mandatory.
	RequiredFieldEmpty { message: String },
	/// The value was present but did not match the field's pattern.
	FormatMismatch,
}

impl ValidationFailure {
	/// Human-readable text for the field's error element.
	pub fn message(&self) -> &str {
		match self {
			ValidationFailure::RequiredFieldEmpty { message } => message,
			ValidationFailure::FormatMismatch => INVALID_INPUT_MESSAGE,
		}
	}
}

impl fmt::Display for ValidationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

/// Outcome of evaluating one value against one field's rule.
///
/// # Examples
///
/// ```
/// use enrollform_validators::{ValidationFailure, ValidationOutcome};
///
/// let valid = ValidationOutcome::Valid;
/// assert!(valid.is_valid());
/// assert_eq!(valid.message(), "");
///
/// let invalid = ValidationOutcome::Invalid(ValidationFailure::FormatMismatch);
/// assert!(!invalid.is_valid());
/// assert_eq!(invalid.message(), "Invalid input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationOutcome {
	#[default]
	Valid,
	Invalid(ValidationFailure),
}

impl ValidationOutcome {
	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Valid)
	}

	pub fn is_invalid(&self) -> bool {
		!self.is_valid()
	}

	/// Text for the field's error element; empty when valid.
	pub fn message(&self) -> &str {
		match self {
			Self::Valid => "",
			Self::Invalid(failure) => failure.message(),
		}
	}

	pub fn failure(&self) -> Option<&ValidationFailure> {
		match self {
			Self::Valid => None,
			Self::Invalid(failure) => Some(failure),
		}
	}

	/// Converts into a `Result`, keeping the failure as the error value.
	pub fn into_result(self) -> Result<(), ValidationFailure> {
		match self {
			Self::Valid => Ok(()),
			Self::Invalid(failure) => Err(failure),
		}
	}
}
