//! Error types for the validation engine

/// Errors raised by the validation engine itself.
///
/// User input problems are never errors: an empty or malformed value produces
/// an invalid [`ValidationOutcome`](crate::ValidationOutcome). This type only
/// covers wiring mistakes between the host page and the rule table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	/// An event named a field that has no validator.
	#[error("Unknown form field '{name}'")]
	UnknownField { name: String },
}

impl ValidationError {
	/// Creates an [`ValidationError::UnknownField`] for the given identifier.
	pub fn unknown_field(name: impl Into<String>) -> Self {
		Self::UnknownField { name: name.into() }
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;
