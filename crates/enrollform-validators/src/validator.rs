//! Single-field validator built from a [`FieldDescriptor`]

use crate::field::{FieldDescriptor, FieldId};
use crate::outcome::{ValidationFailure, ValidationOutcome};
use crate::patterns::Pattern;
use std::borrow::Cow;

/// Evaluates values for one field.
///
/// Evaluation is pure: it never touches display state and returns the same
/// outcome for the same input. Callers are expected to trim the raw value
/// first; `evaluate` treats whitespace as content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
	descriptor: FieldDescriptor,
}

impl Validator {
	/// Builds a validator from a field, its required message and an optional
	/// format pattern.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_validators::{FieldId, Pattern, Validator};
	///
	/// let validator = Validator::new(FieldId::Telephone, "Phone required", Some(Pattern::Telephone));
	/// assert_eq!(validator.evaluate("").message(), "Phone required");
	/// assert_eq!(validator.evaluate("12345").message(), "Invalid input");
	/// assert!(validator.evaluate("1234567890").is_valid());
	/// ```
	pub fn new(
		field: FieldId,
		required_message: impl Into<Cow<'static, str>>,
		pattern: Option<Pattern>,
	) -> Self {
		let descriptor = FieldDescriptor::new(field, required_message);
		let descriptor = match pattern {
			Some(pattern) => descriptor.with_pattern(pattern),
			None => descriptor,
		};
		Self::from_descriptor(descriptor)
	}

	pub fn from_descriptor(descriptor: FieldDescriptor) -> Self {
		Self { descriptor }
	}

	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}

	pub fn field(&self) -> FieldId {
		self.descriptor.field()
	}

	/// Evaluates `input`; the first failing rule decides the outcome.
	///
	/// 1. empty input fails with the field's required message
	/// 2. input not matching the field's pattern fails with "Invalid input"
	/// 3. anything else is valid
	pub fn evaluate(&self, input: &str) -> ValidationOutcome {
		if input.is_empty() {
			return ValidationOutcome::Invalid(ValidationFailure::RequiredFieldEmpty {
				message: self.descriptor.required_message().to_string(),
			});
		}

		if self
			.descriptor
			.pattern()
			.is_some_and(|pattern| !pattern.is_match(input))
		{
			return ValidationOutcome::Invalid(ValidationFailure::FormatMismatch);
		}

		ValidationOutcome::Valid
	}
}

impl From<FieldDescriptor> for Validator {
	fn from(descriptor: FieldDescriptor) -> Self {
		Self::from_descriptor(descriptor)
	}
}
