//! Events delivered by the page and what handling them produced

use crate::submission::SubmissionPayload;
use enrollform_validators::{FieldId, ValidationFailure, ValidationOutcome};
use std::fmt;

/// An interaction reported by the page, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
	/// A control's value changed. `field` is the control's page identifier.
	Input { field: String, value: String },
	/// A key was pressed anywhere in the form.
	KeyDown,
	/// The user asked to submit the form.
	Submit,
	/// The user reset the form.
	Reset,
}

impl FormEvent {
	/// Shorthand for [`FormEvent::Input`].
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_forms::FormEvent;
	///
	/// let event = FormEvent::input("email", "a@b.co");
	/// assert!(matches!(event, FormEvent::Input { ref field, .. } if field == "email"));
	/// ```
	pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Input {
			field: field.into(),
			value: value.into(),
		}
	}
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Validation stopped at the first invalid field in form order.
	Invalid {
		field: FieldId,
		failure: ValidationFailure,
	},
	/// Every field was valid but the user declined the confirmation.
	Declined,
	/// Every field was valid, the user confirmed, and the payload was emitted.
	Submitted(SubmissionPayload),
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, Self::Submitted(_))
	}

	/// The field submission stopped at, if any.
	pub fn invalid_field(&self) -> Option<FieldId> {
		match self {
			Self::Invalid { field, .. } => Some(*field),
			_ => None,
		}
	}

	pub fn payload(&self) -> Option<&SubmissionPayload> {
		match self {
			Self::Submitted(payload) => Some(payload),
			_ => None,
		}
	}
}

impl fmt::Display for SubmitOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Invalid { field, .. } => write!(f, "Error in {}", field),
			Self::Declined => f.write_str("Submission declined"),
			Self::Submitted(_) => f.write_str("Submitted"),
		}
	}
}

/// What the controller did in response to a [`FormEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
	/// A single field was validated and its error channel updated.
	Validated {
		field: FieldId,
		outcome: ValidationOutcome,
	},
	/// The success line was cleared.
	SuccessCleared,
	Submit(SubmitOutcome),
	/// Values and field error channels were cleared.
	Reset,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_submit_display() {
		let outcome = SubmitOutcome::Invalid {
			field: FieldId::Telephone,
			failure: ValidationFailure::FormatMismatch,
		};

		assert_eq!(outcome.to_string(), "Error in telephone");
		assert_eq!(outcome.invalid_field(), Some(FieldId::Telephone));
		assert!(!outcome.is_submitted());
		assert!(outcome.payload().is_none());
	}

	#[rstest]
	fn test_submitted_exposes_payload() {
		let outcome = SubmitOutcome::Submitted(SubmissionPayload::default());

		assert!(outcome.is_submitted());
		assert_eq!(outcome.payload(), Some(&SubmissionPayload::default()));
		assert_eq!(outcome.invalid_field(), None);
	}
}
