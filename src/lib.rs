//! # enrollform
//!
//! Client-side validation for a seven-field course enrolment form.
//!
//! enrollform checks what the user typed into each field, shows an inline
//! error message per field, and only lets a submission through once every
//! field is valid and the user has confirmed it.
//!
//! ## Crates
//!
//! - [`validators`] (`enrollform-validators`) - the rule engine: fields,
//!   patterns, validators and the registry
//! - [`forms`] (`enrollform-forms`, feature `forms`, on by default) - the form
//!   controller and the capabilities it drives (display, confirmation,
//!   submission sink)
//!
//! ## Rules
//!
//! | field | required message | format |
//! |---|---|---|
//! | name | Name is required | - |
//! | address | Address is required | - |
//! | email | Valid email is required | `^[^\s@]+@[^\s@]+\.[^\s@]+$` |
//! | password | Password is required | - |
//! | telephone | Valid 10-digit phone number is required | ten digits |
//! | course | Please select a course | - |
//! | comments | Comment is required | - |
//!
//! A non-empty value that fails its format shows "Invalid input".
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use enrollform::prelude::*;
//!
//! let mut form = FormController::new(MemoryDisplay::new(), StaticAnswer::accept(), CollectingSink::new());
//!
//! form.dispatch(FormEvent::input("telephone", "12345")).unwrap();
//! assert_eq!(
//!     form.display().text(DisplayChannel::FieldError(FieldId::Telephone)),
//!     "Invalid input"
//! );
//!
//! let outcome = form.on_submit();
//! assert_eq!(outcome.to_string(), "Error in name");
//! # }
//! ```

pub mod forms;
pub mod validators;

// Re-export the rule engine
pub use enrollform_validators::{
	FieldDescriptor, FieldId, Pattern, ValidationError, ValidationFailure, ValidationOutcome,
	Validator, ValidatorRegistry, trim_input,
};

// Re-export the controller
#[cfg(feature = "forms")]
pub use enrollform_forms::{
	ConfirmationGate, DisplayChannel, FormController, FormError, FormEvent, FormSettings,
	MessageDisplay, SubmissionPayload, SubmissionSink, SubmitOutcome,
};

/// Re-export commonly used types
pub mod prelude {
	pub use enrollform_validators::prelude::*;

	#[cfg(feature = "forms")]
	pub use enrollform_forms::{
		CollectingSink, ConfirmationGate, DisplayChannel, EventOutcome, FormController, FormError,
		FormEvent, FormResult, FormSettings, FormValues, MemoryDisplay, MessageDisplay,
		StaticAnswer, SubmissionPayload, SubmissionSink, SubmitOutcome, TracingSink,
	};
}
