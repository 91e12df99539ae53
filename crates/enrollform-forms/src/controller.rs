//! Form controller
//!
//! The controller owns the page-side state of one form: the current field
//! values and the display it writes messages to. It reacts to four events:
//!
//! - **input**: trim the value, evaluate it, show the result on the field's
//!   error channel
//! - **submit**: validate fields in form order, stop at the first invalid one;
//!   if all are valid ask the confirmation gate once, and only on a yes show
//!   the success message, emit the payload and reset the form
//! - **reset**: clear values and every field error channel without validating
//! - **keydown**: clear the success line
//!
//! ## Example
//!
//! ```
//! use enrollform_forms::{CollectingSink, FormController, MemoryDisplay, StaticAnswer};
//! use enrollform_forms::DisplayChannel;
//! use enrollform_validators::FieldId;
//!
//! let mut form = FormController::new(MemoryDisplay::new(), StaticAnswer::accept(), CollectingSink::new());
//!
//! let outcome = form.on_input("email", "not-an-email").unwrap();
//! assert_eq!(outcome.message(), "Invalid input");
//! assert_eq!(form.display().text(DisplayChannel::FieldError(FieldId::Email)), "Invalid input");
//!
//! let result = form.on_submit();
//! assert_eq!(result.invalid_field(), Some(FieldId::Name));
//! ```

use crate::confirm::ConfirmationGate;
use crate::display::{DisplayChannel, MessageDisplay};
use crate::error::FormResult;
use crate::events::{EventOutcome, FormEvent, SubmitOutcome};
use crate::settings::FormSettings;
use crate::submission::{SubmissionPayload, SubmissionSink};
use crate::values::FormValues;
use enrollform_validators::{FieldId, ValidationOutcome, ValidatorRegistry};

pub struct FormController<D, C, S> {
	registry: &'static ValidatorRegistry,
	values: FormValues,
	display: D,
	gate: C,
	sink: S,
	settings: FormSettings,
}

impl<D, C, S> FormController<D, C, S>
where
	D: MessageDisplay,
	C: ConfirmationGate,
	S: SubmissionSink,
{
	/// Creates a controller for an empty form using the global registry and
	/// default settings.
	pub fn new(display: D, gate: C, sink: S) -> Self {
		Self {
			registry: ValidatorRegistry::global(),
			values: FormValues::new(),
			display,
			gate,
			sink,
			settings: FormSettings::default(),
		}
	}

	/// Replaces the settings without checking them. Prefer
	/// [`Self::try_with_settings`] for settings that come from outside.
	pub fn with_settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Replaces the settings after [`FormSettings::validate`] accepts them.
	pub fn try_with_settings(self, settings: FormSettings) -> FormResult<Self> {
		settings.validate()?;
		Ok(self.with_settings(settings))
	}

	/// Loads settings from a TOML document.
	///
	/// ```
	/// use enrollform_forms::{CollectingSink, FormController, MemoryDisplay, StaticAnswer};
	///
	/// let form = FormController::new(MemoryDisplay::new(), StaticAnswer::accept(), CollectingSink::new())
	///     .with_settings_toml(r#"success_message = "Enrolled""#)
	///     .unwrap();
	/// assert_eq!(form.settings().success_message, "Enrolled");
	/// ```
	pub fn with_settings_toml(self, source: &str) -> FormResult<Self> {
		let settings = FormSettings::from_toml_str(source)?;
		Ok(self.with_settings(settings))
	}

	/// Starts from pre-filled values. Nothing is validated until an event
	/// arrives.
	pub fn with_values(mut self, values: FormValues) -> Self {
		self.values = values;
		self
	}

	pub fn values(&self) -> &FormValues {
		&self.values
	}

	/// Changes a value without validating it.
	pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
		self.values.set(field, value);
	}

	pub fn display(&self) -> &D {
		&self.display
	}

	pub fn display_mut(&mut self) -> &mut D {
		&mut self.display
	}

	pub fn gate(&self) -> &C {
		&self.gate
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn registry(&self) -> &'static ValidatorRegistry {
		self.registry
	}

	pub fn into_parts(self) -> (D, C, S) {
		(self.display, self.gate, self.sink)
	}

	/// Handles a value change for the control identified by `field_name`.
	///
	/// Unknown identifiers mean the page and the rule table are out of sync;
	/// the event is dropped and the error is returned to the caller.
	pub fn on_input(
		&mut self,
		field_name: &str,
		raw_value: impl Into<String>,
	) -> FormResult<ValidationOutcome> {
		let field = resolve_field(field_name)?;
		Ok(self.on_field_input(field, raw_value))
	}

	/// Stores the raw value, then validates and displays it.
	pub fn on_field_input(&mut self, field: FieldId, raw_value: impl Into<String>) -> ValidationOutcome {
		self.values.set(field, raw_value);
		self.validate_field(field)
	}

	/// Evaluates the field's current trimmed value and shows the result.
	pub fn validate_field(&mut self, field: FieldId) -> ValidationOutcome {
		let outcome = self.registry.evaluate(field, self.values.trimmed(field));
		tracing::debug!(field = %field, valid = outcome.is_valid(), "field evaluated");
		self.apply_outcome(field, &outcome);
		outcome
	}

	/// Writes an outcome's message to the field's error channel.
	pub fn apply_outcome(&mut self, field: FieldId, outcome: &ValidationOutcome) {
		self.display
			.render(DisplayChannel::FieldError(field), outcome.message());
	}

	/// Handles a submit request.
	pub fn on_submit(&mut self) -> SubmitOutcome {
		for field in FieldId::ALL {
			if let ValidationOutcome::Invalid(failure) = self.validate_field(field) {
				let outcome = SubmitOutcome::Invalid { field, failure };
				tracing::warn!("{}", outcome);
				return outcome;
			}
		}

		if !self.gate.confirm(&self.settings.confirm_prompt) {
			tracing::debug!("submission declined");
			return SubmitOutcome::Declined;
		}

		self.display
			.render(DisplayChannel::SuccessMessage, &self.settings.success_message);
		let payload = SubmissionPayload::from_values(&self.values);
		self.sink.emit(&payload);
		if self.settings.reset_after_submit {
			self.on_reset();
		}
		SubmitOutcome::Submitted(payload)
	}

	/// Clears every value and field error channel. The success line is left
	/// untouched.
	pub fn on_reset(&mut self) {
		self.values.clear();
		for field in FieldId::ALL {
			self.display.clear(DisplayChannel::FieldError(field));
		}
		tracing::debug!("form reset");
	}

	/// Clears the success line; field errors stay as they are.
	pub fn on_keydown(&mut self) {
		self.display.clear(DisplayChannel::SuccessMessage);
	}

	/// Routes an event from the page to its handler.
	pub fn dispatch(&mut self, event: FormEvent) -> FormResult<EventOutcome> {
		match event {
			FormEvent::Input { field, value } => {
				let field = resolve_field(&field)?;
				let outcome = self.on_field_input(field, value);
				Ok(EventOutcome::Validated { field, outcome })
			}
			FormEvent::KeyDown => {
				self.on_keydown();
				Ok(EventOutcome::SuccessCleared)
			}
			FormEvent::Submit => Ok(EventOutcome::Submit(self.on_submit())),
			FormEvent::Reset => {
				self.on_reset();
				Ok(EventOutcome::Reset)
			}
		}
	}
}

fn resolve_field(name: &str) -> FormResult<FieldId> {
	let field = name.parse::<FieldId>().inspect_err(|e| {
		tracing::error!(error = %e, "input event for a field without a validator");
	})?;
	Ok(field)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::confirm::StaticAnswer;
	use crate::display::MemoryDisplay;
	use crate::error::{FormError, SettingsError};
	use crate::settings::DEFAULT_CONFIRM_PROMPT;
	use crate::submission::CollectingSink;
	use rstest::{fixture, rstest};

	type TestForm = FormController<MemoryDisplay, StaticAnswer, CollectingSink>;

	#[fixture]
	fn form() -> TestForm {
		FormController::new(MemoryDisplay::new(), StaticAnswer::accept(), CollectingSink::new())
	}

	#[rstest]
	fn test_input_trims_before_validating(mut form: TestForm) {
		let outcome = form.on_input("telephone", " 1234567890 ").unwrap();

		assert!(outcome.is_valid());
		assert_eq!(form.values().get(FieldId::Telephone), " 1234567890 ");
		assert_eq!(
			form.display().text(DisplayChannel::FieldError(FieldId::Telephone)),
			""
		);
	}

	#[rstest]
	fn test_whitespace_only_input_is_required_failure(mut form: TestForm) {
		let outcome = form.on_input("name", "   ").unwrap();

		assert_eq!(outcome.message(), "Name is required");
		assert_eq!(
			form.display().text(DisplayChannel::FieldError(FieldId::Name)),
			"Name is required"
		);
	}

	#[rstest]
	#[case("\u{FEFF}")]
	#[case(" \u{FEFF}\t")]
	fn test_byte_order_mark_counts_as_blank(mut form: TestForm, #[case] value: &str) {
		let outcome = form.on_input("name", value).unwrap();

		assert_eq!(outcome.message(), "Name is required");
	}

	#[rstest]
	fn test_input_updates_only_its_own_channel(mut form: TestForm) {
		form.on_input("email", "bad").unwrap();

		assert_eq!(form.display().history().len(), 1);
		assert_eq!(
			form.display().history()[0],
			(
				DisplayChannel::FieldError(FieldId::Email),
				"Invalid input".to_string()
			)
		);
	}

	#[rstest]
	fn test_unknown_field_is_reported_and_ignored(mut form: TestForm) {
		let error = form.on_input("nickname", "Ada").unwrap_err();

		assert!(matches!(error, FormError::UnknownField(_)));
		assert!(form.values().is_empty());
		assert!(form.display().history().is_empty());
	}

	#[rstest]
	fn test_dispatch_input(mut form: TestForm) {
		let outcome = form.dispatch(FormEvent::input("course", "")).unwrap();

		assert_eq!(
			outcome,
			EventOutcome::Validated {
				field: FieldId::Course,
				outcome: form.registry().evaluate(FieldId::Course, ""),
			}
		);
	}

	#[rstest]
	fn test_keydown_clears_only_success_line(mut form: TestForm) {
		form.display_mut()
			.render(DisplayChannel::SuccessMessage, "Form Submitted Successfully");
		form.on_input("name", "").unwrap();

		form.on_keydown();

		assert_eq!(form.display().text(DisplayChannel::SuccessMessage), "");
		assert_eq!(
			form.display().text(DisplayChannel::FieldError(FieldId::Name)),
			"Name is required"
		);
	}

	#[rstest]
	fn test_settings_drive_prompt_and_success_text(form: TestForm) {
		let mut form = form
			.try_with_settings(
				FormSettings::default()
					.with_confirm_prompt("Enrol now?")
					.with_success_message("Enrolled"),
			)
			.unwrap()
			.with_values(FormValues::from_pairs(FieldId::ALL.map(|f| {
				let value = match f {
					FieldId::Email => "a@b.co",
					FieldId::Telephone => "1234567890",
					_ => "x",
				};
				(f, value)
			})));

		assert!(form.on_submit().is_submitted());
		assert_eq!(form.gate().prompts(), ["Enrol now?"]);
		assert_eq!(form.display().text(DisplayChannel::SuccessMessage), "Enrolled");
	}

	#[rstest]
	fn test_submit_without_reset_keeps_values(form: TestForm) {
		let values = FormValues::from_pairs(FieldId::ALL.map(|f| {
			let value = match f {
				FieldId::Email => "a@b.co",
				FieldId::Telephone => "1234567890",
				_ => "kept",
			};
			(f, value)
		}));
		let mut form = form
			.with_settings(FormSettings::default().with_reset_after_submit(false))
			.with_values(values.clone());

		assert!(form.on_submit().is_submitted());
		assert_eq!(form.values(), &values);
	}

	#[rstest]
	#[case(FormSettings::default().with_confirm_prompt(" "), "confirm_prompt")]
	#[case(FormSettings::default().with_success_message(""), "success_message")]
	fn test_blank_settings_are_rejected(
		form: TestForm,
		#[case] settings: FormSettings,
		#[case] expected_key: &str,
	) {
		let error = form.try_with_settings(settings).err().unwrap();

		assert!(matches!(
			error,
			FormError::Settings(SettingsError::Invalid { key, .. }) if key == expected_key
		));
	}

	#[rstest]
	fn test_settings_toml_errors_surface_as_form_errors(form: TestForm) {
		let error = form.with_settings_toml("reset_after_submit = 1").err().unwrap();

		assert!(matches!(error, FormError::Settings(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_settings_toml_applies(form: TestForm) {
		let form = form
			.with_settings_toml("reset_after_submit = false")
			.unwrap();

		assert!(!form.settings().reset_after_submit);
		assert_eq!(form.settings().confirm_prompt, DEFAULT_CONFIRM_PROMPT);
	}
}
