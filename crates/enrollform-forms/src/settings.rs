//! Form controller settings
//!
//! Settings cover the texts the controller shows and whether the form is
//! cleared after a confirmed submission. The validation rules themselves are
//! fixed and cannot be configured.
//!
//! ```
//! use enrollform_forms::FormSettings;
//!
//! let settings = FormSettings::from_toml_str(r#"
//!     success_message = "Enrolment received"
//! "#).unwrap();
//! assert_eq!(settings.success_message, "Enrolment received");
//! assert_eq!(settings.confirm_prompt, "Are you sure, you want to submit the form ?");
//! ```

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIRM_PROMPT: &str = "Are you sure, you want to submit the form ?";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Form Submitted Successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormSettings {
	/// Text passed to the confirmation gate.
	pub confirm_prompt: String,
	/// Text shown on the success line after a confirmed submission.
	pub success_message: String,
	/// Clear values and error channels after a confirmed submission.
	pub reset_after_submit: bool,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			confirm_prompt: DEFAULT_CONFIRM_PROMPT.to_string(),
			success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
			reset_after_submit: true,
		}
	}
}

impl FormSettings {
	/// Parses settings from TOML. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Rejects settings that would leave the user without feedback.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.confirm_prompt.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "confirm_prompt",
				reason: "must not be empty".to_string(),
			});
		}
		if self.success_message.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "success_message",
				reason: "must not be empty".to_string(),
			});
		}
		Ok(())
	}

	pub fn with_confirm_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.confirm_prompt = prompt.into();
		self
	}

	pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
		self.success_message = message.into();
		self
	}

	pub fn with_reset_after_submit(mut self, reset: bool) -> Self {
		self.reset_after_submit = reset;
		self
	}
}
