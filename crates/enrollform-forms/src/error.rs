//! Error types for the form controller

use enrollform_validators::ValidationError;

/// Errors raised while loading [`FormSettings`](crate::FormSettings).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to parse form settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("Invalid form setting '{key}': {reason}")]
	Invalid { key: &'static str, reason: String },
}

/// Errors surfaced by [`FormController`](crate::FormController).
///
/// User input problems are not errors; they come back as outcomes. These
/// variants indicate the page and the rule table disagree about which fields
/// exist, or that configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error(transparent)]
	UnknownField(#[from] ValidationError),
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

pub type FormResult<T> = Result<T, FormError>;
