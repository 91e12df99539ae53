//! Submission payload and the sinks that receive it

use crate::values::FormValues;
use enrollform_validators::FieldId;
use serde::{Deserialize, Serialize};

/// Field contents captured at the moment a valid form is confirmed.
///
/// Values are copied verbatim, without trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
	pub name: String,
	pub address: String,
	pub email: String,
	pub password: String,
	pub telephone: String,
	pub course: String,
	pub comments: String,
}

impl SubmissionPayload {
	/// Captures the current form values.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_forms::{FormValues, SubmissionPayload};
	/// use enrollform_validators::FieldId;
	///
	/// let values = FormValues::from_pairs([(FieldId::Name, " Ada ")]);
	/// let payload = SubmissionPayload::from_values(&values);
	/// assert_eq!(payload.name, " Ada ");
	/// assert_eq!(payload.email, "");
	/// ```
	pub fn from_values(values: &FormValues) -> Self {
		let take = |field: FieldId| values.get(field).to_string();
		Self {
			name: take(FieldId::Name),
			address: take(FieldId::Address),
			email: take(FieldId::Email),
			password: take(FieldId::Password),
			telephone: take(FieldId::Telephone),
			course: take(FieldId::Course),
			comments: take(FieldId::Comments),
		}
	}

	pub fn get(&self, field: FieldId) -> &str {
		match field {
			FieldId::Name => &self.name,
			FieldId::Address => &self.address,
			FieldId::Email => &self.email,
			FieldId::Password => &self.password,
			FieldId::Telephone => &self.telephone,
			FieldId::Course => &self.course,
			FieldId::Comments => &self.comments,
		}
	}

	/// JSON object with the password masked, for diagnostics.
	pub fn redacted_json(&self) -> serde_json::Value {
		let mut redacted = self.clone();
		if !redacted.password.is_empty() {
			redacted.password = "********".to_string();
		}
		serde_json::to_value(redacted).unwrap_or(serde_json::Value::Null)
	}
}

/// Consumer of confirmed submissions.
pub trait SubmissionSink {
	fn emit(&mut self, payload: &SubmissionPayload);
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for &mut S {
	fn emit(&mut self, payload: &SubmissionPayload) {
		(**self).emit(payload);
	}
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
	fn emit(&mut self, payload: &SubmissionPayload) {
		(**self).emit(payload);
	}
}

/// Writes each submission to the `tracing` log at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
	fn emit(&mut self, payload: &SubmissionPayload) {
		tracing::info!(data = %payload.redacted_json(), "Submitted Data");
	}
}

/// Keeps every submission in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
	payloads: Vec<SubmissionPayload>,
}

impl CollectingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn payloads(&self) -> &[SubmissionPayload] {
		&self.payloads
	}

	pub fn last(&self) -> Option<&SubmissionPayload> {
		self.payloads.last()
	}
}

impl SubmissionSink for CollectingSink {
	fn emit(&mut self, payload: &SubmissionPayload) {
		self.payloads.push(payload.clone());
	}
}
