//! Known form fields and their static descriptors

use crate::error::ValidationError;
use crate::patterns::Pattern;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Identifier of a field on the enrolment form.
///
/// Variants are declared in the order the controls appear on the form, which
/// is also the order submit-time validation walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
	Name,
	Address,
	Email,
	Password,
	Telephone,
	Course,
	Comments,
}

impl FieldId {
	/// Number of known fields.
	pub const COUNT: usize = 7;

	/// Every field, in form order.
	pub const ALL: [FieldId; Self::COUNT] = [
		FieldId::Name,
		FieldId::Address,
		FieldId::Email,
		FieldId::Password,
		FieldId::Telephone,
		FieldId::Course,
		FieldId::Comments,
	];

	/// The identifier the page uses for this field.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_validators::FieldId;
	///
	/// assert_eq!(FieldId::Telephone.as_str(), "telephone");
	/// ```
	pub const fn as_str(self) -> &'static str {
		match self {
			FieldId::Name => "name",
			FieldId::Address => "address",
			FieldId::Email => "email",
			FieldId::Password => "password",
			FieldId::Telephone => "telephone",
			FieldId::Course => "course",
			FieldId::Comments => "comments",
		}
	}

	/// Identifier of the inline error element for this field (`"<field>Error"`).
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_validators::FieldId;
	///
	/// assert_eq!(FieldId::Email.error_channel(), "emailError");
	/// ```
	pub fn error_channel(self) -> String {
		format!("{}Error", self.as_str())
	}

	/// Position of this field in [`FieldId::ALL`].
	pub const fn index(self) -> usize {
		self as usize
	}

	/// The built-in rule for this field.
	///
	/// The match is exhaustive, so adding a field without a rule does not
	/// compile.
	pub fn descriptor(self) -> FieldDescriptor {
		match self {
			FieldId::Name => FieldDescriptor::new(self, "Name is required"),
			FieldId::Address => FieldDescriptor::new(self, "Address is required"),
			FieldId::Email => {
				FieldDescriptor::new(self, "Valid email is required").with_pattern(Pattern::Email)
			}
			FieldId::Password => FieldDescriptor::new(self, "Password is required"),
			FieldId::Telephone => {
				FieldDescriptor::new(self, "Valid 10-digit phone number is required")
					.with_pattern(Pattern::Telephone)
			}
			FieldId::Course => FieldDescriptor::new(self, "Please select a course"),
			FieldId::Comments => FieldDescriptor::new(self, "Comment is required"),
		}
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldId {
	type Err = ValidationError;

	/// Resolves a page-level identifier. Matching is exact and case-sensitive.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldId::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| ValidationError::unknown_field(s))
	}
}

/// Static description of how one field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	field: FieldId,
	required_message: Cow<'static, str>,
	pattern: Option<Pattern>,
}

impl FieldDescriptor {
	/// Creates a descriptor that only requires a non-empty value.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_validators::{FieldDescriptor, FieldId, Pattern};
	///
	/// let descriptor = FieldDescriptor::new(FieldId::Email, "Email please")
	///     .with_pattern(Pattern::Email);
	/// assert_eq!(descriptor.required_message(), "Email please");
	/// assert_eq!(descriptor.pattern(), Some(Pattern::Email));
	/// ```
	pub fn new(field: FieldId, required_message: impl Into<Cow<'static, str>>) -> Self {
		Self {
			field,
			required_message: required_message.into(),
			pattern: None,
		}
	}

	/// Adds a format pattern checked after the required rule.
	pub fn with_pattern(mut self, pattern: Pattern) -> Self {
		self.pattern = Some(pattern);
		self
	}

	pub fn field(&self) -> FieldId {
		self.field
	}

	pub fn required_message(&self) -> &str {
		&self.required_message
	}

	pub fn pattern(&self) -> Option<Pattern> {
		self.pattern
	}
}
