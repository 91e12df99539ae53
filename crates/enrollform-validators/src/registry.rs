//! Fixed field → validator table
//!
//! The registry holds exactly one [`Validator`] per [`FieldId`]. Because the
//! table is indexed by the enum and filled from [`FieldId::descriptor`],
//! lookups by `FieldId` cannot miss. Identifiers coming from the page are
//! resolved with [`ValidatorRegistry::lookup`], which reports unknown names
//! as [`ValidationError::UnknownField`].

use crate::error::ValidationResult;
use crate::field::FieldId;
use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use std::sync::OnceLock;

static GLOBAL_REGISTRY: OnceLock<ValidatorRegistry> = OnceLock::new();

/// Read-only mapping from every known field to its validator.
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
	validators: [Validator; FieldId::COUNT],
}

impl ValidatorRegistry {
	/// Builds the registry from the built-in field descriptors.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_validators::{FieldId, ValidatorRegistry};
	///
	/// let registry = ValidatorRegistry::new();
	/// assert_eq!(registry.len(), 7);
	/// assert!(registry.evaluate(FieldId::Email, "a@b.co").is_valid());
	/// ```
	pub fn new() -> Self {
		let validators = FieldId::ALL.map(|field| Validator::from_descriptor(field.descriptor()));
		tracing::debug!(fields = validators.len(), "validator registry built");
		Self { validators }
	}

	/// The process-wide registry, built on first use.
	pub fn global() -> &'static ValidatorRegistry {
		GLOBAL_REGISTRY.get_or_init(Self::new)
	}

	/// Validator for a known field.
	pub fn get(&self, field: FieldId) -> &Validator {
		&self.validators[field.index()]
	}

	/// Validator for a field identifier observed at runtime.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_validators::{FieldId, ValidatorRegistry};
	///
	/// let registry = ValidatorRegistry::new();
	/// assert_eq!(registry.lookup("course").unwrap().field(), FieldId::Course);
	/// assert!(registry.lookup("nickname").is_err());
	/// ```
	pub fn lookup(&self, name: &str) -> ValidationResult<&Validator> {
		let field: FieldId = name.parse()?;
		Ok(self.get(field))
	}

	/// Evaluates `input` with the validator registered for `field`.
	pub fn evaluate(&self, field: FieldId, input: &str) -> ValidationOutcome {
		self.get(field).evaluate(input)
	}

	/// Validators in form order.
	pub fn iter(&self) -> impl Iterator<Item = &Validator> {
		self.validators.iter()
	}

	pub fn len(&self) -> usize {
		self.validators.len()
	}

	pub fn is_empty(&self) -> bool {
		self.validators.is_empty()
	}
}

impl Default for ValidatorRegistry {
	fn default() -> Self {
		Self::new()
	}
}
