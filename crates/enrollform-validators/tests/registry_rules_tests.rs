//! Rule table tests
//!
//! Exercises every field of the built-in registry through the public API.

use enrollform_validators::{
	FieldId, ValidationError, ValidationFailure, ValidationOutcome, ValidatorRegistry,
};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> ValidatorRegistry {
	ValidatorRegistry::new()
}

#[rstest]
#[case(FieldId::Name, "Name is required")]
#[case(FieldId::Address, "Address is required")]
#[case(FieldId::Email, "Valid email is required")]
#[case(FieldId::Password, "Password is required")]
#[case(FieldId::Telephone, "Valid 10-digit phone number is required")]
#[case(FieldId::Course, "Please select a course")]
#[case(FieldId::Comments, "Comment is required")]
fn test_empty_input_reports_required_message(
	registry: ValidatorRegistry,
	#[case] field: FieldId,
	#[case] message: &str,
) {
	let outcome = registry.evaluate(field, "");

	assert_eq!(
		outcome,
		ValidationOutcome::Invalid(ValidationFailure::RequiredFieldEmpty {
			message: message.to_string()
		})
	);
	assert_eq!(outcome.message(), message);
}

#[rstest]
#[case(FieldId::Name, "Ada Lovelace")]
#[case(FieldId::Address, "12 St James's Square")]
#[case(FieldId::Password, "x")]
#[case(FieldId::Course, "rust-101")]
#[case(FieldId::Comments, "anything @ all 123")]
fn test_unpatterned_fields_accept_any_non_empty_value(
	registry: ValidatorRegistry,
	#[case] field: FieldId,
	#[case] value: &str,
) {
	let outcome = registry.evaluate(field, value);

	assert!(outcome.is_valid());
	assert_eq!(outcome.message(), "");
}

#[rstest]
#[case("a@b.co", true)]
#[case("a@b", false)]
#[case("ab.co", false)]
#[case("a\u{FEFF}@b.co", false)]
fn test_email_rule(registry: ValidatorRegistry, #[case] value: &str, #[case] valid: bool) {
	let outcome = registry.evaluate(FieldId::Email, value);

	assert_eq!(outcome.is_valid(), valid);
	if !valid {
		assert_eq!(outcome.message(), "Invalid input");
	}
}

#[rstest]
#[case("1234567890", true)]
#[case("12345", false)]
#[case("12345678901", false)]
#[case("123abc7890", false)]
fn test_telephone_rule(registry: ValidatorRegistry, #[case] value: &str, #[case] valid: bool) {
	let outcome = registry.evaluate(FieldId::Telephone, value);

	assert_eq!(outcome.is_valid(), valid);
	if !valid {
		assert_eq!(
			outcome.failure(),
			Some(&ValidationFailure::FormatMismatch)
		);
	}
}

#[rstest]
#[case(FieldId::Email, "bad")]
#[case(FieldId::Email, "a@b.co")]
#[case(FieldId::Telephone, "")]
#[case(FieldId::Name, "Grace")]
fn test_evaluation_is_idempotent(
	registry: ValidatorRegistry,
	#[case] field: FieldId,
	#[case] value: &str,
) {
	let first = registry.evaluate(field, value);
	let second = registry.evaluate(field, value);

	assert_eq!(first, second);
}

#[rstest]
fn test_lookup_by_page_identifier(registry: ValidatorRegistry) {
	let validator = registry.lookup("telephone").unwrap();

	assert_eq!(validator.field(), FieldId::Telephone);
	assert!(validator.evaluate("0123456789").is_valid());
}

#[rstest]
fn test_lookup_of_unobserved_identifier_is_an_error(registry: ValidatorRegistry) {
	let result = registry.lookup("successMessage");

	assert!(matches!(
		result,
		Err(ValidationError::UnknownField { ref name }) if name == "successMessage"
	));
}

#[rstest]
fn test_global_registry_matches_fresh_registry(registry: ValidatorRegistry) {
	let global = ValidatorRegistry::global();

	for field in FieldId::ALL {
		assert_eq!(global.get(field), registry.get(field));
	}
}
