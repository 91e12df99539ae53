//! Current contents of the form's controls

use enrollform_validators::{FieldId, trim_input};

/// Raw values of every field, exactly as the user typed them.
///
/// Values are stored untrimmed; trimming happens only when a value is handed
/// to a validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
	values: [String; FieldId::COUNT],
}

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds values from `(field, value)` pairs; missing fields are empty.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_forms::FormValues;
	/// use enrollform_validators::{FieldId, trim_input};
	///
	/// let values = FormValues::from_pairs([(FieldId::Name, "Ada")]);
	/// assert_eq!(values.get(FieldId::Name), "Ada");
	/// assert_eq!(values.get(FieldId::Email), "");
	/// ```
	pub fn from_pairs<I, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (FieldId, V)>,
		V: Into<String>,
	{
		let mut values = Self::new();
		for (field, value) in pairs {
			values.set(field, value);
		}
		values
	}

	pub fn get(&self, field: FieldId) -> &str {
		&self.values[field.index()]
	}

	/// Value with surrounding whitespace removed, as validators see it.
	pub fn trimmed(&self, field: FieldId) -> &str {
		trim_input(self.get(field))
	}

	pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
		self.values[field.index()] = value.into();
	}

	/// Empties every field.
	pub fn clear(&mut self) {
		for value in &mut self.values {
			value.clear();
		}
	}

	/// `(field, value)` pairs in form order.
	pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
		FieldId::ALL
			.into_iter()
			.map(move |field| (field, self.get(field)))
	}

	pub fn is_empty(&self) -> bool {
		self.values.iter().all(String::is_empty)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_set_keeps_raw_value() {
		let mut values = FormValues::new();
		values.set(FieldId::Telephone, " 1234567890 ");

		assert_eq!(values.get(FieldId::Telephone), " 1234567890 ");
		assert_eq!(values.trimmed(FieldId::Telephone), "1234567890");
	}

	#[rstest]
	fn test_byte_order_mark_only_value_trims_to_empty() {
		let values = FormValues::from_pairs([(FieldId::Name, "\u{FEFF}")]);

		assert_eq!(values.get(FieldId::Name), "\u{FEFF}");
		assert_eq!(values.trimmed(FieldId::Name), "");
	}

	#[rstest]
	fn test_clear() {
		let mut values = FormValues::from_pairs([(FieldId::Name, "Ada"), (FieldId::Course, "math")]);
		assert!(!values.is_empty());

		values.clear();

		assert!(values.is_empty());
		assert_eq!(values, FormValues::new());
	}

	#[rstest]
	fn test_iter_in_form_order() {
		let values = FormValues::from_pairs([(FieldId::Comments, "last"), (FieldId::Name, "first")]);
		let collected: Vec<(FieldId, &str)> = values.iter().collect();

		assert_eq!(collected.first(), Some(&(FieldId::Name, "first")));
		assert_eq!(collected.last(), Some(&(FieldId::Comments, "last")));
		assert_eq!(collected.len(), FieldId::COUNT);
	}
}
