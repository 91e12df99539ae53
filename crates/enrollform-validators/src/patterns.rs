//! Format patterns applied after the required check

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Email pattern.
//
// One `@` with a non-empty local part, a domain containing a `.` and a
// non-empty final segment. Whitespace, including the byte order mark, is
// rejected everywhere.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s\u{FEFF}@]+@[^\s\u{FEFF}@]+\.[^\s\u{FEFF}@]+$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// Telephone pattern: exactly ten ASCII digits.
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9]{10}$").expect("TELEPHONE_REGEX: invalid regex pattern")
});

/// Returns `true` for characters stripped from the ends of an input.
///
/// Unicode whitespace plus U+FEFF, which browsers also treat as blank.
pub fn is_input_whitespace(c: char) -> bool {
	c.is_whitespace() || c == '\u{FEFF}'
}

/// Strips leading and trailing input whitespace from `value`.
///
/// # Examples
///
/// ```
/// use enrollform_validators::trim_input;
///
/// assert_eq!(trim_input("  Ada \n"), "Ada");
/// assert_eq!(trim_input("\u{FEFF}"), "");
/// ```
pub fn trim_input(value: &str) -> &str {
	value.trim_matches(is_input_whitespace)
}

/// A format check a field can carry in addition to being required.
///
/// # Examples
///
/// ```
/// use enrollform_validators::Pattern;
///
/// assert!(Pattern::Email.is_match("a@b.co"));
/// assert!(!Pattern::Email.is_match("a@b"));
/// assert!(Pattern::Telephone.is_match("1234567890"));
/// assert!(!Pattern::Telephone.is_match("12345"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
	/// `local@domain.tld`, no whitespace.
	Email,
	/// Exactly ten decimal digits.
	Telephone,
}

impl Pattern {
	/// Returns `true` if the whole of `value` matches this pattern.
	pub fn is_match(self, value: &str) -> bool {
		self.regex().is_match(value)
	}

	/// The regular expression source backing this pattern.
	pub fn as_str(self) -> &'static str {
		self.regex().as_str()
	}

	fn regex(self) -> &'static Regex {
		match self {
			Pattern::Email => &EMAIL_REGEX,
			Pattern::Telephone => &TELEPHONE_REGEX,
		}
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Pattern::Email => f.write_str("email"),
			Pattern::Telephone => f.write_str("telephone"),
		}
	}
}
