//! Confirmation gate asked once per valid submission

/// Synchronous yes/no prompt shown before a valid form is submitted.
///
/// Closures taking the prompt text implement this trait:
///
/// ```
/// use enrollform_forms::ConfirmationGate;
///
/// let mut asked = Vec::new();
/// let mut gate = |prompt: &str| {
///     asked.push(prompt.to_string());
///     true
/// };
/// assert!(gate.confirm("Submit?"));
/// drop(gate);
/// assert_eq!(asked, vec!["Submit?"]);
/// ```
pub trait ConfirmationGate {
	/// Returns `true` when the user agrees to submit.
	fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
	F: FnMut(&str) -> bool,
{
	fn confirm(&mut self, prompt: &str) -> bool {
		self(prompt)
	}
}

/// Gate that always gives the same answer and counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct StaticAnswer {
	answer: bool,
	prompts: Vec<String>,
}

impl StaticAnswer {
	pub fn new(answer: bool) -> Self {
		Self {
			answer,
			prompts: Vec::new(),
		}
	}

	pub fn accept() -> Self {
		Self::new(true)
	}

	pub fn decline() -> Self {
		Self::new(false)
	}

	/// Prompts received so far, oldest first.
	pub fn prompts(&self) -> &[String] {
		&self.prompts
	}

	pub fn times_asked(&self) -> usize {
		self.prompts.len()
	}
}

impl ConfirmationGate for StaticAnswer {
	fn confirm(&mut self, prompt: &str) -> bool {
		self.prompts.push(prompt.to_string());
		self.answer
	}
}
