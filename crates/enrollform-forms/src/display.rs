//! Message display channels
//!
//! The page exposes one inline error element per field (`"<field>Error"`) and
//! a single `successMessage` line. The controller writes to them through
//! [`MessageDisplay`]; rendering an empty string clears the element.

use enrollform_validators::FieldId;
use std::collections::HashMap;
use std::fmt;

/// Identifier of the global status line.
pub const SUCCESS_CHANNEL: &str = "successMessage";

/// A place on the page that shows text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayChannel {
	/// Inline error element of one field.
	FieldError(FieldId),
	/// Global status line shown after a confirmed submission.
	SuccessMessage,
}

impl DisplayChannel {
	/// Element identifier on the page.
	///
	/// # Examples
	///
	/// ```
	/// use enrollform_forms::DisplayChannel;
	/// use enrollform_validators::FieldId;
	///
	/// assert_eq!(DisplayChannel::FieldError(FieldId::Name).id(), "nameError");
	/// assert_eq!(DisplayChannel::SuccessMessage.id(), "successMessage");
	/// ```
	pub fn id(self) -> String {
		match self {
			DisplayChannel::FieldError(field) => field.error_channel(),
			DisplayChannel::SuccessMessage => SUCCESS_CHANNEL.to_string(),
		}
	}

	/// Every channel the form owns: one per field in form order, then the
	/// success line.
	pub fn all() -> impl Iterator<Item = DisplayChannel> {
		FieldId::ALL
			.into_iter()
			.map(DisplayChannel::FieldError)
			.chain(std::iter::once(DisplayChannel::SuccessMessage))
	}
}

impl fmt::Display for DisplayChannel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.id())
	}
}

/// Capability to render text into a display channel.
pub trait MessageDisplay {
	/// Replaces the channel's text. An empty `text` clears it.
	fn render(&mut self, channel: DisplayChannel, text: &str);

	/// Clears the channel.
	fn clear(&mut self, channel: DisplayChannel) {
		self.render(channel, "");
	}
}

impl<D: MessageDisplay + ?Sized> MessageDisplay for &mut D {
	fn render(&mut self, channel: DisplayChannel, text: &str) {
		(**self).render(channel, text);
	}
}

impl<D: MessageDisplay + ?Sized> MessageDisplay for Box<D> {
	fn render(&mut self, channel: DisplayChannel, text: &str) {
		(**self).render(channel, text);
	}
}

/// In-process display that remembers the current text of each channel and
/// every render call in order.
///
/// # Examples
///
/// ```
/// use enrollform_forms::{DisplayChannel, MemoryDisplay, MessageDisplay};
///
/// let mut display = MemoryDisplay::new();
/// display.render(DisplayChannel::SuccessMessage, "Done");
/// assert_eq!(display.text(DisplayChannel::SuccessMessage), "Done");
///
/// display.clear(DisplayChannel::SuccessMessage);
/// assert_eq!(display.text(DisplayChannel::SuccessMessage), "");
/// assert_eq!(display.history().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
	current: HashMap<DisplayChannel, String>,
	history: Vec<(DisplayChannel, String)>,
}

impl MemoryDisplay {
	pub fn new() -> Self {
		Self::default()
	}

	/// Current text of `channel`; empty if never rendered or cleared.
	pub fn text(&self, channel: DisplayChannel) -> &str {
		self.current.get(&channel).map(String::as_str).unwrap_or("")
	}

	/// Current text looked up by page element identifier.
	pub fn text_by_id(&self, id: &str) -> Option<&str> {
		DisplayChannel::all()
			.find(|channel| channel.id() == id)
			.map(|channel| self.text(channel))
	}

	/// Every render call since creation or the last [`Self::clear_history`].
	pub fn history(&self) -> &[(DisplayChannel, String)] {
		&self.history
	}

	pub fn clear_history(&mut self) {
		self.history.clear();
	}

	/// `true` when no channel currently shows any text.
	pub fn is_blank(&self) -> bool {
		self.current.values().all(String::is_empty)
	}
}

impl MessageDisplay for MemoryDisplay {
	fn render(&mut self, channel: DisplayChannel, text: &str) {
		self.current.insert(channel, text.to_string());
		self.history.push((channel, text.to_string()));
	}
}
