//! Form controller for enrollform
//!
//! This crate wires the validation engine from `enrollform-validators` to a
//! page:
//! - [`FormController`]: reacts to input, submit, reset and keydown events
//! - [`MessageDisplay`]: per-field error channels and the success line
//! - [`ConfirmationGate`]: the yes/no prompt before a valid submission
//! - [`SubmissionSink`]: receives the [`SubmissionPayload`] of a confirmed form
//! - [`FormSettings`]: prompt and message texts, loadable from TOML
//!
//! The host owns event wiring. It turns page interactions into
//! [`FormEvent`]s and passes them to [`FormController::dispatch`] one at a
//! time.

pub mod confirm;
pub mod controller;
pub mod display;
pub mod error;
pub mod events;
pub mod settings;
pub mod submission;
pub mod values;

pub use confirm::{ConfirmationGate, StaticAnswer};
pub use controller::FormController;
pub use display::{DisplayChannel, MemoryDisplay, MessageDisplay, SUCCESS_CHANNEL};
pub use error::{FormError, FormResult, SettingsError};
pub use events::{EventOutcome, FormEvent, SubmitOutcome};
pub use settings::{DEFAULT_CONFIRM_PROMPT, DEFAULT_SUCCESS_MESSAGE, FormSettings};
pub use submission::{CollectingSink, SubmissionPayload, SubmissionSink, TracingSink};
pub use values::FormValues;
