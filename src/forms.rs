//! Form controller module.
//!
//! This module provides the controller that applies validation outcomes to
//! the page, gates submission behind a confirmation and emits the payload.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use enrollform::forms::{FormController, MemoryDisplay, StaticAnswer, TracingSink};
//!
//! let mut form = FormController::new(MemoryDisplay::new(), StaticAnswer::decline(), TracingSink);
//! assert!(form.on_input("course", "").unwrap().is_invalid());
//! # }
//! ```

#[cfg(feature = "forms")]
pub use enrollform_forms::*;
