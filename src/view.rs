//! Render-free view state for product management front ends.
//!
//! Each holder owns the ephemeral state a screen needs (form fields, load status, toggles)
//! and drives [`ApiClient`] actions. Failures surface as a [`Notice`], the message a UI
//! shows in place of a blocking alert. Rendering is left to the embedding UI layer.
//!
//! [`ApiClient`]: crate::actions::ApiClient

pub mod dialog;
pub mod login;
pub mod navbar;
pub mod products;

pub use dialog::*;
pub use login::*;
pub use navbar::*;
pub use products::*;

// self
use crate::_prelude::*;

/// User-facing message recorded after a failed interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	/// Message text.
	pub message: String,
}
impl Notice {
	/// Builds a notice from any displayable value.
	pub fn new(message: impl Display) -> Self {
		Self { message: message.to_string() }
	}
}
impl From<Error> for Notice {
	fn from(e: Error) -> Self {
		Self::new(e)
	}
}
impl Display for Notice {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.message)
	}
}
