//! Transient login credentials exchanged for a session token.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Secret};

/// Email + password pair held only until it is exchanged for a [`SessionToken`].
///
/// Credentials are never persisted; only the resulting token reaches a token store. The
/// email format is not validated client-side; the API decides.
///
/// [`SessionToken`]: crate::auth::SessionToken
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	/// Login email.
	pub email: String,
	/// Login password; redacted in debug output.
	pub password: Secret,
}
impl Credentials {
	/// Builds credentials from raw form values.
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self { email: email.into(), password: Secret::new(password) }
	}

	/// Returns the base64 `email:password` payload used by the Basic scheme.
	pub fn basic_payload(&self) -> String {
		STANDARD.encode(format!("{}:{}", self.email, self.password.expose()))
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("email", &self.email)
			.field("password", &self.password)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn basic_payload_encodes_email_and_password() {
		let credentials = Credentials::new("admin@ssms.io", "hunter2");

		assert_eq!(credentials.basic_payload(), "YWRtaW5Ac3Ntcy5pbzpodW50ZXIy");
	}

	#[test]
	fn debug_output_hides_password() {
		let rendered = format!("{:?}", Credentials::new("admin@ssms.io", "hunter2"));

		assert!(rendered.contains("admin@ssms.io"));
		assert!(!rendered.contains("hunter2"));
	}
}
