//! Authorization header selection.
//!
//! The API accepts two schemes: `Basic` credentials to obtain a token, and `Token` for every
//! other call. A stored session always wins; credentials are only consulted when no token is
//! stored.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, SessionToken},
	error::ConfigError,
};

/// Authorization scheme presented to the API.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthHeader {
	/// `Basic <base64(email:password)>`.
	Basic(String),
	/// `Token <session token>`.
	Token(String),
}
impl AuthHeader {
	/// Picks the header for a request.
	///
	/// Returns the token header when `stored` is present, regardless of `credentials`;
	/// otherwise builds a Basic header from `credentials`.
	pub fn resolve(
		stored: Option<&SessionToken>,
		credentials: Option<&Credentials>,
	) -> Result<Self> {
		if let Some(token) = stored {
			return Ok(Self::token(token));
		}

		credentials.map(Self::basic).ok_or_else(|| ConfigError::MissingCredentials.into())
	}

	/// Builds a Basic header from credentials.
	pub fn basic(credentials: &Credentials) -> Self {
		Self::Basic(credentials.basic_payload())
	}

	/// Builds a Token header from a stored session.
	pub fn token(token: &SessionToken) -> Self {
		Self::Token(token.expose().to_owned())
	}

	/// Scheme word as sent on the wire.
	pub const fn scheme(&self) -> &'static str {
		match self {
			Self::Basic(_) => "Basic",
			Self::Token(_) => "Token",
		}
	}

	/// Renders the full header value. Callers must avoid logging this string.
	pub fn to_header_value(&self) -> String {
		match self {
			Self::Basic(value) | Self::Token(value) => format!("{} {value}", self.scheme()),
		}
	}
}
impl Debug for AuthHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthHeader").field(&self.scheme()).field(&"<redacted>").finish()
	}
}
impl Display for AuthHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} <redacted>", self.scheme())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn missing_token_uses_supplied_credentials() {
		let credentials = Credentials::new("admin@ssms.io", "hunter2");
		let header = AuthHeader::resolve(None, Some(&credentials))
			.expect("Credentials should produce a Basic header.");

		assert_eq!(header, AuthHeader::Basic("YWRtaW5Ac3Ntcy5pbzpodW50ZXIy".into()));
		assert_eq!(header.to_header_value(), "Basic YWRtaW5Ac3Ntcy5pbzpodW50ZXIy");
	}

	#[test]
	fn stored_token_wins_over_credentials() {
		let token = SessionToken::new("jwt-value");
		let credentials = Credentials::new("other@ssms.io", "ignored");

		for supplied in [None, Some(&credentials)] {
			let header = AuthHeader::resolve(Some(&token), supplied)
				.expect("Stored token should always resolve.");

			assert_eq!(header.to_header_value(), "Token jwt-value");
		}
	}

	#[test]
	fn nothing_to_present_is_a_config_error() {
		let err = AuthHeader::resolve(None, None).expect_err("No token and no credentials.");

		assert!(matches!(err, Error::Config(ConfigError::MissingCredentials)));
	}

	#[test]
	fn formatters_redact_values() {
		let header = AuthHeader::Token("jwt-value".into());

		assert_eq!(format!("{header}"), "Token <redacted>");
		assert!(!format!("{header:?}").contains("jwt-value"));
	}
}
