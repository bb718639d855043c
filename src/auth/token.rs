//! Session token issued by the API after a successful login.

// self
use crate::{_prelude::*, auth::Secret};

/// Opaque session token plus the instant the client received it.
///
/// The API signs tokens with a server-side expiry, but the client treats them as opaque:
/// there is no local expiry check, and a token stays in use until it is replaced or the
/// session is cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
	/// Token value; callers must avoid logging it.
	pub token: Secret,
	/// Instant the token was stored locally.
	#[serde(with = "time::serde::rfc3339")]
	pub issued_at: OffsetDateTime,
}
impl SessionToken {
	/// Wraps a freshly issued token, stamping it with the current UTC instant.
	pub fn new(token: impl Into<String>) -> Self {
		Self::issued_at(token, OffsetDateTime::now_utc())
	}

	/// Wraps a token with an explicit issue instant.
	pub fn issued_at(token: impl Into<String>, issued_at: OffsetDateTime) -> Self {
		Self { token: Secret::new(token), issued_at }
	}

	/// Returns the raw token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.token.expose()
	}

	/// Time elapsed between issuance and `instant`.
	pub fn age_at(&self, instant: OffsetDateTime) -> Duration {
		instant - self.issued_at
	}
}
