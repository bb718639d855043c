//! Client-level error types shared across actions, transports, and stores.

// self
use crate::{_prelude::*, api::FieldError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Temporary upstream failure; the caller may try again later.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// A protected action was attempted without a stored session token.
	#[error("No session token is stored; log in first.")]
	NotAuthenticated,
	/// The API rejected the presented token or authorization scheme (HTTP 401).
	#[error("API rejected the session: {reason}.")]
	Unauthorized {
		/// Server-supplied reason string.
		reason: String,
	},
	/// The API refused the action for the authenticated user (HTTP 403).
	#[error("API refused access: {reason}.")]
	Forbidden {
		/// Server-supplied reason string.
		reason: String,
	},
	/// The addressed user or resource does not exist (HTTP 404).
	#[error("Resource `{resource}` was not found.")]
	NotFound {
		/// Request path that produced the 404.
		resource: String,
	},
	/// The API rejected the payload with field-level errors (HTTP 400).
	#[error("API rejected the request: {}.", summarize(.errors))]
	Rejected {
		/// Field errors taken from the error envelope.
		errors: Vec<FieldError>,
	},
}

/// Configuration and request-building failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error("HTTP request could not be constructed.")]
	HttpRequest {
		/// Underlying request builder failure.
		#[source]
		source: BoxError,
	},
	/// Client configuration failed validation.
	#[error(transparent)]
	InvalidConfig(#[from] crate::config::ClientConfigError),
	/// Endpoint path could not be joined onto the base URL.
	#[error("Endpoint `{path}` cannot be joined onto the base URL.")]
	InvalidEndpoint {
		/// Relative endpoint path.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Basic credentials were required but none were supplied.
	#[error("Credentials are required when no session token is stored.")]
	MissingCredentials,
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	RequestBody(#[from] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a transport's request-building failure inside [`ConfigError`].
	pub fn http_request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpRequest { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Temporary failure variants.
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// API returned a status the client does not classify.
	#[error("API returned an unexpected response: {message}.")]
	UnexpectedStatus {
		/// Short summary of the response body.
		message: String,
		/// HTTP status code.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// API responded with JSON that does not match the expected envelope.
	#[error("API returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code.
		status: u16,
	},
	/// Request did not complete before the transport's deadline.
	#[error("Request for `{action}` timed out.")]
	Timeout {
		/// Action whose request timed out.
		action: crate::obs::ActionKind,
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

fn summarize(errors: &[FieldError]) -> String {
	if errors.is_empty() {
		return "no details".into();
	}

	errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
