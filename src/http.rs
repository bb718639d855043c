//! Transport primitives for SSMS API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the transport-agnostic [`ApiRequest`] and
//! [`ApiResponse`] so downstream crates can plug in custom HTTP stacks (a wasm `fetch`
//! binding, a recording fake in tests) without touching the action layer. Transport failures
//! are converted into client errors by a [`TransportErrorMapper`].

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, RETRY_AFTER};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, obs::ActionKind};
#[cfg(feature = "reqwest")] use crate::error::{ConfigError, TransientError, TransportError};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a + Send>>;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl HttpMethod {
	/// Returns the upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Delete => "DELETE",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outbound request handed to an [`ApiHttpClient`].
#[derive(Clone)]
pub struct ApiRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Absolute endpoint URL.
	pub url: Url,
	/// Rendered `Authorization` header value, if any.
	pub authorization: Option<String>,
	/// Serialized JSON body, if any.
	pub json_body: Option<Vec<u8>>,
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("authorization_set", &self.authorization.is_some())
			.field("body_len", &self.json_body.as_ref().map(Vec::len))
			.finish()
	}
}

/// Raw response captured by an [`ApiHttpClient`].
///
/// Additional fields may be added in future releases, so downstream code should construct
/// values using field names instead of struct update syntax.
#[derive(Clone, Debug, Default)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports capable of executing API calls.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared by
/// every clone of the client, and the futures they return must be `Send` so actions can hop
/// executors.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and captures the status, retry hint, and body.
	///
	/// Non-2xx statuses are NOT errors at this layer; only failures to obtain a response are.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, ApiResponse, Self::TransportError>;
}

/// Maps HTTP transport failures into client [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts a transport error raised while running `action` into a client error.
	fn map_transport_error(&self, action: ActionKind, error: E) -> Error;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, ApiResponse, ReqwestError> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => reqwest::Method::GET,
				HttpMethod::Post => reqwest::Method::POST,
				HttpMethod::Put => reqwest::Method::PUT,
				HttpMethod::Delete => reqwest::Method::DELETE,
			};
			let mut builder = client.request(method, request.url).header(ACCEPT, "application/json");

			if let Some(value) = request.authorization {
				builder = builder.header(AUTHORIZATION, value);
			}
			if let Some(body) = request.json_body {
				builder = builder.header(CONTENT_TYPE, "application/json").body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let retry_after = parse_retry_after(response.headers());
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, retry_after, body })
		})
	}
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, action: ActionKind, err: ReqwestError) -> Error {
		#[cfg(feature = "tracing")]
		tracing::debug!(action = action.as_str(), error = %err, "transport failure");

		if err.is_builder() {
			return ConfigError::http_request(err).into();
		}
		if err.is_timeout() {
			return TransientError::Timeout { action, source: Box::new(err) }.into();
		}

		TransportError::from(err).into()
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(i64::from(secs)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_debug_hides_authorization() {
		let request = ApiRequest {
			method: HttpMethod::Post,
			url: Url::parse("http://localhost:8000/v1/users/auth/")
				.expect("Fixture URL should parse."),
			authorization: Some("Basic c2VjcmV0".into()),
			json_body: None,
		};
		let rendered = format!("{request:?}");

		assert!(rendered.contains("authorization_set: true"));
		assert!(!rendered.contains("c2VjcmV0"));
	}

	#[test]
	fn success_range_is_2xx() {
		let ok = ApiResponse { status: 204, ..ApiResponse::default() };
		let redirect = ApiResponse { status: 302, ..ApiResponse::default() };

		assert!(ok.is_success());
		assert!(!redirect.is_success());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn retry_after_accepts_delta_seconds() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, "120".parse().expect("Header value should parse."));

		assert_eq!(parse_retry_after(&headers), Some(Duration::seconds(120)));

		headers.insert(RETRY_AFTER, "soon".parse().expect("Header value should parse."));

		assert_eq!(parse_retry_after(&headers), None);
	}
}
