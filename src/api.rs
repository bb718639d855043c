//! Wire envelopes used by the SSMS API and the response classifier that turns raw HTTP
//! responses into typed results.
//!
//! Successful responses wrap their payload as `{ "data": ... }`. Validation failures use
//! `{ "error": true, "errors": [{ "code", "message", "field" }] }`, while authentication and
//! lookup failures carry the framework's `{ "title", "description" }` body (or no body at
//! all). [`decode_response`] folds all of these into [`Result`].

// self
use crate::{_prelude::*, error::TransientError, http::ApiResponse};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Success envelope wrapping every payload returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
	/// Wrapped payload.
	pub data: T,
}

/// Error envelope returned alongside HTTP 400 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
	/// Always `true` for error envelopes.
	#[serde(default)]
	pub error: bool,
	/// Individual field failures.
	#[serde(default)]
	pub errors: Vec<FieldError>,
}

/// Single field-level error reported by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	/// Machine-readable error code (for example `missing-field`).
	pub code: String,
	/// Human-readable message.
	pub message: String,
	/// Offending field, when the error targets one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub field: Option<String>,
}
impl Display for FieldError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match &self.field {
			Some(field) => write!(f, "{field}: {}", self.message),
			None => f.write_str(&self.message),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct ErrorTitle {
	#[serde(default)]
	title: Option<String>,
	#[serde(default)]
	description: Option<String>,
}
impl ErrorTitle {
	fn reason(self, status: u16) -> String {
		match (self.title, self.description) {
			(Some(title), Some(description)) => format!("{title} ({description})"),
			(Some(title), None) => title,
			(None, Some(description)) => description,
			(None, None) => format!("HTTP {status}"),
		}
	}
}

/// Classifies `response` and decodes the `data` payload of successful responses.
///
/// `resource` names the request path so 404 errors can point at what was missing.
pub fn decode_response<T>(resource: &str, response: ApiResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status;

	if response.is_success() {
		return parse_envelope::<T>(&response.body, status).map(|envelope| envelope.data);
	}

	Err(classify_failure(resource, response))
}

fn parse_envelope<T>(body: &[u8], status: u16) -> Result<Envelope<T>>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| TransientError::ResponseParse { source, status }.into())
}

fn classify_failure(resource: &str, response: ApiResponse) -> Error {
	let status = response.status;

	match status {
		400 => match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
			Ok(envelope) if envelope.error || !envelope.errors.is_empty() =>
				Error::Rejected { errors: envelope.errors },
			_ => unexpected(response),
		},
		401 => Error::Unauthorized { reason: error_title(&response.body).reason(status) },
		403 => Error::Forbidden { reason: error_title(&response.body).reason(status) },
		404 => Error::NotFound { resource: resource.to_owned() },
		_ => unexpected(response),
	}
}

fn error_title(body: &[u8]) -> ErrorTitle {
	serde_json::from_slice(body).unwrap_or_default()
}

fn unexpected(response: ApiResponse) -> Error {
	TransientError::UnexpectedStatus {
		message: body_preview(&response.body, response.status),
		status: response.status,
		retry_after: response.retry_after,
	}
	.into()
}

fn body_preview(body: &[u8], status: u16) -> String {
	let text = String::from_utf8_lossy(body);
	let trimmed = text.trim();

	if trimmed.is_empty() {
		return format!("HTTP {status} with an empty body");
	}

	let preview: String = trimmed.chars().take(BODY_PREVIEW_LIMIT).collect();

	format!("HTTP {status}: {preview}")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16, body: &str) -> ApiResponse {
		ApiResponse { status, retry_after: None, body: body.as_bytes().to_vec() }
	}

	#[test]
	fn success_unwraps_data() {
		let token: String = decode_response("users/auth/", response(200, r#"{"data":"jwt"}"#))
			.expect("Token envelope should decode.");

		assert_eq!(token, "jwt");
	}

	#[test]
	fn malformed_success_reports_path() {
		let err = decode_response::<Vec<u32>>("products/", response(200, r#"{"data":[1,"x"]}"#))
			.expect_err("Mixed array should fail to decode.");

		match err {
			Error::Transient(TransientError::ResponseParse { source, status }) => {
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "data[1]");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn bad_request_maps_field_errors() {
		let body = r#"{"error":true,"errors":[{"code":"missing-field","message":"Missing data for required field.","field":"name"}]}"#;
		let err = decode_response::<serde_json::Value>("products/", response(400, body))
			.expect_err("400 responses should fail.");

		match err {
			Error::Rejected { errors } => {
				assert_eq!(errors.len(), 1);
				assert_eq!(errors[0].field.as_deref(), Some("name"));
				assert_eq!(errors[0].code, "missing-field");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn auth_failures_use_framework_titles() {
		let err =
			decode_response::<String>("products/", response(401, r#"{"title":"Expired Token"}"#))
				.expect_err("401 responses should fail.");

		assert!(matches!(err, Error::Unauthorized { ref reason } if reason == "Expired Token"));

		let err = decode_response::<String>("users/auth/", response(403, ""))
			.expect_err("403 responses should fail.");

		assert!(matches!(err, Error::Forbidden { ref reason } if reason == "HTTP 403"));
	}

	#[test]
	fn not_found_names_the_resource() {
		let err = decode_response::<String>("products/9/", response(404, ""))
			.expect_err("404 responses should fail.");

		assert!(matches!(err, Error::NotFound { ref resource } if resource == "products/9/"));
	}

	#[test]
	fn server_errors_are_transient() {
		let err = decode_response::<String>("products/", response(500, "boom"))
			.expect_err("500 responses should fail.");

		match err {
			Error::Transient(TransientError::UnexpectedStatus { status, message, .. }) => {
				assert_eq!(status, 500);
				assert_eq!(message, "HTTP 500: boom");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
