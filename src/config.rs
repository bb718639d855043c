//! Client configuration: where the API lives and which version to talk to.

// std
use std::env;
// self
use crate::_prelude::*;

/// Validated client configuration.
///
/// The base URL always ends with a slash so relative endpoints such as `products/` join
/// beneath the version segment instead of replacing it. Deserialization runs the same
/// validation as [`ClientConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClientConfig")]
pub struct ClientConfig {
	base_url: Url,
}
impl ClientConfig {
	/// Versioned API root used when nothing else is configured.
	pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000/v1";
	/// Environment variable consulted by [`ClientConfig::from_env`].
	pub const ENV_BASE_URL: &'static str = "SSMS_API_URL";

	/// Returns a builder seeded with no URL.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Reads the base URL from `SSMS_API_URL`, falling back to [`Self::DEFAULT_BASE_URL`].
	pub fn from_env() -> Result<Self, ClientConfigError> {
		Self::from_env_value(env::var(Self::ENV_BASE_URL).ok())
	}

	fn from_env_value(value: Option<String>) -> Result<Self, ClientConfigError> {
		match value.as_deref().map(str::trim) {
			Some(raw) if !raw.is_empty() => Self::from_url_str(raw),
			_ => Ok(Self::default()),
		}
	}

	/// Parses and validates a versioned base URL.
	pub fn from_url_str(raw: &str) -> Result<Self, ClientConfigError> {
		let url = Url::parse(raw).map_err(|source| ClientConfigError::InvalidUrl { source })?;

		Self::builder().base_url(url).build()
	}

	/// Versioned API root, e.g. `http://localhost:8000/v1/`.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Joins a relative endpoint path onto the base URL.
	pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
		self.base_url.join(path.trim_start_matches('/'))
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self { base_url: Url::parse("http://localhost:8000/v1/").expect("Default URL is valid.") }
	}
}

#[derive(Deserialize)]
struct RawClientConfig {
	base_url: Url,
}
impl TryFrom<RawClientConfig> for ClientConfig {
	type Error = ClientConfigError;

	fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
		Self::builder().base_url(raw.base_url).build()
	}
}

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, ThisError)]
pub enum ClientConfigError {
	/// Neither `base_url` nor `origin` was supplied.
	#[error("A base URL or an origin is required.")]
	MissingUrl,
	/// The URL could not be parsed.
	#[error("API URL is invalid.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The URL uses a scheme other than http or https.
	#[error("API URL scheme `{scheme}` is not supported; use http or https.")]
	UnsupportedScheme {
		/// Offending scheme.
		scheme: String,
	},
	/// The URL cannot act as a base for relative endpoints (e.g. `mailto:`).
	#[error("API URL cannot be used as a base for endpoints.")]
	CannotBeABase,
	/// The API version segment is empty or contains a slash.
	#[error("API version `{version}` must be a single non-empty path segment.")]
	InvalidVersion {
		/// Offending version string.
		version: String,
	},
}

/// Builder for [`ClientConfig`].
#[derive(Clone, Debug, Default)]
pub struct ClientConfigBuilder {
	base_url: Option<Url>,
	origin: Option<Url>,
	api_version: Option<String>,
}
impl ClientConfigBuilder {
	/// Uses a complete versioned base URL. Takes precedence over `origin` + `api_version`.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Sets the server origin (scheme, host, port) to combine with [`Self::api_version`].
	pub fn origin(mut self, url: Url) -> Self {
		self.origin = Some(url);

		self
	}

	/// Sets the API version segment appended to the origin (defaults to `v1`).
	pub fn api_version(mut self, version: impl Into<String>) -> Self {
		self.api_version = Some(version.into());

		self
	}

	/// Validates and builds the configuration.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		let mut url = match (self.base_url, self.origin) {
			(Some(url), _) => url,
			(None, Some(mut origin)) => {
				let version = self.api_version.unwrap_or_else(|| "v1".into());

				if version.is_empty() || version.contains('/') {
					return Err(ClientConfigError::InvalidVersion { version });
				}

				ensure_trailing_slash(&mut origin);

				origin.join(&version).map_err(|source| ClientConfigError::InvalidUrl { source })?
			},
			(None, None) => return Err(ClientConfigError::MissingUrl),
		};

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ClientConfigError::UnsupportedScheme { scheme: url.scheme().to_owned() });
		}
		if url.cannot_be_a_base() {
			return Err(ClientConfigError::CannotBeABase);
		}

		url.set_query(None);
		url.set_fragment(None);
		ensure_trailing_slash(&mut url);

		Ok(ClientConfig { base_url: url })
	}
}

fn ensure_trailing_slash(url: &mut Url) {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}
}
