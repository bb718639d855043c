//! Typed async client for the SSMS product API: token sessions, pluggable token stores, and
//! render-free view state for product management front ends.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod actions;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod product;
pub mod store;
pub mod view;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		actions::ApiClient,
		config::ClientConfig,
		http::ReqwestHttpClient,
		store::{MemoryStore, TokenStore},
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = crate::actions::ReqwestApiClient;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a [`ClientConfig`] whose versioned base URL points at `server_url`.
	pub fn test_config(server_url: &str) -> ClientConfig {
		let origin = Url::parse(server_url).expect("Mock server URL should parse successfully.");

		ClientConfig::builder()
			.origin(origin)
			.api_version("v1")
			.build()
			.expect("Mock server configuration should build successfully.")
	}

	/// Constructs an [`ApiClient`] backed by an in-memory token store and the reqwest transport
	/// used across integration tests.
	pub fn build_test_client(server_url: &str) -> (ReqwestTestClient, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn TokenStore> = store_backend.clone();
		let client = ApiClient::with_http_client(
			test_config(server_url),
			store,
			test_reqwest_http_client(),
			Arc::new(crate::http::ReqwestTransportErrorMapper),
		);

		(client, store_backend)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
#[cfg(test)] use tracing_subscriber as _;
