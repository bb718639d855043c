//! API actions exposed through [`ApiClient`].
//!
//! Actions are grouped by resource: [`auth`] covers the credential exchange and the local
//! session, [`products`] covers the product collection and detail endpoints. Every action
//! returns [`Result`]; failures never share the success channel.

pub mod auth;
pub mod products;

mod common;

// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	http::{ApiHttpClient, TransportErrorMapper},
	store::TokenStore,
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestApiClient = ApiClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Entry point for every API call.
///
/// The client owns the transport, the error mapper, and the token store so individual
/// actions only describe their endpoint and payload. Cloning is cheap; clones share the
/// same transport and store.
pub struct ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Validated API location.
	pub config: ClientConfig,
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Token store holding the current session.
	pub store: Arc<dyn TokenStore>,
}
impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		config: ClientConfig,
		store: Arc<dyn TokenStore>,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			config,
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			store,
		}
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client that provisions its own reqwest transport.
	pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
		Self::with_http_client(
			config,
			store,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}
impl<C, M> Clone for ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			store: self.store.clone(),
		}
	}
}
impl<C, M> Debug for ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient").field("base_url", &self.config.base_url().as_str()).finish()
	}
}
