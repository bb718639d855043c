//! Request plumbing shared by every action: endpoint resolution, dispatch, and decoding.

// self
use crate::{
	_prelude::*,
	actions::ApiClient,
	api,
	auth::AuthHeader,
	error::ConfigError,
	http::{ApiHttpClient, ApiRequest, HttpMethod, TransportErrorMapper},
	obs::ActionKind,
};

/// Describes one outbound call before it is dispatched.
pub(crate) struct Call<'a> {
	pub kind: ActionKind,
	pub method: HttpMethod,
	pub path: &'a str,
	pub auth: AuthHeader,
	pub json_body: Option<Vec<u8>>,
}

impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns the Token header for the stored session or fails with
	/// [`Error::NotAuthenticated`] without touching the network.
	pub(crate) async fn session_header(&self) -> Result<AuthHeader> {
		self.store
			.load()
			.await?
			.map(|token| AuthHeader::token(&token))
			.ok_or(Error::NotAuthenticated)
	}

	/// Sends `call` and decodes the `data` payload of the response.
	pub(crate) async fn dispatch<T>(&self, call: Call<'_>) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = self.config.endpoint(call.path).map_err(|source| {
			ConfigError::InvalidEndpoint { path: call.path.to_owned(), source }
		})?;
		let request = ApiRequest {
			method: call.method,
			url,
			authorization: Some(call.auth.to_header_value()),
			json_body: call.json_body,
		};
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| self.transport_mapper.map_transport_error(call.kind, e))?;

		api::decode_response(call.path, response)
	}
}

/// Serializes an action payload into a JSON request body.
pub(crate) fn json_body<T>(payload: &T) -> Result<Vec<u8>>
where
	T: ?Sized + Serialize,
{
	serde_json::to_vec(payload).map_err(|e| ConfigError::from(e).into())
}
