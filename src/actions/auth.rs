//! Session actions: credential exchange, header selection, and logout.

// self
use crate::{
	_prelude::*,
	actions::{ApiClient, common::Call},
	auth::{AuthHeader, Credentials, SessionToken},
	http::{ApiHttpClient, HttpMethod, TransportErrorMapper},
	obs::{self, ActionKind},
};

const AUTH_PATH: &str = "users/auth/";

impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Picks the Authorization header for the next request.
	///
	/// A stored session yields `Token <token>` whatever `credentials` holds; otherwise the
	/// supplied credentials yield `Basic <base64(email:password)>`.
	pub async fn auth_header(&self, credentials: Option<&Credentials>) -> Result<AuthHeader> {
		let stored = self.store.load().await?;

		AuthHeader::resolve(stored.as_ref(), credentials)
	}

	/// Exchanges `credentials` for a session token and persists it in the store.
	///
	/// The exchange always presents the Basic scheme, so logging in again while a session is
	/// stored replaces it.
	pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
		obs::observe(ActionKind::Login, "login", async move {
			let raw: String = self
				.dispatch(Call {
					kind: ActionKind::Login,
					method: HttpMethod::Post,
					path: AUTH_PATH,
					auth: AuthHeader::basic(credentials),
					json_body: None,
				})
				.await?;
			let token = SessionToken::new(raw);

			self.store.save(token.clone()).await?;

			Ok(token)
		})
		.await
	}

	/// Removes the stored session, returning it if one existed.
	pub async fn logout(&self) -> Result<Option<SessionToken>> {
		obs::observe(ActionKind::Logout, "logout", async move {
			Ok(self.store.clear().await?)
		})
		.await
	}

	/// Returns the stored session, if any.
	pub async fn current_token(&self) -> Result<Option<SessionToken>> {
		Ok(self.store.load().await?)
	}

	/// Returns `true` when a session token is stored.
	pub async fn is_authenticated(&self) -> Result<bool> {
		Ok(self.current_token().await?.is_some())
	}
}
