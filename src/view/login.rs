//! Login screen: credential inputs and the resulting session state.

// self
use crate::{
	_prelude::*,
	actions::ApiClient,
	auth::Credentials,
	http::{ApiHttpClient, TransportErrorMapper},
	view::Notice,
};

/// Session status shown by the login screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
	/// No session; the form is shown.
	LoggedOut,
	/// Credentials are being exchanged.
	Authenticating,
	/// A session token is stored; protected screens are shown.
	Authenticated,
}

/// Editable fields of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
	/// Email input.
	Email,
	/// Password input.
	Password,
}

/// State holder for the login screen.
#[derive(Clone)]
pub struct LoginView {
	state: SessionState,
	email: String,
	password: String,
	notice: Option<Notice>,
}
impl LoginView {
	/// Starts logged out with empty inputs.
	pub fn new() -> Self {
		Self {
			state: SessionState::LoggedOut,
			email: String::new(),
			password: String::new(),
			notice: None,
		}
	}

	/// Current session status.
	pub fn state(&self) -> SessionState {
		self.state
	}

	/// Returns `true` when protected screens should be shown.
	pub fn is_authenticated(&self) -> bool {
		self.state == SessionState::Authenticated
	}

	/// Email input text.
	pub fn email(&self) -> &str {
		&self.email
	}

	/// Message from the last failed interaction, if any.
	pub fn notice(&self) -> Option<&Notice> {
		self.notice.as_ref()
	}

	/// Replaces one form input with `text`.
	pub fn set_field(&mut self, field: LoginField, text: impl Into<String>) {
		match field {
			LoginField::Email => self.email = text.into(),
			LoginField::Password => self.password = text.into(),
		}
	}

	/// Adopts a session that is already stored, so returning users skip the form.
	pub async fn restore<C, M>(&mut self, client: &ApiClient<C, M>) -> SessionState
	where
		C: ?Sized + ApiHttpClient,
		M: ?Sized + TransportErrorMapper<C::TransportError>,
	{
		match client.is_authenticated().await {
			Ok(true) => self.state = SessionState::Authenticated,
			Ok(false) => self.state = SessionState::LoggedOut,
			Err(e) => {
				self.notice = Some(e.into());
				self.state = SessionState::LoggedOut;
			},
		}

		self.state
	}

	/// Exchanges the form credentials for a session.
	///
	/// The password input is cleared once the session is stored.
	pub async fn submit<C, M>(&mut self, client: &ApiClient<C, M>) -> Result<(), Notice>
	where
		C: ?Sized + ApiHttpClient,
		M: ?Sized + TransportErrorMapper<C::TransportError>,
	{
		let credentials = Credentials::new(self.email.clone(), self.password.clone());

		self.state = SessionState::Authenticating;

		match client.login(&credentials).await {
			Ok(_) => {
				self.password.clear();
				self.notice = None;
				self.state = SessionState::Authenticated;

				Ok(())
			},
			Err(e) => {
				let notice = Notice::from(e);

				self.notice = Some(notice.clone());
				self.state = SessionState::LoggedOut;

				Err(notice)
			},
		}
	}

	/// Clears the stored session and returns to the form.
	pub async fn logout<C, M>(&mut self, client: &ApiClient<C, M>) -> Result<(), Notice>
	where
		C: ?Sized + ApiHttpClient,
		M: ?Sized + TransportErrorMapper<C::TransportError>,
	{
		client.logout().await.map_err(Notice::from)?;

		self.state = SessionState::LoggedOut;

		Ok(())
	}
}
impl Default for LoginView {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for LoginView {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginView")
			.field("state", &self.state)
			.field("email", &self.email)
			.field("password_set", &!self.password.is_empty())
			.finish()
	}
}
