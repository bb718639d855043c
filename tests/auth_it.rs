#![cfg(all(feature = "reqwest", feature = "test"))]

// crates.io
use httpmock::prelude::*;
// self
use ssms_client::{
	_preludet::*,
	auth::{AuthHeader, Credentials, SessionToken},
	store::TokenStore,
};

const BASIC_ADMIN: &str = "Basic YWRtaW5Ac3Ntcy5pbzpodW50ZXIy";

fn admin() -> Credentials {
	Credentials::new("admin@ssms.io", "hunter2")
}

#[tokio::test]
async fn login_exchanges_basic_credentials_and_stores_token() {
	let server = MockServer::start_async().await;
	let (client, store) = build_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users/auth/").header("authorization", BASIC_ADMIN);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":"issued-jwt"}"#);
		})
		.await;
	let token = client.login(&admin()).await.expect("Login should succeed.");

	assert_eq!(token.expose(), "issued-jwt");

	mock.assert_async().await;

	let stored = store
		.load()
		.await
		.expect("Loading the stored token should succeed.")
		.expect("Login should persist the token.");

	assert_eq!(stored.expose(), "issued-jwt");
	assert!(client.is_authenticated().await.expect("Session lookup should succeed."));
}

#[tokio::test]
async fn login_uses_basic_even_when_a_token_is_stored() {
	let server = MockServer::start_async().await;
	let (client, store) = build_test_client(&server.base_url());

	store.save(SessionToken::new("stale-jwt")).await.expect("Seeding the store should succeed.");

	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users/auth/").header("authorization", BASIC_ADMIN);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":"fresh-jwt"}"#);
		})
		.await;

	client.login(&admin()).await.expect("Re-login should succeed.");

	mock.assert_async().await;

	let current = client
		.current_token()
		.await
		.expect("Session lookup should succeed.")
		.expect("Session should remain stored.");

	assert_eq!(current.expose(), "fresh-jwt");
}

#[tokio::test]
async fn login_maps_bad_password_to_forbidden() {
	let server = MockServer::start_async().await;
	let (client, store) = build_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users/auth/");
			then.status(403)
				.header("content-type", "application/json")
				.body(r#"{"title":"403 Forbidden"}"#);
		})
		.await;
	let err = client.login(&admin()).await.expect_err("Wrong password should fail.");

	assert!(matches!(err, Error::Forbidden { ref reason } if reason == "403 Forbidden"));
	assert!(store.load().await.expect("Loading should succeed.").is_none());

	mock.assert_async().await;
}

#[tokio::test]
async fn login_maps_unknown_user_to_not_found() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users/auth/");
			then.status(404);
		})
		.await;
	let err = client.login(&admin()).await.expect_err("Unknown user should fail.");

	assert!(matches!(err, Error::NotFound { ref resource } if resource == "users/auth/"));

	mock.assert_async().await;
}

#[tokio::test]
async fn auth_header_prefers_stored_token() {
	let server = MockServer::start_async().await;
	let (client, store) = build_test_client(&server.base_url());
	let basic = client
		.auth_header(Some(&admin()))
		.await
		.expect("Credentials should produce a header without a stored token.");

	assert_eq!(basic.to_header_value(), BASIC_ADMIN);

	store.save(SessionToken::new("stored-jwt")).await.expect("Seeding the store should succeed.");

	for credentials in [None, Some(admin())] {
		let header = client
			.auth_header(credentials.as_ref())
			.await
			.expect("Stored token should always produce a header.");

		assert_eq!(header, AuthHeader::Token("stored-jwt".into()));
	}
}

#[tokio::test]
async fn logout_clears_the_session() {
	let server = MockServer::start_async().await;
	let (client, store) = build_test_client(&server.base_url());

	store.save(SessionToken::new("stored-jwt")).await.expect("Seeding the store should succeed.");

	let removed = client.logout().await.expect("Logout should succeed.");

	assert_eq!(removed.map(|token| token.expose().to_owned()), Some("stored-jwt".into()));
	assert!(!client.is_authenticated().await.expect("Session lookup should succeed."));
	assert!(client.logout().await.expect("Second logout should succeed.").is_none());
}
