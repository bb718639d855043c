//! Demonstrates a full session against a mocked SSMS API: log in through the login view,
//! load the product list, and add a product through the creation form.

// std
use std::sync::Arc;
// crates.io
use color_eyre::{Result, eyre::eyre};
use httpmock::prelude::*;
use url::Url;
// self
use ssms_client::{
	actions::ReqwestApiClient,
	config::ClientConfig,
	store::{MemoryStore, TokenStore},
	view::{LoginField, LoginView, ProductField, ProductListView},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users/auth/");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":"demo-jwt"}"#);
		})
		.await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/products/").header("authorization", "Token demo-jwt");
			then.status(200).header("content-type", "application/json").body(
				r#"{"data":[{"id":1,"name":"Bread","value":2.5,"code":"P-1"}]}"#,
			);
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/products/").header("authorization", "Token demo-jwt");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":{"id":2,"name":"Milk","value":3.0,"code":"P-2"}}"#);
		})
		.await;
	let config =
		ClientConfig::builder().origin(Url::parse(&server.base_url())?).api_version("v1").build()?;
	let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());
	let client = ReqwestApiClient::new(config, store);
	let mut login = LoginView::new();

	login.restore(&client).await;
	login.set_field(LoginField::Email, "admin@ssms.io");
	login.set_field(LoginField::Password, "demo-password");
	login.submit(&client).await.map_err(|notice| eyre!(notice.message))?;

	let mut products = ProductListView::new();

	products.load(&client).await;
	products.set_field(ProductField::Name, "Milk");
	products.set_field(ProductField::Value, "3");
	products.submit(&client).await.map_err(|notice| eyre!(notice.message))?;

	for product in products.products() {
		println!(
			"({}) {} {}",
			product.value,
			product.name,
			product.code.as_deref().unwrap_or("-")
		);
	}

	auth_mock.assert_async().await;
	list_mock.assert_async().await;
	create_mock.assert_async().await;

	Ok(())
}
