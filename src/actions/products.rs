//! Product collection and detail actions.
//!
//! Every call presents the stored session with the `Token` scheme. Without a stored session
//! the action fails with [`Error::NotAuthenticated`] before any request is sent.

// self
use crate::{
	_prelude::*,
	actions::{
		ApiClient,
		common::{self, Call},
	},
	http::{ApiHttpClient, HttpMethod, TransportErrorMapper},
	obs::{self, ActionKind},
	product::{NewProduct, Product, ProductUpdate},
};

const PRODUCTS_PATH: &str = "products/";

fn product_path(id: i64) -> String {
	format!("{PRODUCTS_PATH}{id}/")
}

impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Fetches the product collection.
	pub async fn list_products(&self) -> Result<Vec<Product>> {
		const KIND: ActionKind = ActionKind::ListProducts;

		obs::observe(KIND, "list_products", async move {
			let auth = self.session_header().await?;

			self.dispatch(Call {
				kind: KIND,
				method: HttpMethod::Get,
				path: PRODUCTS_PATH,
				auth,
				json_body: None,
			})
			.await
		})
		.await
	}

	/// Creates a product and returns the stored representation.
	pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
		const KIND: ActionKind = ActionKind::CreateProduct;

		obs::observe(KIND, "create_product", async move {
			let auth = self.session_header().await?;
			let body = common::json_body(product)?;

			self.dispatch(Call {
				kind: KIND,
				method: HttpMethod::Post,
				path: PRODUCTS_PATH,
				auth,
				json_body: Some(body),
			})
			.await
		})
		.await
	}

	/// Fetches a single product.
	pub async fn get_product(&self, id: i64) -> Result<Product> {
		const KIND: ActionKind = ActionKind::GetProduct;

		obs::observe(KIND, "get_product", async move {
			let auth = self.session_header().await?;
			let path = product_path(id);

			self.dispatch(Call {
				kind: KIND,
				method: HttpMethod::Get,
				path: &path,
				auth,
				json_body: None,
			})
			.await
		})
		.await
	}

	/// Applies a partial update to a product.
	pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> Result<Product> {
		const KIND: ActionKind = ActionKind::UpdateProduct;

		obs::observe(KIND, "update_product", async move {
			let auth = self.session_header().await?;
			let path = product_path(id);
			let body = common::json_body(update)?;

			self.dispatch(Call {
				kind: KIND,
				method: HttpMethod::Put,
				path: &path,
				auth,
				json_body: Some(body),
			})
			.await
		})
		.await
	}

	/// Deletes a product and returns its last representation.
	pub async fn delete_product(&self, id: i64) -> Result<Product> {
		const KIND: ActionKind = ActionKind::DeleteProduct;

		obs::observe(KIND, "delete_product", async move {
			let auth = self.session_header().await?;
			let path = product_path(id);

			self.dispatch(Call {
				kind: KIND,
				method: HttpMethod::Delete,
				path: &path,
				auth,
				json_body: None,
			})
			.await
		})
		.await
	}
}
