//! Product list screen: the loaded collection plus the creation form.

// self
use crate::{
	_prelude::*,
	actions::ApiClient,
	http::{ApiHttpClient, TransportErrorMapper},
	product::{NewProduct, Product},
	view::Notice,
};

/// Load status of the product list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
	/// The collection has not arrived yet.
	Loading,
	/// The collection arrived.
	Loaded,
	/// Fetching failed; see the view's notice.
	Failed,
}

/// Editable fields of the creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductField {
	/// Product name input.
	Name,
	/// Product value input.
	Value,
}

/// Client-side form validation failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum FormError {
	/// Name input is empty.
	#[error("Name is required.")]
	EmptyName,
	/// Value input is empty.
	#[error("Value is required.")]
	EmptyValue,
	/// Value input is not a finite number.
	#[error("Value `{input}` is not a number.")]
	InvalidValue {
		/// Raw input text.
		input: String,
	},
}

/// Raw text held by the creation form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductForm {
	/// Name input text.
	pub name: String,
	/// Value input text.
	pub value: String,
}
impl ProductForm {
	/// Parses the inputs into a creation payload.
	pub fn to_payload(&self) -> Result<NewProduct, FormError> {
		let name = self.name.trim();
		let raw_value = self.value.trim();

		if name.is_empty() {
			return Err(FormError::EmptyName);
		}
		if raw_value.is_empty() {
			return Err(FormError::EmptyValue);
		}

		let value = raw_value
			.parse::<f64>()
			.ok()
			.filter(|v| v.is_finite())
			.ok_or_else(|| FormError::InvalidValue { input: raw_value.to_owned() })?;

		Ok(NewProduct::new(name, value))
	}
}
impl Default for ProductForm {
	fn default() -> Self {
		Self { name: String::new(), value: "0".into() }
	}
}

/// State holder for the product list screen.
#[derive(Clone, Debug)]
pub struct ProductListView {
	state: LoadState,
	products: Vec<Product>,
	form: ProductForm,
	notice: Option<Notice>,
}
impl ProductListView {
	/// Starts in [`LoadState::Loading`] with an empty list and a reset form.
	pub fn new() -> Self {
		Self {
			state: LoadState::Loading,
			products: Vec::new(),
			form: ProductForm::default(),
			notice: None,
		}
	}

	/// Current load status.
	pub fn state(&self) -> LoadState {
		self.state
	}

	/// Returns `true` until the first load attempt finishes.
	pub fn is_loading(&self) -> bool {
		self.state == LoadState::Loading
	}

	/// Products currently shown.
	pub fn products(&self) -> &[Product] {
		&self.products
	}

	/// Creation form inputs.
	pub fn form(&self) -> &ProductForm {
		&self.form
	}

	/// Message from the last failed interaction, if any.
	pub fn notice(&self) -> Option<&Notice> {
		self.notice.as_ref()
	}

	/// Clears the current notice.
	pub fn dismiss_notice(&mut self) {
		self.notice = None;
	}

	/// Replaces one form input with `text`.
	pub fn set_field(&mut self, field: ProductField, text: impl Into<String>) {
		match field {
			ProductField::Name => self.form.name = text.into(),
			ProductField::Value => self.form.value = text.into(),
		}
	}

	/// Fetches the collection, always leaving [`LoadState::Loading`].
	pub async fn load<C, M>(&mut self, client: &ApiClient<C, M>) -> LoadState
	where
		C: ?Sized + ApiHttpClient,
		M: ?Sized + TransportErrorMapper<C::TransportError>,
	{
		self.state = LoadState::Loading;

		match client.list_products().await {
			Ok(products) => {
				self.products = products;
				self.notice = None;
				self.state = LoadState::Loaded;
			},
			Err(e) => {
				self.notice = Some(e.into());
				self.state = LoadState::Failed;
			},
		}

		self.state
	}

	/// Submits the creation form.
	///
	/// On success exactly one product is appended and the form resets. On failure the list
	/// and the form are left untouched and the returned notice is also recorded on the view.
	pub async fn submit<C, M>(&mut self, client: &ApiClient<C, M>) -> Result<Product, Notice>
	where
		C: ?Sized + ApiHttpClient,
		M: ?Sized + TransportErrorMapper<C::TransportError>,
	{
		let outcome = match self.form.to_payload() {
			Ok(payload) => client.create_product(&payload).await.map_err(Notice::from),
			Err(e) => Err(Notice::new(e)),
		};

		match outcome {
			Ok(product) => {
				self.notice = None;
				self.form = ProductForm::default();
				self.products.push(product.clone());

				Ok(product)
			},
			Err(notice) => {
				self.notice = Some(notice.clone());

				Err(notice)
			},
		}
	}
}
impl Default for ProductListView {
	fn default() -> Self {
		Self::new()
	}
}
