//! Product models exchanged with the `/products/` endpoints.

// self
use crate::_prelude::*;

/// Product as returned by the API.
///
/// `id` and `code` are assigned server-side; `created`/`updated` are ISO timestamps the API
/// may omit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
	/// Server-assigned identifier.
	#[serde(default)]
	pub id: Option<i64>,
	/// Display name.
	pub name: String,
	/// Unit value.
	pub value: f64,
	/// Short human-facing code.
	#[serde(default)]
	pub code: Option<String>,
	/// Discount applied to the value, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub discount: Option<f64>,
	/// Creation timestamp.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<String>,
	/// Last update timestamp.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<String>,
}

/// Body of a product creation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
	/// Display name.
	pub name: String,
	/// Unit value.
	pub value: f64,
}
impl NewProduct {
	/// Builds a creation payload.
	pub fn new(name: impl Into<String>, value: f64) -> Self {
		Self { name: name.into(), value }
	}
}

/// Partial update applied with `PUT /products/{id}/`; unset fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
	/// New display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// New unit value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<f64>,
	/// New discount.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub discount: Option<f64>,
}
impl ProductUpdate {
	/// Sets the name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the value.
	pub fn value(mut self, value: f64) -> Self {
		self.value = Some(value);

		self
	}

	/// Sets the discount.
	pub fn discount(mut self, discount: f64) -> Self {
		self.discount = Some(discount);

		self
	}

	/// Returns `true` when no field would change.
	pub fn is_empty(&self) -> bool {
		self.name.is_none() && self.value.is_none() && self.discount.is_none()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn product_tolerates_missing_server_fields() {
		let product: Product = serde_json::from_str(r#"{"name":"Bread","value":2.5}"#)
			.expect("Minimal product should decode.");

		assert_eq!(product.id, None);
		assert_eq!(product.code, None);
		assert_eq!(product.value, 2.5);
	}

	#[test]
	fn update_serializes_only_set_fields() {
		let update = ProductUpdate::default().value(4.0);
		let payload = serde_json::to_string(&update).expect("Update should serialize.");

		assert_eq!(payload, r#"{"value":4.0}"#);
		assert!(!update.is_empty());
		assert!(ProductUpdate::default().is_empty());
	}
}
