//! Thread-safe in-memory [`TokenStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::SessionToken,
	store::{StoreFuture, TokenStore},
};

type Slot = Arc<RwLock<Option<SessionToken>>>;

/// Thread-safe storage backend that keeps the session in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Slot);
impl MemoryStore {
	/// Builds a store that already holds `token`.
	pub fn with_token(token: SessionToken) -> Self {
		Self(Arc::new(RwLock::new(Some(token))))
	}
}
impl TokenStore for MemoryStore {
	fn load(&self) -> StoreFuture<'_, Option<SessionToken>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.read().clone()) })
	}

	fn save(&self, token: SessionToken) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = Some(token);

			Ok(())
		})
	}

	fn clear(&self) -> StoreFuture<'_, Option<SessionToken>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.write().take()) })
	}
}
