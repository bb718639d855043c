#![cfg(all(feature = "reqwest", feature = "test"))]

// crates.io
use time::macros;
// self
use ssms_client::{
	_preludet::*,
	auth::SessionToken,
	store::{MemoryStore, TokenStore},
};

fn token(value: &str) -> SessionToken {
	SessionToken::issued_at(value, macros::datetime!(2025-11-10 12:00 UTC))
}

#[tokio::test]
async fn empty_store_has_no_session() {
	let store = MemoryStore::default();

	assert!(store.load().await.expect("Loading from an empty store should succeed.").is_none());
	assert!(store.clear().await.expect("Clearing an empty store should succeed.").is_none());
}

#[tokio::test]
async fn save_replaces_previous_session() {
	let store = MemoryStore::with_token(token("first"));

	store.save(token("second")).await.expect("Saving a replacement should succeed.");

	let loaded = store
		.load()
		.await
		.expect("Loading the session should succeed.")
		.expect("Session should remain present.");

	assert_eq!(loaded.expose(), "second");
	assert_eq!(loaded.issued_at, macros::datetime!(2025-11-10 12:00 UTC));
}

#[tokio::test]
async fn clones_share_the_same_slot() {
	let store = MemoryStore::default();
	let shared = store.clone();

	store.save(token("shared")).await.expect("Saving the session should succeed.");

	let removed = shared.clear().await.expect("Clearing through a clone should succeed.");

	assert_eq!(removed.map(|t| t.expose().to_owned()), Some("shared".into()));
	assert!(store.load().await.expect("Loading should succeed.").is_none());
}

#[tokio::test]
async fn concurrent_saves_leave_one_winner() {
	let store = MemoryStore::default();
	let store_a = store.clone();
	let store_b = store.clone();
	let task_a = tokio::spawn(async move { store_a.save(token("token-a")).await });
	let task_b = tokio::spawn(async move { store_b.save(token("token-b")).await });
	let (outcome_a, outcome_b) = tokio::join!(task_a, task_b);

	outcome_a.expect("Save task A should not panic.").expect("Save A should succeed.");
	outcome_b.expect("Save task B should not panic.").expect("Save B should succeed.");

	let winner = store
		.load()
		.await
		.expect("Loading the final session should succeed.")
		.expect("A session should remain present.");

	assert!(matches!(winner.expose(), "token-a" | "token-b"));
}

#[tokio::test]
async fn store_is_usable_as_trait_object() {
	let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());

	store.save(token("dyn")).await.expect("Saving through the trait object should succeed.");

	assert_eq!(
		store
			.load()
			.await
			.expect("Loading through the trait object should succeed.")
			.map(|t| t.expose().to_owned()),
		Some("dyn".into())
	);
}
