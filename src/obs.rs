//! Optional observability helpers for client actions.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `ssms_client.action` with the `action` and
//!   `stage` fields, plus a `warn` event whenever an action fails.
//! - Enable `metrics` to increment the `ssms_client_action_total` counter for every
//!   attempt/success/failure, labeled by `action` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API actions observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
	/// Credential exchange against `/users/auth/`.
	Login,
	/// Local session removal.
	Logout,
	/// Product collection fetch.
	ListProducts,
	/// Product creation.
	CreateProduct,
	/// Single product fetch.
	GetProduct,
	/// Product update.
	UpdateProduct,
	/// Product deletion.
	DeleteProduct,
}
impl ActionKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ActionKind::Login => "login",
			ActionKind::Logout => "logout",
			ActionKind::ListProducts => "list_products",
			ActionKind::CreateProduct => "create_product",
			ActionKind::GetProduct => "get_product",
			ActionKind::UpdateProduct => "update_product",
			ActionKind::DeleteProduct => "delete_product",
		}
	}
}
impl Display for ActionKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
	/// Entry to an action.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl ActionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ActionOutcome::Attempt => "attempt",
			ActionOutcome::Success => "success",
			ActionOutcome::Failure => "failure",
		}
	}
}
impl Display for ActionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside an action span, recording attempt and outcome metrics around it.
pub async fn observe<T, Fut>(kind: ActionKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = ActionSpan::new(kind, stage);

	record_action_outcome(kind, ActionOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_action_outcome(kind, ActionOutcome::Success),
		Err(e) => {
			span.failed(e);
			record_action_outcome(kind, ActionOutcome::Failure);
		},
	}

	result
}
