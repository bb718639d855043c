// self
use crate::obs::{ActionKind, ActionOutcome};

/// Records an action outcome via the global metrics recorder (when enabled).
pub fn record_action_outcome(kind: ActionKind, outcome: ActionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"ssms_client_action_total",
			"action" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
