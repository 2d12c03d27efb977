// self
use crate::obs::CallOutcome;

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(action: &str, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"aws_query_call_total",
			"action" => action.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (action, outcome);
	}
}
