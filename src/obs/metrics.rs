// self
use crate::obs::SignOutcome;

/// Records a signing outcome via the global metrics recorder (when enabled).
pub fn record_sign_outcome(outcome: SignOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth1_header_sign_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_sign_outcome_noop_without_metrics() {
		record_sign_outcome(SignOutcome::Failure);
	}
}
