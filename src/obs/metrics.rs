// self
use crate::obs::ConfigureOutcome;

/// Records a `configure` outcome via the global metrics recorder (when enabled).
pub fn record_configure_outcome(outcome: ConfigureOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth2_provider_configure_total", "outcome" => outcome.as_str())
			.increment(1);
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
	fn record_configure_outcome_noop_without_metrics() {
		record_configure_outcome(ConfigureOutcome::Failure);
	}
}
