// self
use crate::obs::NormalizeOutcome;

/// Records a normalization outcome via the global metrics recorder (when enabled).
pub fn record_normalize_outcome(outcome: NormalizeOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("authn_provider_normalize_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
