// self
use crate::obs::NormalizeOutcome;

/// Emits a `debug` event for normalizations that changed or could not classify the input.
///
/// Inputs that already were canonical stay silent to keep hot lookup paths quiet.
pub fn trace_normalization(input: &str, provider: &str, outcome: NormalizeOutcome) {
	if !is_traced(outcome) {
		return;
	}

	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			target: "authn_providers.normalize",
			input,
			provider,
			outcome = outcome.as_str(),
			"Normalized authentication provider."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (input, provider);
	}
}

fn is_traced(outcome: NormalizeOutcome) -> bool {
	outcome != NormalizeOutcome::Canonical
}
