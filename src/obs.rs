//! Optional observability hooks for provider normalization.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit `debug` events on the `authn_providers.normalize` target with the
//!   `input`, `provider`, and `outcome` fields whenever an alias is rewritten or an unknown
//!   identifier passes through.
//! - Enable `metrics` to increment the `authn_provider_normalize_total` counter for every
//!   normalization, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// How the normalizer arrived at its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NormalizeOutcome {
	/// The cleaned input already was the canonical identifier.
	Canonical,
	/// A recognized alias or legacy spelling was rewritten.
	Alias,
	/// The identifier is not built in and passed through verbatim.
	Unknown,
}
impl NormalizeOutcome {
	/// Returns a stable label suitable for event or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			NormalizeOutcome::Canonical => "canonical",
			NormalizeOutcome::Alias => "alias",
			NormalizeOutcome::Unknown => "unknown",
		}
	}
}
impl Display for NormalizeOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Reports a single normalization through every enabled backend.
pub fn observe_normalization(input: &str, provider: &str, outcome: NormalizeOutcome) {
	trace_normalization(input, provider, outcome);
	record_normalize_outcome(outcome);
}
