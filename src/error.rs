//! Crate-level error types.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by the strict lookup APIs.
///
/// Normalization itself is total; only callers that opt into [`ProviderType::builtin`]
/// ever see this type.
///
/// [`ProviderType::builtin`]: crate::provider::ProviderType::builtin
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// The normalized identifier does not name a built-in provider.
	#[error("Unknown authentication provider `{value}`.")]
	UnknownProvider {
		/// Canonical form of the rejected identifier.
		value: String,
	},
}
