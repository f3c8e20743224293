//! Capability classes and the static sets behind them.
//!
//! Each set is the single source of truth for its capability: adding a provider to a class means
//! editing one slice here, never the predicates on [`ProviderType`].

// self
use crate::{_prelude::*, provider::ProviderType};

/// Providers that authenticate against an external directory.
pub const REMOTE_PROVIDERS: &[ProviderType] = &[ProviderType::LDAP];
/// Providers that authenticate against locally stored credentials.
pub const LOCAL_PROVIDERS: &[ProviderType] = &[ProviderType::LOCAL];
/// Providers that support two-factor authentication with a passcode.
pub const TWO_FACTOR_PROVIDERS: &[ProviderType] =
	&[ProviderType::DEFAULT, ProviderType::LOCAL, ProviderType::LDAP];
/// Providers that authenticate clients instead of users.
pub const CLIENT_PROVIDERS: &[ProviderType] = &[
	ProviderType::CLIENT,
	ProviderType::CLIENT_CREDENTIALS,
	ProviderType::APPLICATION,
	ProviderType::ACCESS_TOKEN,
];

/// Capability classes a provider can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderClass {
	/// External directory; see [`REMOTE_PROVIDERS`].
	Remote,
	/// Local credentials; see [`LOCAL_PROVIDERS`].
	Local,
	/// Passcode-based second factor; see [`TWO_FACTOR_PROVIDERS`].
	TwoFactor,
	/// Client-issued authentication; see [`CLIENT_PROVIDERS`].
	Client,
}
impl ProviderClass {
	/// Every class, in declaration order.
	pub const ALL: [ProviderClass; 4] =
		[ProviderClass::Remote, ProviderClass::Local, ProviderClass::TwoFactor, ProviderClass::Client];

	/// Returns the providers that make up the class.
	pub const fn members(self) -> &'static [ProviderType] {
		match self {
			ProviderClass::Remote => REMOTE_PROVIDERS,
			ProviderClass::Local => LOCAL_PROVIDERS,
			ProviderClass::TwoFactor => TWO_FACTOR_PROVIDERS,
			ProviderClass::Client => CLIENT_PROVIDERS,
		}
	}

	/// Returns true if the stored identifier is a member; no normalization is applied.
	pub fn contains(self, provider: &ProviderType) -> bool {
		self.members().iter().any(|member| member.is(provider))
	}

	/// Returns a stable label suitable for logs and configuration.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderClass::Remote => "remote",
			ProviderClass::Local => "local",
			ProviderClass::TwoFactor => "two_factor",
			ProviderClass::Client => "client",
		}
	}
}
impl Display for ProviderClass {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
