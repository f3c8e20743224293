//! Authentication provider identifiers.
//!
//! [`ProviderType`] is an open string enumeration: the associated constants name the built-in
//! providers, but any other identifier is accepted and carried verbatim. Values enter either
//! through the normalizing [`provider`] constructor (user input, configuration) or through
//! [`ProviderType::raw`] (values persisted by older schemas). Both paths render the same
//! canonical form through [`ProviderType::canonical`].
//!
//! `class` holds the capability sets behind the classification predicates and `normalize`
//! owns input cleaning plus the alias table.

pub mod class;
pub mod normalize;

pub use class::*;
pub use normalize::*;

// std
use std::convert::Infallible;
// self
use crate::_prelude::*;

mod id {
	pub const UNDEFINED: &str = "";
	pub const DEFAULT: &str = "default";
	pub const CLIENT: &str = "client";
	pub const CLIENT_CREDENTIALS: &str = "client_credentials";
	pub const APPLICATION: &str = "application";
	pub const ACCESS_TOKEN: &str = "access_token";
	pub const LOCAL: &str = "local";
	pub const LDAP: &str = "ldap";
	pub const LINK: &str = "link";
	pub const NONE: &str = "none";
}

/// Every non-empty canonical identifier known to the crate.
pub const BUILTIN_PROVIDERS: &[ProviderType] = &[
	ProviderType::DEFAULT,
	ProviderType::CLIENT,
	ProviderType::CLIENT_CREDENTIALS,
	ProviderType::APPLICATION,
	ProviderType::ACCESS_TOKEN,
	ProviderType::LOCAL,
	ProviderType::LDAP,
	ProviderType::LINK,
	ProviderType::NONE,
];

/// Authentication provider identifier.
///
/// Equality, ordering, and hashing operate on the stored value. Use [`ProviderType::equal`] or
/// [`ProviderType::is_default`] when legacy spellings must compare by their canonical form.
/// Serialization writes the canonical form; deserialization runs the normalizer.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProviderType(Cow<'static, str>);
impl ProviderType {
	/// Unset provider; renders as `default`.
	pub const UNDEFINED: Self = Self::from_static(id::UNDEFINED);
	/// Default provider.
	pub const DEFAULT: Self = Self::from_static(id::DEFAULT);
	/// Generic client authentication.
	pub const CLIENT: Self = Self::from_static(id::CLIENT);
	/// OAuth 2.0 client credentials grant.
	pub const CLIENT_CREDENTIALS: Self = Self::from_static(id::CLIENT_CREDENTIALS);
	/// Application-specific password or key.
	pub const APPLICATION: Self = Self::from_static(id::APPLICATION);
	/// Pre-issued access token.
	pub const ACCESS_TOKEN: Self = Self::from_static(id::ACCESS_TOKEN);
	/// Local account with a password.
	pub const LOCAL: Self = Self::from_static(id::LOCAL);
	/// LDAP or Active Directory.
	pub const LDAP: Self = Self::from_static(id::LDAP);
	/// Share link or URL token.
	pub const LINK: Self = Self::from_static(id::LINK);
	/// Authentication disabled.
	pub const NONE: Self = Self::from_static(id::NONE);

	/// Wraps a static identifier without normalization.
	pub const fn from_static(value: &'static str) -> Self {
		Self(Cow::Borrowed(value))
	}

	/// Wraps an identifier verbatim, e.g. one loaded from storage written by an older schema.
	///
	/// No cleaning or alias mapping happens here; [`canonical`](Self::canonical) still renders
	/// legacy spellings such as `password` or `token` correctly.
	pub fn raw(value: impl Into<String>) -> Self {
		Self(Cow::Owned(value.into()))
	}

	/// Normalizes arbitrary input; see [`provider`].
	pub fn parse(value: &str) -> Self {
		provider(value)
	}

	/// Normalizes the input and rejects identifiers that are not built in.
	pub fn builtin(value: &str) -> Result<Self> {
		let parsed = provider(value);

		if parsed.is_builtin() {
			Ok(parsed)
		} else {
			Err(Error::UnknownProvider { value: parsed.canonical().to_owned() })
		}
	}

	/// Returns the stored identifier exactly as constructed.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true when both stored identifiers are identical.
	pub fn is(&self, other: &ProviderType) -> bool {
		self.as_str() == other.as_str()
	}

	/// Returns true when the stored identifiers differ.
	pub fn is_not(&self, other: &ProviderType) -> bool {
		!self.is(other)
	}

	/// Returns true if no provider has been set.
	pub fn is_undefined(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true for external directory providers.
	pub fn is_remote(&self) -> bool {
		self.in_class(ProviderClass::Remote)
	}

	/// Returns true if local password authentication is possible.
	pub fn is_local(&self) -> bool {
		self.in_class(ProviderClass::Local)
	}

	/// Returns true if the provider supports two-factor authentication with a passcode.
	pub fn supports_2fa(&self) -> bool {
		self.in_class(ProviderClass::TwoFactor)
	}

	/// Returns true if the authentication is issued to a client rather than a user.
	pub fn is_client(&self) -> bool {
		self.in_class(ProviderClass::Client)
	}

	/// Returns true only for the exact `application` identifier.
	pub fn is_application(&self) -> bool {
		self.as_str() == id::APPLICATION
	}

	/// Returns true if the canonical form is `default`, which includes the undefined value.
	pub fn is_default(&self) -> bool {
		self.canonical() == id::DEFAULT
	}

	/// Returns true if the canonical form names a built-in provider.
	pub fn is_builtin(&self) -> bool {
		let canonical = self.canonical();

		BUILTIN_PROVIDERS.iter().any(|p| p.as_str() == canonical)
	}

	/// Returns true if the stored identifier belongs to the capability class.
	pub fn in_class(&self, class: ProviderClass) -> bool {
		class.contains(self)
	}

	/// Iterates over every capability class the stored identifier belongs to.
	pub fn classes(&self) -> impl Iterator<Item = ProviderClass> + '_ {
		ProviderClass::ALL.into_iter().filter(move |class| class.contains(self))
	}

	/// Returns the canonical identifier, mapping legacy spellings that may have been stored
	/// verbatim.
	pub fn canonical(&self) -> &str {
		match self.as_str() {
			id::UNDEFINED => id::DEFAULT,
			"token" => id::LINK,
			"password" => id::LOCAL,
			"oauth2" | "client credentials" => id::CLIENT_CREDENTIALS,
			other => other,
		}
	}

	/// Case-insensitive comparison against the canonical form.
	///
	/// Characters are compared pairwise and match when they share a single-character lower- or
	/// upper-case mapping, so `σ` and `ς` compare equal through `Σ`.
	pub fn equal(&self, value: &str) -> bool {
		let mut lhs = value.chars();
		let mut rhs = self.canonical().chars();

		loop {
			match (lhs.next(), rhs.next()) {
				(None, None) => return true,
				(Some(a), Some(b)) if fold_eq(a, b) => continue,
				_ => return false,
			}
		}
	}

	/// Negation of [`equal`](Self::equal).
	pub fn not_equal(&self, value: &str) -> bool {
		!self.equal(value)
	}

	/// Human-readable label for user interfaces.
	pub fn pretty(&self) -> Cow<'static, str> {
		match self.as_str() {
			id::LDAP => Cow::Borrowed("LDAP/AD"),
			id::CLIENT => Cow::Borrowed("Client"),
			id::ACCESS_TOKEN => Cow::Borrowed("Access Token"),
			id::CLIENT_CREDENTIALS => Cow::Borrowed("Client Credentials"),
			_ => Cow::Owned(upper_first(self.canonical())),
		}
	}
}
impl Debug for ProviderType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ProviderType({:?})", self.as_str())
	}
}
impl Display for ProviderType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.canonical())
	}
}
impl FromStr for ProviderType {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(provider(s))
	}
}
impl From<&str> for ProviderType {
	fn from(value: &str) -> Self {
		provider(value)
	}
}
impl From<String> for ProviderType {
	fn from(value: String) -> Self {
		provider(&value)
	}
}
impl From<ProviderType> for String {
	fn from(value: ProviderType) -> Self {
		value.canonical().to_owned()
	}
}

fn fold_eq(a: char, b: char) -> bool {
	fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
		let first = mapped.next()?;

		mapped.next().is_none().then_some(first)
	}

	if a == b {
		return true;
	}

	let lower = single(a.to_lowercase()).zip(single(b.to_lowercase()));
	let upper = single(a.to_uppercase()).zip(single(b.to_uppercase()));

	matches!(lower, Some((x, y)) if x == y) || matches!(upper, Some((x, y)) if x == y)
}

fn upper_first(value: &str) -> String {
	let mut chars = value.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn canonical_maps_stored_legacy_spellings() {
		assert_eq!(ProviderType::UNDEFINED.canonical(), "default");
		assert_eq!(ProviderType::raw("token").canonical(), "link");
		assert_eq!(ProviderType::raw("password").canonical(), "local");
		assert_eq!(ProviderType::raw("oauth2").canonical(), "client_credentials");
		assert_eq!(ProviderType::raw("client credentials").canonical(), "client_credentials");
		assert_eq!(ProviderType::raw("pass").canonical(), "pass", "Only the parser maps `pass`.");
		assert_eq!(ProviderType::raw("custom").to_string(), "custom");
	}

	#[test]
	fn is_compares_stored_values() {
		assert!(ProviderType::LOCAL.is(&ProviderType::raw("local")));
		assert!(ProviderType::raw("password").is_not(&ProviderType::LOCAL));
		assert!(ProviderType::UNDEFINED.is_undefined());
		assert!(!ProviderType::DEFAULT.is_undefined());
		assert!(ProviderType::default().is_undefined());
	}

	#[test]
	fn is_default_uses_canonical_form() {
		assert!(ProviderType::UNDEFINED.is_default());
		assert!(ProviderType::DEFAULT.is_default());
		assert!(!ProviderType::raw("password").is_default());
		assert!(!ProviderType::NONE.is_default());
	}

	#[test]
	fn equal_folds_case_against_canonical_form() {
		assert!(ProviderType::raw("password").equal("LOCAL"));
		assert!(ProviderType::raw("token").equal("Link"));
		assert!(ProviderType::UNDEFINED.equal("Default"));
		assert!(ProviderType::LDAP.not_equal("ad"));
		assert!(ProviderType::raw("password").not_equal("password"));
	}

	#[test]
	fn equal_matches_simple_case_fold_variants() {
		assert!(ProviderType::raw("σ").equal("ς"));
		assert!(ProviderType::raw("σ").equal("Σ"));
		assert!(ProviderType::LINK.equal("LIN\u{212A}"), "Kelvin sign folds to `k`.");
		assert!(ProviderType::LINK.not_equal("lin"));
		assert!(ProviderType::LINK.not_equal("links"));
	}

	#[test]
	fn pretty_applies_overrides_then_upper_first() {
		assert_eq!(ProviderType::LDAP.pretty(), "LDAP/AD");
		assert_eq!(ProviderType::CLIENT.pretty(), "Client");
		assert_eq!(ProviderType::ACCESS_TOKEN.pretty(), "Access Token");
		assert_eq!(ProviderType::CLIENT_CREDENTIALS.pretty(), "Client Credentials");
		assert_eq!(ProviderType::LOCAL.pretty(), "Local");
		assert_eq!(ProviderType::UNDEFINED.pretty(), "Default");
		assert_eq!(ProviderType::raw("password").pretty(), "Local");
		assert_eq!(ProviderType::raw("custom").pretty(), "Custom");
		assert_eq!(ProviderType::raw("oIDC").pretty(), "OIDC");
	}

	#[test]
	fn upper_first_handles_empty_and_multibyte() {
		assert_eq!(upper_first(""), "");
		assert_eq!(upper_first("échec"), "Échec");
	}

	#[test]
	fn builtin_rejects_unknown_identifiers() {
		assert_eq!(
			ProviderType::builtin(" AD ").expect("Alias `AD` should resolve to LDAP."),
			ProviderType::LDAP
		);
		assert_eq!(
			ProviderType::builtin("custom").expect_err("Unknown providers must be rejected."),
			Error::UnknownProvider { value: "custom".into() }
		);
		assert!(ProviderType::raw("token").is_builtin());
		assert!(!ProviderType::raw("pass").is_builtin());
	}

	#[test]
	fn classes_lists_every_membership() {
		assert_eq!(
			ProviderType::LDAP.classes().collect::<Vec<_>>(),
			vec![ProviderClass::Remote, ProviderClass::TwoFactor]
		);
		assert_eq!(ProviderType::LINK.classes().count(), 0);
	}

	#[test]
	fn serde_writes_canonical_and_reads_through_normalizer() {
		let json = serde_json::to_string(&ProviderType::raw("password"))
			.expect("Provider should serialize successfully.");

		assert_eq!(json, "\"local\"");

		let parsed: ProviderType = serde_json::from_str("\" LDAP/AD \"")
			.expect("Provider should deserialize successfully.");

		assert_eq!(parsed, ProviderType::LDAP);
	}
}
