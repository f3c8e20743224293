//! Input cleaning and alias resolution for provider identifiers.

// self
use crate::{
	obs::{self, NormalizeOutcome},
	provider::ProviderType,
};

const TYPE_MAX_CHARS: usize = 64;
const UNSAFE_CHARS: &[char] = &['`', '"', '\'', '<', '>', '{', '}', '$'];

/// Normalizes loosely formatted input into a provider identifier.
///
/// The input is cleaned with [`clean_type_lower`] and recognized aliases are mapped onto their
/// canonical identifier. Anything else is kept verbatim, so the function never fails:
///
/// | input | result |
/// |---|---|
/// | `""`, `-`, `null`, `nil`, `0`, `false` | `default` |
/// | `token`, `url` | `link` |
/// | `pass`, `passwd`, `password` | `local` |
/// | `ldap`, `ad`, `ldap/ad`, `ldap\ad` | `ldap` |
/// | `oauth2`, `client credentials` | `client_credentials` |
pub fn provider(value: &str) -> ProviderType {
	let (resolved, outcome) = classify(&clean_type_lower(value));

	obs::observe_normalization(value, resolved.as_str(), outcome);

	resolved
}

/// Strips control and markup characters, trims, clips to 64 characters, and lower-cases.
///
/// Slashes and backslashes are kept so directory aliases such as `ldap\ad` survive.
pub fn clean_type_lower(value: &str) -> String {
	let kept = value
		.chars()
		.filter(|c| !c.is_control() && !UNSAFE_CHARS.contains(c))
		.collect::<String>();

	kept.trim().chars().take(TYPE_MAX_CHARS).collect::<String>().to_lowercase()
}

fn classify(cleaned: &str) -> (ProviderType, NormalizeOutcome) {
	match resolve_alias(cleaned) {
		Some(canonical) if canonical.as_str() == cleaned => (canonical, NormalizeOutcome::Canonical),
		Some(canonical) => (canonical, NormalizeOutcome::Alias),
		None => {
			let resolved = ProviderType::raw(cleaned);
			let outcome = if resolved.is_builtin() {
				NormalizeOutcome::Canonical
			} else {
				NormalizeOutcome::Unknown
			};

			(resolved, outcome)
		},
	}
}

fn resolve_alias(cleaned: &str) -> Option<ProviderType> {
	let canonical = match cleaned {
		"" | "-" | "null" | "nil" | "0" | "false" => ProviderType::DEFAULT,
		"token" | "url" => ProviderType::LINK,
		"pass" | "passwd" | "password" => ProviderType::LOCAL,
		"ldap" | "ad" | "ldap/ad" | "ldap\\ad" => ProviderType::LDAP,
		"oauth2" | "client credentials" => ProviderType::CLIENT_CREDENTIALS,
		_ => return None,
	};

	Some(canonical)
}
