//! Canonical authentication provider identifiers: alias-tolerant normalization, capability
//! classification, and display labels in one small value type.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		borrow::Cow,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use provider::{
	BUILTIN_PROVIDERS, CLIENT_PROVIDERS, LOCAL_PROVIDERS, REMOTE_PROVIDERS, TWO_FACTOR_PROVIDERS,
	ProviderClass, ProviderType, clean_type_lower, provider,
};
#[cfg(test)] use serde_json as _;
