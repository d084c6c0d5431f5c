//! OAuth 1.0a HMAC-SHA1 request signing: turn credentials plus a URL (and optional form body)
//! into a ready-to-attach `Authorization` header with deterministic, bit-exact base strings.
//!
//! ```
//! use oauth1_header::{
//! 	auth::Credentials,
//! 	signer::{SigningRequest, generate_oauth_header},
//! };
//!
//! let credentials = Credentials::new("ck", "cs", "at", "ats").unwrap();
//! let request = SigningRequest::new("http://example.com/resource?foo=bar")
//! 	.timestamp(1_000_000_000)
//! 	.nonce("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
//! let header = generate_oauth_header(&credentials, &request).unwrap();
//!
//! assert!(header.as_str().contains("oauth_signature=\"fcf3U9wdP8JF0gnIJhoAIS4T7Ks%3D\""));
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod canonical;
pub mod encoding;
pub mod error;
pub mod ext;
pub mod header;
pub mod normalize;
pub mod obs;
pub mod params;
pub mod runtime;
pub mod signature;
pub mod signer;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Credentials,
		runtime::{FixedClock, FixedNonce},
		signer::{Signer, SignerConfig},
	};

	/// Timestamp shared by the deterministic fixtures.
	pub const TEST_TIMESTAMP: i64 = 1_000_000_000;
	/// Nonce shared by the deterministic fixtures.
	pub const TEST_NONCE: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

	/// Builds the `ck`/`cs`/`at`/`ats` credential fixture.
	pub fn test_credentials() -> Credentials {
		Credentials::new("ck", "cs", "at", "ats")
			.expect("Credential fixture should be considered valid.")
	}

	/// Builds a [`Signer`] pinned to [`TEST_TIMESTAMP`] and [`TEST_NONCE`].
	pub fn build_deterministic_signer(credentials: Credentials) -> Signer {
		let config = SignerConfig::default()
			.with_clock(FixedClock::new(TEST_TIMESTAMP))
			.with_nonce_generator(FixedNonce::new(TEST_NONCE));

		Signer::with_config(credentials, config)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
