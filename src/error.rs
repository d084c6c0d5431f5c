//! Crate-level error types shared by the normalizer, signer, and request adapters.

// std
use std::str::Utf8Error;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical signing error exposed by public APIs.
///
/// Every variant is raised before any signature material is computed, so a failure never
/// yields a partial header.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A query-string segment lacks the `=` separator.
	#[error("Query segment `{segment}` is missing an `=` separator.")]
	MalformedQuery {
		/// Offending raw segment.
		segment: String,
	},
	/// A decoded body segment lacks the `=` separator.
	#[error("Body segment `{segment}` is missing an `=` separator.")]
	MalformedBody {
		/// Offending decoded segment.
		segment: String,
	},
	/// Percent-decoded input is not valid UTF-8.
	#[error("Percent-decoded input is not valid UTF-8.")]
	Encoding {
		/// Underlying UTF-8 validation failure.
		#[source]
		source: Utf8Error,
	},
}
impl From<Utf8Error> for Error {
	fn from(source: Utf8Error) -> Self {
		Self::Encoding { source }
	}
}

/// Configuration and validation failures raised before signing starts.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A credential field was empty.
	#[error("Credential field `{field}` cannot be empty.")]
	EmptyCredential {
		/// Name of the empty field.
		field: &'static str,
	},
	/// Credential JSON could not be parsed.
	#[error("Credentials could not be parsed.")]
	CredentialsParse {
		/// Structured parsing failure including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The rendered header could not be stored as an HTTP header value.
	#[cfg(feature = "reqwest")]
	#[error("Authorization header value is invalid.")]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	/// A form-encoded request carries a streaming body that cannot be read for signing.
	#[cfg(feature = "reqwest")]
	#[error("Form-encoded request body is a stream and cannot be signed.")]
	StreamingBody,
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::CredentialsParse { source }
	}
}
