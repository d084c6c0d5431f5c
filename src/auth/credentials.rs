//! Consumer and access-token credentials supplied by the caller.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// OAuth 1.0a credential set used for one or more signing operations.
///
/// Keys are public identifiers and appear in the emitted header; secrets only ever feed the
/// signing key and stay redacted in formatter output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Consumer (application) key.
	pub consumer_key: String,
	/// Consumer (application) secret.
	pub consumer_secret: Secret,
	/// Access token issued to the user.
	pub access_token: String,
	/// Secret paired with the access token.
	pub access_token_secret: Secret,
}
impl Credentials {
	/// Builds a credential set after checking that no field is empty.
	pub fn new(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<String>,
		access_token: impl Into<String>,
		access_token_secret: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let credentials = Self {
			consumer_key: consumer_key.into(),
			consumer_secret: Secret::new(consumer_secret),
			access_token: access_token.into(),
			access_token_secret: Secret::new(access_token_secret),
		};

		credentials.validate()?;

		Ok(credentials)
	}

	/// Parses credentials from a JSON object with the four snake_case fields.
	///
	/// Parse failures report the offending path via `serde_path_to_error`.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);
		let credentials: Self = serde_path_to_error::deserialize(&mut de)?;

		credentials.validate()?;

		Ok(credentials)
	}

	/// Rejects empty fields.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let fields = [
			("consumer_key", self.consumer_key.is_empty()),
			("consumer_secret", self.consumer_secret.is_empty()),
			("access_token", self.access_token.is_empty()),
			("access_token_secret", self.access_token_secret.is_empty()),
		];

		for (field, empty) in fields {
			if empty {
				return Err(ConfigError::EmptyCredential { field });
			}
		}

		Ok(())
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &self.consumer_secret)
			.field("access_token", &self.access_token)
			.field("access_token_secret", &self.access_token_secret)
			.finish()
	}
}
