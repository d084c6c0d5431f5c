//! Protocol fields and the rendered `Authorization` header value.

// self
use crate::{_prelude::*, encoding, params::ParamMap, signature};

/// Protocol version advertised in every header.
pub const OAUTH_VERSION: &str = "1.0";

/// Per-request `oauth_*` values that are both signed and emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthFields {
	/// `oauth_consumer_key`.
	pub consumer_key: String,
	/// `oauth_nonce`.
	pub nonce: String,
	/// `oauth_timestamp`, in Unix seconds.
	pub timestamp: i64,
	/// `oauth_token`.
	pub token: String,
}
impl OAuthFields {
	/// Returns the six protocol parameters (raw, not yet encoded) that enter the base string.
	pub fn to_params(&self) -> ParamMap {
		ParamMap::from_iter([
			("oauth_consumer_key", self.consumer_key.clone()),
			("oauth_nonce", self.nonce.clone()),
			("oauth_signature_method", signature::SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp", self.timestamp.to_string()),
			("oauth_token", self.token.clone()),
			("oauth_version", OAUTH_VERSION.to_owned()),
		])
	}
}

/// Ready-to-attach `Authorization` header value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationHeader(String);
impl AuthorizationHeader {
	/// Returns the header value.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the header and returns the owned value.
	pub fn into_string(self) -> String {
		self.0
	}
}
impl AsRef<str> for AuthorizationHeader {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<AuthorizationHeader> for String {
	fn from(value: AuthorizationHeader) -> Self {
		value.0
	}
}
impl Debug for AuthorizationHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthorizationHeader").field(&self.0).finish()
	}
}
impl Display for AuthorizationHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Renders the header value for an already computed `signature`.
///
/// Fields appear in alphabetical order; receivers matching on the literal layout rely on it.
pub fn emit(fields: &OAuthFields, signature: &str) -> AuthorizationHeader {
	AuthorizationHeader(format!(
		"OAuth oauth_consumer_key=\"{}\", oauth_nonce=\"{}\", oauth_signature=\"{}\", \
		 oauth_signature_method=\"{}\", oauth_timestamp=\"{}\", oauth_token=\"{}\", \
		 oauth_version=\"{}\"",
		encoding::encode(&fields.consumer_key),
		encoding::encode(&fields.nonce),
		encoding::encode(signature),
		signature::SIGNATURE_METHOD,
		fields.timestamp,
		encoding::encode(&fields.token),
		OAUTH_VERSION,
	))
}

/// Signs `base_string` with `signing_key` and renders the header.
pub fn sign_and_emit(
	base_string: &str,
	signing_key: &str,
	fields: &OAuthFields,
) -> AuthorizationHeader {
	let signature = signature::sign(base_string, signing_key);

	emit(fields, &signature)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn fields() -> OAuthFields {
		OAuthFields {
			consumer_key: "ck".into(),
			nonce: "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".into(),
			timestamp: 1_000_000_000,
			token: "at".into(),
		}
	}

	#[test]
	fn emitted_fields_follow_fixed_order() {
		let header = emit(&fields(), "abc+/=");

		assert_eq!(
			header.as_str(),
			"OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\", \
			 oauth_signature=\"abc%2B%2F%3D\", oauth_signature_method=\"HMAC-SHA1\", \
			 oauth_timestamp=\"1000000000\", oauth_token=\"at\", oauth_version=\"1.0\""
		);
	}

	#[test]
	fn emitted_values_are_percent_encoded() {
		let mut fields = fields();

		fields.consumer_key = "key with space".into();
		fields.token = "tok~en".into();

		let header = emit(&fields, "sig");

		assert!(header.as_str().contains("oauth_consumer_key=\"key%20with%20space\""));
		assert!(header.as_str().contains("oauth_token=\"tok~en\""));
	}

	#[test]
	fn protocol_params_cover_six_fields() {
		let params = fields().to_params();

		assert_eq!(params.len(), 6);
		assert_eq!(params.get("oauth_signature_method"), Some("HMAC-SHA1"));
		assert_eq!(params.get("oauth_timestamp"), Some("1000000000"));
		assert_eq!(params.get("oauth_version"), Some("1.0"));
	}

	#[test]
	fn sign_and_emit_embeds_encoded_signature() {
		let header = sign_and_emit("GET&x", "cs&ats", &fields());

		assert!(header.to_string().contains("oauth_signature=\"A34m4OWbF6fWM9zD1btrP%2FnL%2Fis%3D\""));
	}
}
