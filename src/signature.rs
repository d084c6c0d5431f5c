//! Signature base string, signing key, and HMAC-SHA1 signature (RFC 5849 §3.4).

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::encoding;

type HmacSha1 = Hmac<Sha1>;

/// The only signature method this crate produces.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Assembles `METHOD&enc(base_url)&enc(parameter_string)`.
///
/// The method is uppercased; the base URL and parameter string are percent-encoded as opaque
/// strings.
pub fn build_base(method: &str, base_url: &str, parameter_string: &str) -> String {
	format!(
		"{}&{}&{}",
		method.to_ascii_uppercase(),
		encoding::encode(base_url),
		encoding::encode(parameter_string)
	)
}

/// Derives `enc(consumer_secret)&enc(token_secret)`.
pub fn build_signing_key(consumer_secret: &str, token_secret: &str) -> String {
	format!("{}&{}", encoding::encode(consumer_secret), encoding::encode(token_secret))
}

/// Computes the base64 (standard alphabet, padded) HMAC-SHA1 of `base_string` under
/// `signing_key`.
pub fn sign(base_string: &str, signing_key: &str) -> String {
	// HMAC pads or hashes the key to the block size, so any key length is accepted.
	let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
		.expect("HMAC-SHA1 should accept a key of any length.");

	mac.update(base_string.as_bytes());

	STANDARD.encode(mac.finalize().into_bytes())
}
