// crates.io
use rand::Rng;

/// Number of random bytes behind each generated nonce (two hex digits per byte).
pub const NONCE_BYTES: usize = 16;

/// Source of `oauth_nonce` values.
pub trait NonceGenerator
where
	Self: 'static + Send + Sync,
{
	/// Returns a token that must not repeat for the same credentials and timestamp.
	fn generate(&self) -> String;
}

/// Draws 16 bytes from the thread-local RNG and renders them as 32 uppercase hex digits.
///
/// Uniqueness is the only requirement; callers needing a vetted CSPRNG supply their own nonce.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexNonceGenerator;
impl NonceGenerator for HexNonceGenerator {
	fn generate(&self) -> String {
		let bytes: [u8; NONCE_BYTES] = rand::rng().random();

		hex::encode_upper(bytes)
	}
}

/// Generator that always returns the same nonce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedNonce(String);
impl FixedNonce {
	/// Wraps the nonce to hand out.
	pub fn new(nonce: impl Into<String>) -> Self {
		Self(nonce.into())
	}
}
impl NonceGenerator for FixedNonce {
	fn generate(&self) -> String {
		self.0.clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn hex_nonces_use_uppercase_alphabet() {
		let nonce = HexNonceGenerator.generate();

		assert_eq!(nonce.len(), 32);
		assert!(nonce.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')), "Bad nonce: {nonce}.");
	}

	#[test]
	fn hex_nonces_do_not_repeat() {
		let first = HexNonceGenerator.generate();
		let second = HexNonceGenerator.generate();

		assert_ne!(first, second);
	}

	#[test]
	fn fixed_nonce_repeats() {
		let generator = FixedNonce::new("abc");

		assert_eq!(generator.generate(), "abc");
		assert_eq!(generator.generate(), "abc");
	}
}
