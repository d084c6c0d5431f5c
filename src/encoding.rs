//! OAuth percent-encoding (RFC 5849 §3.6) and the decoders used by the input normalizer.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
// self
use crate::_prelude::*;

/// Everything outside the RFC 3986 unreserved set `A-Z a-z 0-9 - . _ ~`.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `input` with OAuth's PCT-ENCODE rule.
///
/// Unreserved characters pass through, space becomes `%20` (never `+`), `~` stays literal, and
/// every other UTF-8 byte becomes `%XX` with uppercase hex digits.
pub fn encode(input: &str) -> Cow<'_, str> {
	utf8_percent_encode(input, OAUTH_ENCODE_SET).into()
}

/// Decodes an `application/x-www-form-urlencoded` component: `+` becomes a space, then
/// `%XX` sequences are decoded.
pub fn form_decode(input: &str) -> Result<String> {
	let spaced = input.replace('+', " ");

	percent_decode(&spaced)
}

/// Decodes `%XX` sequences, failing when the resulting bytes are not UTF-8.
///
/// Malformed escapes such as `%G1` are passed through untouched.
pub fn percent_decode(input: &str) -> Result<String> {
	let decoded = percent_decode_str(input).decode_utf8()?;

	Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unreserved_characters_pass_through() {
		let unreserved = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

		assert_eq!(encode(unreserved), unreserved);
	}

	#[test]
	fn reserved_characters_use_uppercase_hex() {
		assert_eq!(encode(" "), "%20");
		assert_eq!(encode("~"), "~");
		assert_eq!(encode("+"), "%2B");
		assert_eq!(encode("&="), "%26%3D");
		assert_eq!(encode("http://a/b"), "http%3A%2F%2Fa%2Fb");
		assert_eq!(encode("Ladies + Gentlemen!"), "Ladies%20%2B%20Gentlemen%21");
		assert_eq!(encode("*'()"), "%2A%27%28%29");
	}

	#[test]
	fn non_ascii_is_encoded_per_utf8_byte() {
		assert_eq!(encode("é"), "%C3%A9");
		assert_eq!(encode("☃"), "%E2%98%83");
	}

	#[test]
	fn form_decode_handles_plus_and_escapes() {
		assert_eq!(form_decode("hello+world").expect("Plus should decode."), "hello world");
		assert_eq!(form_decode("a%2Bb").expect("Escaped plus should decode."), "a+b");
		assert_eq!(percent_decode("100%").expect("Dangling percent passes through."), "100%");
	}

	#[test]
	fn invalid_utf8_is_rejected() {
		let err = percent_decode("%FF%FE").expect_err("Invalid UTF-8 must be rejected.");

		assert!(matches!(err, Error::Encoding { .. }));
	}
}
