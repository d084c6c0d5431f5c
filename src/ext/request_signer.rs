//! Request signing contracts that let downstream crates attach OAuth 1.0a headers to
//! arbitrary HTTP clients.

// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	Request,
	header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
// self
#[cfg(feature = "reqwest")]
use crate::{
	_prelude::*,
	error::ConfigError,
	signer::{Signer, SigningRequest},
};

/// Media type whose body parameters take part in the signature.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Describes how to sign an outbound request and attach the resulting `Authorization` header
/// without constraining the HTTP client type.
pub trait RequestSignerExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes the provided request, signs it, and returns it with the header attached.
	fn attach_authorization(&self, request: Request) -> Result<Request, Error>;
}

#[cfg(feature = "reqwest")]
impl RequestSignerExt<Request, Error> for Signer {
	fn attach_authorization(&self, mut request: Request) -> Result<Request> {
		let mut signing = SigningRequest::from_url(request.url()).method(request.method().as_str());

		if is_form(&request) {
			let bytes = request
				.body()
				.map(|body| body.as_bytes().ok_or(ConfigError::StreamingBody))
				.transpose()?;

			if let Some(bytes) = bytes {
				signing = signing.body(std::str::from_utf8(bytes)?);
			}
		}

		let header = self.sign(&signing)?;
		let value = HeaderValue::from_str(header.as_str()).map_err(ConfigError::from)?;

		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(request)
	}
}

#[cfg(feature = "reqwest")]
fn is_form(request: &Request) -> bool {
	request
		.headers()
		.get(CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(';').next())
		.is_some_and(|media| media.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}
