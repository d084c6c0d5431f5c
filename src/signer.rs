//! Signing facade that drives normalization, canonicalization, and header emission.
//!
//! [`Signer`] owns one credential set plus its injected clock, nonce generator, and collision
//! policy. Each [`Signer::sign`] call builds every intermediate value (base URL, parameter
//! string, base string, signing key) as locals and discards them once the header is rendered,
//! so a single signer can be shared across threads without locking.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	canonical,
	header::{self, AuthorizationHeader, OAuthFields},
	normalize::{self, NormalizedRequest},
	obs::{self, SignOutcome, SignSpan},
	params::CollisionPolicy,
	runtime::{Clock, HexNonceGenerator, NonceGenerator, SystemClock},
	signature,
};

/// Signs `request` with `credentials` using the default clock, nonce generator, and policy.
///
/// Pin [`SigningRequest::timestamp`] and [`SigningRequest::nonce`] for reproducible output.
pub fn generate_oauth_header(
	credentials: &Credentials,
	request: &SigningRequest,
) -> Result<AuthorizationHeader> {
	Signer::new(credentials.clone()).sign(request)
}

/// Request details fed into a signing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRequest {
	/// Target URL, query string included.
	pub url: String,
	/// HTTP method; uppercased before signing.
	pub method: String,
	/// Optional `application/x-www-form-urlencoded` body.
	pub body: Option<String>,
	/// Explicit `oauth_timestamp`; the signer's clock is used when unset.
	pub timestamp: Option<i64>,
	/// Explicit `oauth_nonce`; the signer's generator is used when unset.
	pub nonce: Option<String>,
}
impl SigningRequest {
	const DEFAULT_METHOD: &'static str = "GET";

	/// Creates a `GET` request for `url`.
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			method: Self::DEFAULT_METHOD.to_owned(),
			body: None,
			timestamp: None,
			nonce: None,
		}
	}

	/// Creates a `GET` request from a parsed [`Url`].
	pub fn from_url(url: &Url) -> Self {
		Self::new(url.as_str())
	}

	/// Overrides the HTTP method.
	pub fn method(mut self, method: impl Into<String>) -> Self {
		self.method = method.into();

		self
	}

	/// Attaches a URL-encoded form body whose parameters are signed.
	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Pins `oauth_timestamp` (Unix seconds).
	pub fn timestamp(mut self, timestamp: i64) -> Self {
		self.timestamp = Some(timestamp);

		self
	}

	/// Pins `oauth_nonce`.
	pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
		self.nonce = Some(nonce.into());

		self
	}
}

/// Injected collaborators and policy applied by a [`Signer`].
#[derive(Clone)]
pub struct SignerConfig {
	/// Clock used when the request leaves `timestamp` unset.
	pub clock: Arc<dyn Clock>,
	/// Generator used when the request leaves `nonce` unset.
	pub nonce_generator: Arc<dyn NonceGenerator>,
	/// Treatment of parameter names that appear more than once.
	pub collision_policy: CollisionPolicy,
}
impl SignerConfig {
	/// Replaces the clock.
	pub fn with_clock(mut self, clock: impl Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Replaces the nonce generator.
	pub fn with_nonce_generator(mut self, generator: impl NonceGenerator) -> Self {
		self.nonce_generator = Arc::new(generator);

		self
	}

	/// Overrides the collision policy (defaults to [`CollisionPolicy::Overwrite`]).
	pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
		self.collision_policy = policy;

		self
	}
}
impl Default for SignerConfig {
	fn default() -> Self {
		Self {
			clock: Arc::new(SystemClock),
			nonce_generator: Arc::new(HexNonceGenerator),
			collision_policy: CollisionPolicy::default(),
		}
	}
}
impl Debug for SignerConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SignerConfig")
			.field("collision_policy", &self.collision_policy)
			.finish_non_exhaustive()
	}
}

/// Produces OAuth 1.0a HMAC-SHA1 `Authorization` headers for one credential set.
#[derive(Clone, Debug)]
pub struct Signer {
	/// Credentials used for every request.
	pub credentials: Credentials,
	/// Clock, nonce generator, and collision policy.
	pub config: SignerConfig,
}
impl Signer {
	/// Creates a signer backed by the system clock and random hex nonces.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_config(credentials, SignerConfig::default())
	}

	/// Creates a signer with caller-provided collaborators.
	pub fn with_config(credentials: Credentials, config: SignerConfig) -> Self {
		Self { credentials, config }
	}

	/// Signs one request.
	///
	/// Fails only when the query string or body is malformed; nothing is emitted in that case.
	pub fn sign(&self, request: &SigningRequest) -> Result<AuthorizationHeader> {
		let _span = SignSpan::new("sign", &request.method).entered();

		obs::record_sign_outcome(SignOutcome::Attempt);

		match self.sign_inner(request) {
			Ok(header) => {
				obs::record_sign_outcome(SignOutcome::Success);

				Ok(header)
			},
			Err(e) => {
				obs::log_sign_failure(&e);
				obs::record_sign_outcome(SignOutcome::Failure);

				Err(e)
			},
		}
	}

	fn sign_inner(&self, request: &SigningRequest) -> Result<AuthorizationHeader> {
		let NormalizedRequest { base_url, query_params, body_params } =
			normalize::normalize(&request.url, request.body.as_deref())?;
		let fields = OAuthFields {
			consumer_key: self.credentials.consumer_key.clone(),
			nonce: request.nonce.clone().unwrap_or_else(|| self.config.nonce_generator.generate()),
			timestamp: request.timestamp.unwrap_or_else(|| self.config.clock.unix_timestamp()),
			token: self.credentials.access_token.clone(),
		};
		let parameter_string = canonical::canonicalize(
			&fields.to_params(),
			&query_params,
			&body_params,
			self.config.collision_policy,
		);
		let base_string = signature::build_base(&request.method, &base_url, &parameter_string);
		let signing_key = signature::build_signing_key(
			self.credentials.consumer_secret.expose(),
			self.credentials.access_token_secret.expose(),
		);

		Ok(header::sign_and_emit(&base_string, &signing_key, &fields))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::{TEST_NONCE, TEST_TIMESTAMP, build_deterministic_signer, test_credentials},
		runtime::{FixedClock, FixedNonce},
	};

	const SAMPLE_HEADER: &str = "OAuth oauth_consumer_key=\"ck\", \
	                             oauth_nonce=\"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\", \
	                             oauth_signature=\"fcf3U9wdP8JF0gnIJhoAIS4T7Ks%3D\", \
	                             oauth_signature_method=\"HMAC-SHA1\", \
	                             oauth_timestamp=\"1000000000\", oauth_token=\"at\", \
	                             oauth_version=\"1.0\"";

	#[test]
	fn sample_vector_matches_reference() {
		let request = SigningRequest::new("http://example.com/resource?foo=bar")
			.timestamp(TEST_TIMESTAMP)
			.nonce(TEST_NONCE);
		let header = generate_oauth_header(&test_credentials(), &request)
			.expect("Sample vector should sign successfully.");

		assert_eq!(header.as_str(), SAMPLE_HEADER);
	}

	#[test]
	fn injected_providers_fill_missing_values() {
		let signer = build_deterministic_signer(test_credentials());
		let header = signer
			.sign(&SigningRequest::new("http://example.com/resource?foo=bar"))
			.expect("Deterministic signer should sign successfully.");

		assert_eq!(header.as_str(), SAMPLE_HEADER);
	}

	#[test]
	fn explicit_values_override_providers() {
		let config = SignerConfig::default()
			.with_clock(FixedClock::new(1))
			.with_nonce_generator(FixedNonce::new("ignored"));
		let signer = Signer::with_config(test_credentials(), config);
		let request = SigningRequest::new("http://example.com/resource?foo=bar")
			.timestamp(TEST_TIMESTAMP)
			.nonce(TEST_NONCE);
		let header = signer.sign(&request).expect("Request should sign successfully.");

		assert_eq!(header.as_str(), SAMPLE_HEADER);
	}

	#[test]
	fn method_is_case_normalized() {
		let signer = build_deterministic_signer(test_credentials());
		let lower = signer
			.sign(&SigningRequest::new("http://example.com/resource?foo=bar").method("get"))
			.expect("Lowercase method should sign.");

		assert_eq!(lower.as_str(), SAMPLE_HEADER);
	}

	#[test]
	fn default_nonce_and_timestamp_vary_per_call() {
		let signer = Signer::new(test_credentials());
		let request = SigningRequest::new("http://example.com/resource");
		let first = signer.sign(&request).expect("First request should sign.");
		let second = signer.sign(&request).expect("Second request should sign.");

		assert_ne!(first, second, "Fresh nonces must produce distinct headers.");
	}

	#[test]
	fn collision_policy_changes_signature() {
		let url = "http://example.com/r?b=2&a=3&a=1";
		let request = SigningRequest::new(url).method("POST").body("a=2");
		let overwrite = build_deterministic_signer(test_credentials())
			.sign(&request)
			.expect("Overwrite policy should sign.");
		let mut retain = build_deterministic_signer(test_credentials());

		retain.config = retain.config.with_collision_policy(CollisionPolicy::RetainAll);

		let retain = retain.sign(&request).expect("Retain policy should sign.");

		assert!(overwrite.as_str().contains("oauth_signature=\"PoQ5XtWNSmzpmr7GAeVpn080ErM%3D\""));
		assert!(retain.as_str().contains("oauth_signature=\"GFDcOEf1Rbt9im6VMaNwtdhVHbg%3D\""));
	}

	#[test]
	fn malformed_input_yields_no_header() {
		let signer = build_deterministic_signer(test_credentials());

		assert!(matches!(
			signer.sign(&SigningRequest::new("http://example.com/?foo")),
			Err(Error::MalformedQuery { .. })
		));
		assert!(matches!(
			signer.sign(&SigningRequest::new("http://example.com/").method("POST").body("a=1&b")),
			Err(Error::MalformedBody { .. })
		));
	}

	#[test]
	fn parsed_urls_are_accepted() {
		let url = Url::parse("http://example.com/resource?foo=bar").expect("Fixture URL parses.");
		let header = build_deterministic_signer(test_credentials())
			.sign(&SigningRequest::from_url(&url))
			.expect("Parsed URL should sign.");

		assert_eq!(header.as_str(), SAMPLE_HEADER);
	}
}
