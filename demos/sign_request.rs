//! Signs a form-encoded status update and prints the resulting `Authorization` header.
//!
//! Credentials are read as JSON from `OAUTH1_CREDENTIALS` (falling back to the published
//! Twitter documentation values), the request is built with reqwest, and the header is attached
//! without sending anything over the network.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use oauth1_header::{
	auth::Credentials,
	ext::{FORM_CONTENT_TYPE, RequestSignerExt},
	reqwest::{
		Client,
		header::{AUTHORIZATION, CONTENT_TYPE},
	},
	signer::Signer,
};

const FALLBACK_CREDENTIALS: &str = r#"{
	"consumer_key": "xvz1evFS4wEEPTGEFPHBog",
	"consumer_secret": "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
	"access_token": "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
	"access_token_secret": "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"
}"#;

fn main() -> Result<()> {
	color_eyre::install()?;

	let json = env::var("OAUTH1_CREDENTIALS").unwrap_or_else(|_| FALLBACK_CREDENTIALS.into());
	let credentials = Credentials::from_json_str(&json)?;
	let signer = Signer::new(credentials);
	let request = Client::new()
		.post("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
		.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
		.body("status=Hello+Ladies+%2B+Gentlemen%2C+a+signed+OAuth+request%21")
		.build()?;
	let request = signer.attach_authorization(request)?;

	if let Some(value) = request.headers().get(AUTHORIZATION) {
		println!("Authorization: {}", value.to_str()?);
	}

	Ok(())
}
