//! Input normalization: split the target URL and optional form body into parameter sets.

// self
use crate::{_prelude::*, encoding, params::ParamMap};

/// Result of normalizing a target URL and optional body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedRequest {
	/// URL with the query string removed.
	pub base_url: String,
	/// Decoded query parameters, duplicates included.
	pub query_params: ParamMap,
	/// Decoded body parameters, duplicates included.
	pub body_params: ParamMap,
}

/// Splits `url` into its base URL and query parameters and decodes `body` as a form body.
pub fn normalize(url: &str, body: Option<&str>) -> Result<NormalizedRequest> {
	let base_url = base_url(url).to_owned();
	let query_params = parse_query(url)?;
	let body_params = match body {
		Some(body) => parse_body(body)?,
		None => ParamMap::new(),
	};

	Ok(NormalizedRequest { base_url, query_params, body_params })
}

/// Returns the portion of `url` before the first `?`, or the whole URL.
pub fn base_url(url: &str) -> &str {
	url.split_once('?').map_or(url, |(base, _)| base)
}

/// Parses the query component of `url`.
///
/// The component ends at an optional `#` fragment. Each `&`-separated segment is split on its
/// first `=`, and names and values are form-decoded.
pub fn parse_query(url: &str) -> Result<ParamMap> {
	let Some((_, rest)) = url.split_once('?') else {
		return Ok(ParamMap::new());
	};
	let query = rest.split_once('#').map_or(rest, |(query, _)| query);
	let mut params = ParamMap::new();

	if query.is_empty() {
		return Ok(params);
	}

	for segment in query.split('&') {
		let (name, value) = segment
			.split_once('=')
			.ok_or_else(|| Error::MalformedQuery { segment: segment.to_owned() })?;

		params.push(encoding::form_decode(name)?, encoding::form_decode(value)?);
	}

	Ok(params)
}

/// Decodes a URL-encoded form body.
///
/// `+` is turned into a space and the whole body is percent-decoded before being split on `&`
/// and the first `=` of each segment. A supplied body must hold at least one `name=value` pair, so
/// an empty body is rejected; pass no body at all to sign without body parameters.
pub fn parse_body(body: &str) -> Result<ParamMap> {
	let mut params = ParamMap::new();
	let decoded = encoding::form_decode(body)?;

	for segment in decoded.split('&') {
		let (name, value) = segment
			.split_once('=')
			.ok_or_else(|| Error::MalformedBody { segment: segment.to_owned() })?;

		params.push(name, value);
	}

	Ok(params)
}
