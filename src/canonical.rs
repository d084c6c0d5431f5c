//! Parameter canonicalization: merge, encode, sort, and join every signed parameter.

// self
use crate::{
	_prelude::*,
	encoding,
	params::{CollisionPolicy, ParamMap},
};

/// Builds the normalized parameter string (RFC 5849 §3.4.1.3.2).
///
/// `oauth_params` hold raw protocol values (`oauth_consumer_key`, `oauth_nonce`, ...). Every
/// name and value from the three sources is percent-encoded, merged in oauth → query → body
/// order according to `policy`, sorted byte-wise by encoded name, and joined as `name=value`
/// pairs with `&`.
pub fn canonicalize(
	oauth_params: &ParamMap,
	query_params: &ParamMap,
	body_params: &ParamMap,
	policy: CollisionPolicy,
) -> String {
	let encoded = [oauth_params, query_params, body_params]
		.into_iter()
		.flat_map(ParamMap::iter)
		.map(|(name, value)| {
			(encoding::encode(name).into_owned(), encoding::encode(value).into_owned())
		});
	let pairs: Vec<(String, String)> = match policy {
		CollisionPolicy::Overwrite => encoded.collect::<BTreeMap<_, _>>().into_iter().collect(),
		CollisionPolicy::RetainAll => {
			let mut pairs = encoded.collect::<Vec<_>>();

			pairs.sort_unstable();

			pairs
		},
	};

	join(&pairs)
}

fn join(pairs: &[(String, String)]) -> String {
	let mut buf = String::new();

	for (idx, (name, value)) in pairs.iter().enumerate() {
		if idx > 0 {
			buf.push('&');
		}

		buf.push_str(name);
		buf.push('=');
		buf.push_str(value);
	}

	buf
}
