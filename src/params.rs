//! Strongly typed request parameters and the policy for merging colliding names.

// std
use std::slice::Iter;
// self
use crate::{_prelude::*, encoding};

/// How the canonicalizer treats the same encoded name arriving from more than one place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
	/// Later writes replace earlier ones in oauth → query → body order.
	///
	/// This mirrors the widely deployed "simple OAuth" behavior and is kept for output
	/// compatibility; strict RFC 5849 servers expect [`CollisionPolicy::RetainAll`].
	#[default]
	Overwrite,
	/// Every occurrence is kept and pairs are sorted by name, then value.
	RetainAll,
}
impl CollisionPolicy {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CollisionPolicy::Overwrite => "overwrite",
			CollisionPolicy::RetainAll => "retain_all",
		}
	}
}
impl Display for CollisionPolicy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Insertion-ordered list of decoded name/value pairs.
///
/// Duplicate names are preserved; ordering is only imposed later, during canonicalization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamMap(Vec<(String, String)>);
impl ParamMap {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a pair, keeping any earlier occurrence of the same name.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.push((name.into(), value.into()));
	}

	/// Number of stored pairs, duplicates included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no pairs are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the last value written for `name`, matching overwrite semantics.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().rev().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// Iterates over every value written for `name` in insertion order.
	pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
		self.0.iter().filter(move |(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// Iterates over pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Serializes the pairs as a query string, percent-encoding names and values.
	///
	/// Parsing the output again yields an equal map.
	pub fn to_query_string(&self) -> String {
		let mut buf = String::new();

		for (idx, (name, value)) in self.0.iter().enumerate() {
			if idx > 0 {
				buf.push('&');
			}

			buf.push_str(&encoding::encode(name));
			buf.push('=');
			buf.push_str(&encoding::encode(value));
		}

		buf
	}
}
impl<K, V> FromIterator<(K, V)> for ParamMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
	}
}
impl<'a> IntoIterator for &'a ParamMap {
	type IntoIter = Iter<'a, (String, String)>;
	type Item = &'a (String, String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
