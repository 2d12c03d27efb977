//! Ordered key/value parameter collection used to build request bodies.

// self
use crate::{_prelude::*, query::encode};

/// Single query parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
	key: String,
	value: String,
}
impl Param {
	/// Creates a new parameter.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: value.into() }
	}

	/// Parameter name.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Raw (unencoded) parameter value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Renders `key=value` with the value percent-encoded.
	pub fn encode(&self) -> String {
		format!("{}={}", self.key, encode(&self.value))
	}
}

/// Parameter list whose order only matters once it has been sorted.
///
/// [`Params::add`] never deduplicates; supplying the same key twice is a caller error that the
/// collection does not detect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);
impl Params {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a parameter.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.push(Param::new(key, value));
	}

	/// Stable, byte-wise ascending sort on parameter names.
	pub fn sort_by_key(&mut self) {
		self.0.sort_by(|a, b| a.key.cmp(&b.key));
	}

	/// Joins `key=value` pairs with `&` in the current order.
	pub fn encode(&self) -> String {
		self.0.iter().map(Param::encode).collect::<Vec<_>>().join("&")
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|p| p.key == key).map(Param::value)
	}

	/// Iterates over the parameters in their current order.
	pub fn iter(&self) -> impl Iterator<Item = &Param> {
		self.0.iter()
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the collection holds no parameters.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| Param::new(k, v)).collect())
	}
}
impl<K, V> Extend<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (K, V)>,
	{
		self.0.extend(iter.into_iter().map(|(k, v)| Param::new(k, v)));
	}
}
impl Display for Params {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.encode())
	}
}
