//! Secret access key wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted secret access key keeping key material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);
impl SecretKey {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw key bytes used as the HMAC key. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		self.0.as_bytes()
	}

	/// Whether the secret holds no key material.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl Debug for SecretKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SecretKey").field(&"<redacted>").finish()
	}
}
impl Display for SecretKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
