//! Canonical string construction and HMAC-SHA256 signature computation.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::{UtcOffset, macros::format_description};
// self
use crate::{_prelude::*, auth::SecretKey, error::ConfigError, query::Params};

type HmacSha256 = Hmac<Sha256>;

/// `AWSAccessKeyId` parameter name.
pub const ACCESS_KEY_ID_PARAM: &str = "AWSAccessKeyId";
/// `SignatureMethod` parameter name.
pub const SIGNATURE_METHOD_PARAM: &str = "SignatureMethod";
/// `SignatureVersion` parameter name.
pub const SIGNATURE_VERSION_PARAM: &str = "SignatureVersion";
/// `Version` parameter name.
pub const VERSION_PARAM: &str = "Version";
/// `Timestamp` parameter name.
pub const TIMESTAMP_PARAM: &str = "Timestamp";
/// `Signature` parameter name.
pub const SIGNATURE_PARAM: &str = "Signature";
/// Signature method sent with every request.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";
/// Signature version sent with every request.
pub const SIGNATURE_VERSION: &str = "2";

/// Builds the newline-joined string the signature covers.
///
/// `params` must already be sorted and must not contain `Signature`.
pub fn canonical_string(host: &str, params: &Params) -> String {
	["POST", host, "/", &params.encode()].join("\n")
}

/// HMAC-SHA256 over `canonical`, keyed by `secret`, as standard padded base64.
pub fn compute_signature(secret: &SecretKey, canonical: &str) -> Result<String> {
	let mut mac =
		HmacSha256::new_from_slice(secret.expose()).map_err(|_| ConfigError::SigningKey)?;

	mac.update(canonical.as_bytes());

	Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Renders `at` (converted to UTC) as an RFC 3339 timestamp without fractional seconds.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String> {
	let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

	Ok(at.to_offset(UtcOffset::UTC).format(format).map_err(ConfigError::from)?)
}
