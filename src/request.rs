//! Query requests and Signature Version 2 signing.
//!
//! A [`Request`] pairs an [`Endpoint`] and [`Credentials`] with caller parameters. Signing
//! consumes the request, so the signer's fixed parameters and the trailing `Signature` can only
//! ever be appended once.

pub mod signature;

pub use signature::*;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	endpoint::Endpoint,
	error::ConfigError,
	query::Params,
};

/// Parameter names owned by the signer; callers must not supply them.
pub const RESERVED_PARAMS: [&str; 6] = [
	ACCESS_KEY_ID_PARAM,
	SIGNATURE_METHOD_PARAM,
	SIGNATURE_VERSION_PARAM,
	VERSION_PARAM,
	TIMESTAMP_PARAM,
	SIGNATURE_PARAM,
];

/// Unsigned query request.
///
/// Cloning a request clones its parameters; clients keep one parameterless request as a
/// template and clone it for every call.
#[derive(Clone, Debug)]
pub struct Request {
	endpoint: Arc<Endpoint>,
	credentials: Arc<Credentials>,
	params: Params,
}
impl Request {
	/// Creates a request with no parameters.
	pub fn new(endpoint: impl Into<Arc<Endpoint>>, credentials: impl Into<Arc<Credentials>>) -> Self {
		Self { endpoint: endpoint.into(), credentials: credentials.into(), params: Params::new() }
	}

	/// Appends a caller parameter.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.params.add(key, value);
	}

	/// Builder-style variant of [`Request::add`].
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.add(key, value);

		self
	}

	/// Endpoint the request targets.
	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}

	/// Credentials the request is signed with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Caller parameters added so far.
	pub fn params(&self) -> &Params {
		&self.params
	}

	/// Signs the request with the current UTC time.
	pub fn sign(self) -> Result<SignedRequest> {
		self.sign_at(OffsetDateTime::now_utc())
	}

	/// Signs the request as of `timestamp`.
	///
	/// The timestamp is rendered once and the same text is both signed and emitted.
	pub fn sign_at(self, timestamp: OffsetDateTime) -> Result<SignedRequest> {
		if let Some(param) = self.params.iter().find(|p| RESERVED_PARAMS.contains(&p.key())) {
			return Err(ConfigError::ReservedParameter { key: param.key().to_owned() }.into());
		}

		let Self { endpoint, credentials, mut params } = self;
		let timestamp = format_timestamp(timestamp)?;

		params.add(ACCESS_KEY_ID_PARAM, credentials.access_key_id());
		params.add(SIGNATURE_METHOD_PARAM, SIGNATURE_METHOD);
		params.add(SIGNATURE_VERSION_PARAM, SIGNATURE_VERSION);
		params.add(VERSION_PARAM, endpoint.version());
		params.add(TIMESTAMP_PARAM, timestamp.as_str());
		params.sort_by_key();

		let canonical = canonical_string(endpoint.host(), &params);
		let signature = compute_signature(credentials.secret_key(), &canonical)?;

		params.add(SIGNATURE_PARAM, signature.as_str());

		Ok(SignedRequest { body: params.encode(), signature, timestamp, endpoint })
	}
}

/// Signed, ready-to-send request body.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	body: String,
	signature: String,
	timestamp: String,
	endpoint: Arc<Endpoint>,
}
impl SignedRequest {
	/// Form-encoded POST body, ending with the `Signature` parameter.
	pub fn body(&self) -> &str {
		&self.body
	}

	/// Base64 HMAC-SHA256 signature.
	pub fn signature(&self) -> &str {
		&self.signature
	}

	/// RFC 3339 timestamp that was signed.
	pub fn timestamp(&self) -> &str {
		&self.timestamp
	}

	/// Endpoint the request was signed for.
	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}

	/// Consumes the request, returning the POST body.
	pub fn into_body(self) -> String {
		self.body
	}
}
