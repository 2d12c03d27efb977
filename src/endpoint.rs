//! Endpoint descriptors: host, API version, and per-endpoint quirks.
//!
//! An [`Endpoint`] is validated once through [`EndpointBuilder`] and then shared read-only by
//! every request cloned from a client's template.

/// Builder API for assembling endpoints.
pub mod builder;
/// Endpoint-specific quirk toggles.
pub mod quirks;

pub use builder::*;
pub use quirks::*;

// self
use crate::_prelude::*;

/// Default EC2 endpoint host.
pub const EC2_HOST: &str = "ec2.amazonaws.com";
/// EC2 API version the bundled response shapes target.
pub const EC2_VERSION: &str = "2011-11-01";
/// Default SimpleDB endpoint host.
pub const SIMPLEDB_HOST: &str = "sdb.amazonaws.com";
/// SimpleDB API version.
pub const SIMPLEDB_VERSION: &str = "2009-04-15";

/// Immutable endpoint descriptor consumed by requests and clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
	host: String,
	version: String,
	url: Url,
	quirks: EndpointQuirks,
}
impl Endpoint {
	/// Creates a new builder for `host` speaking API `version`.
	pub fn builder(host: impl Into<String>, version: impl Into<String>) -> EndpointBuilder {
		EndpointBuilder::new(host, version)
	}

	/// The public EC2 endpoint.
	pub fn ec2() -> Result<Self, EndpointError> {
		Self::builder(EC2_HOST, EC2_VERSION).build()
	}

	/// The public SimpleDB endpoint.
	pub fn simpledb() -> Result<Self, EndpointError> {
		Self::builder(SIMPLEDB_HOST, SIMPLEDB_VERSION).build()
	}

	/// Host name (with optional port) used both as the request target and in the signature.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// API version sent as `Version`.
	pub fn version(&self) -> &str {
		&self.version
	}

	/// `https://{host}/` target for POST requests.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Endpoint-specific quirks.
	pub fn quirks(&self) -> &EndpointQuirks {
		&self.quirks
	}

	/// Content type the endpoint expects for signed form bodies.
	pub fn content_type(&self) -> &'static str {
		if self.quirks.utf8_charset {
			"application/x-www-form-urlencoded; charset=utf-8"
		} else {
			"application/x-www-form-urlencoded"
		}
	}
}
