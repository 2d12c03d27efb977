// self
use crate::{
	_prelude::*,
	endpoint::{Endpoint, EndpointQuirks},
};

/// Errors raised while constructing or validating endpoints.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum EndpointError {
	/// Host is mandatory.
	#[error("Endpoint host cannot be empty.")]
	EmptyHost,
	/// API version is mandatory.
	#[error("Endpoint API version cannot be empty.")]
	EmptyVersion,
	/// Host must be a bare authority, not a URL.
	#[error("Endpoint host must not include a scheme, path, query, or credentials: {host}.")]
	NotBareHost {
		/// Host string that failed validation.
		host: String,
	},
	/// Host could not be parsed as an HTTPS authority.
	#[error("Endpoint host is invalid: {host}.")]
	InvalidHost {
		/// Host string that failed validation.
		host: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Builder for [`Endpoint`] values.
#[derive(Debug)]
pub struct EndpointBuilder {
	/// Host name with optional port, e.g. `ec2.us-west-2.amazonaws.com`.
	pub host: String,
	/// API version string, e.g. `2011-11-01`.
	pub version: String,
	/// Endpoint-specific quirks.
	pub quirks: EndpointQuirks,
}
impl EndpointBuilder {
	/// Creates a new builder seeded with `host` and `version`.
	pub fn new(host: impl Into<String>, version: impl Into<String>) -> Self {
		Self { host: host.into(), version: version.into(), quirks: EndpointQuirks::default() }
	}

	/// Overrides the endpoint quirks.
	pub fn quirks(mut self, quirks: EndpointQuirks) -> Self {
		self.quirks = quirks;

		self
	}

	/// Toggles the `charset=utf-8` content type annotation.
	pub fn utf8_charset(mut self, enabled: bool) -> Self {
		self.quirks.utf8_charset = enabled;

		self
	}

	/// Consumes the builder and validates the resulting endpoint.
	///
	/// The stored host is the URL's normalized authority, so the signed host always matches the
	/// `Host` header sent on the wire (`EC2.amazonaws.com:443` becomes `ec2.amazonaws.com`).
	pub fn build(self) -> Result<Endpoint, EndpointError> {
		let raw = self.host.trim();
		let version = self.version.trim();

		if raw.is_empty() {
			return Err(EndpointError::EmptyHost);
		}
		if version.is_empty() {
			return Err(EndpointError::EmptyVersion);
		}
		if raw.contains(['/', '?', '#', '@']) || raw.chars().any(char::is_whitespace) {
			return Err(EndpointError::NotBareHost { host: raw.to_owned() });
		}

		let url = Url::parse(&format!("https://{raw}/"))
			.map_err(|source| EndpointError::InvalidHost { host: raw.to_owned(), source })?;
		let host = match (url.host_str(), url.port()) {
			(Some(name), Some(port)) => format!("{name}:{port}"),
			(Some(name), None) => name.to_owned(),
			(None, _) =>
				return Err(EndpointError::InvalidHost {
					host: raw.to_owned(),
					source: url::ParseError::EmptyHost,
				}),
		};

		Ok(Endpoint { host, version: version.to_owned(), url, quirks: self.quirks })
	}
}
