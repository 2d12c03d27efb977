//! Client-level error types shared across signing, transport, and decoding.
//!
//! The three failure kinds a call can produce never overlap: [`Error::Transport`] means the
//! exchange did not complete, [`Error::Service`] means the endpoint answered and rejected the
//! request, and [`Error::Decode`] means the endpoint answered with a body we could not read.

// std
use std::fmt::Write as _;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeouts).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The endpoint rejected the request with a structured error envelope.
	#[error("{envelope}")]
	Service {
		/// HTTP status code returned alongside the envelope.
		status: u16,
		/// Decoded envelope listing every reported error.
		envelope: ErrorEnvelope,
	},
	/// The response body could not be decoded into the expected shape.
	#[error("Response body with HTTP status {status} could not be decoded.")]
	Decode {
		/// HTTP status code of the undecodable response.
		status: u16,
		/// Underlying decoding failure.
		#[source]
		source: DecodeError,
	},
}
impl Error {
	/// Returns the service error envelope when the endpoint rejected the request.
	pub fn envelope(&self) -> Option<&ErrorEnvelope> {
		match self {
			Self::Service { envelope, .. } => Some(envelope),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before anything is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Endpoint definition failed validation.
	#[error(transparent)]
	Endpoint(#[from] crate::endpoint::EndpointError),
	/// Credentials failed validation.
	#[error(transparent)]
	Credentials(#[from] crate::auth::CredentialsError),
	/// Caller supplied a parameter name that the signer owns.
	#[error("Parameter `{key}` is reserved for request signing.")]
	ReservedParameter {
		/// Offending parameter name.
		key: String,
	},
	/// The signing timestamp could not be rendered.
	#[error("Signing timestamp could not be formatted.")]
	Timestamp(#[from] time::error::Format),
	/// The HMAC primitive refused the signing key.
	#[error("Secret key cannot be used as an HMAC key.")]
	SigningKey,
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Failures raised while turning a response body into a typed value.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body is not valid UTF-8.
	#[error("Response body is not valid UTF-8.")]
	Utf8(#[from] std::str::Utf8Error),
	/// Body is not well-formed XML or does not match the expected shape.
	#[error("Response XML does not match the expected shape at `{}`.", .0.path())]
	Xml(#[from] serde_path_to_error::Error<quick_xml::de::DeError>),
	/// Body is not well-formed XML.
	#[error("Response XML is malformed.")]
	Reader(#[from] quick_xml::Error),
	/// Body contains no element at all.
	#[error("Response body has no XML root element.")]
	MissingRoot,
	/// Body ended before its root element was closed.
	#[error("Response XML ended before its root element was closed.")]
	Unterminated,
}

/// Single `(code, message)` pair reported by the endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
	/// Machine-readable error code (e.g. `AuthFailure`).
	#[serde(rename = "Code", default)]
	pub code: String,
	/// Human-readable message.
	#[serde(rename = "Message", default)]
	pub message: String,
}

/// Structured multi-error body returned when the endpoint rejects a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
	/// Request identifier assigned by the endpoint.
	pub request_id: String,
	/// Reported errors, in the order received.
	pub errors: Vec<ServiceError>,
}
impl ErrorEnvelope {
	/// Returns the first reported error code, if any.
	pub fn code(&self) -> Option<&str> {
		self.errors.first().map(|e| e.code.as_str())
	}
}
impl StdError for ErrorEnvelope {}
impl Display for ErrorEnvelope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("aws: ->\n")?;

		for e in &self.errors {
			writeln!(f, "\t{}: {}", e.code, Quoted(&e.message))?;
		}

		Ok(())
	}
}

/// Double-quoted rendering with Go-style escapes.
///
/// `"` and `\` are backslash-escaped; ASCII controls use `\a \b \f \n \r \t \v` or `\xNN`;
/// other Unicode control characters use `\uNNNN`. Everything else, combining marks included, is
/// written as-is.
struct Quoted<'a>(&'a str);
impl Display for Quoted<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_char('"')?;

		for c in self.0.chars() {
			match c {
				'"' => f.write_str("\\\"")?,
				'\\' => f.write_str("\\\\")?,
				'\u{7}' => f.write_str("\\a")?,
				'\u{8}' => f.write_str("\\b")?,
				'\u{c}' => f.write_str("\\f")?,
				'\n' => f.write_str("\\n")?,
				'\r' => f.write_str("\\r")?,
				'\t' => f.write_str("\\t")?,
				'\u{b}' => f.write_str("\\v")?,
				c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
				c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
				c => f.write_char(c)?,
			}
		}

		f.write_char('"')
	}
}
