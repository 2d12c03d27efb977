//! Transport primitives for signed Query API exchanges.
//!
//! The module exposes [`QueryHttpClient`] so downstream crates can plug in custom HTTP stacks
//! (or fakes in tests). The client only ever needs a single operation: POST a form body to a
//! URL and hand back the status plus the fully-read body. Timeouts belong to the transport;
//! whatever error it reports is surfaced unchanged as a
//! [`TransportError`](crate::error::TransportError) and never retried.

// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::_prelude::*;

/// Boxed future returned by [`QueryHttpClient::post_form`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Status and fully-read body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response from its parts.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Whether the endpoint answered `200 OK`.
	pub fn is_ok(&self) -> bool {
		self.status == 200
	}
}

/// Abstraction over HTTP transports capable of delivering signed form bodies.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared behind an
/// [`Arc`] by every clone of a client, and the futures they return must be `Send`.
pub trait QueryHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// POSTs `body` to `url` with the given content type and reads the whole response.
	fn post_form<'a>(
		&'a self,
		url: &'a Url,
		content_type: &'static str,
		body: String,
	) -> HttpFuture<'a, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl QueryHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn post_form<'a>(
		&'a self,
		url: &'a Url,
		content_type: &'static str,
		body: String,
	) -> HttpFuture<'a, Self::TransportError> {
		Box::pin(async move {
			let response = self
				.0
				.post(url.clone())
				.header(CONTENT_TYPE, content_type)
				.body(body)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn only_200_counts_as_ok() {
		assert!(HttpResponse::new(200, "").is_ok());
		assert!(!HttpResponse::new(201, "").is_ok());
		assert!(!HttpResponse::new(400, b"<Response/>".to_vec()).is_ok());
	}
}
