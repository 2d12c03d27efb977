//! Query API client: template request, signing, transport, and response decoding.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	endpoint::Endpoint,
	error::TransportError,
	http::{HttpResponse, QueryHttpClient},
	obs::{self, CallOutcome, CallSpan},
	query::Params,
	request::Request,
	xml,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Name of the parameter selecting the operation.
pub const ACTION_PARAM: &str = "Action";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestQueryClient = Client<ReqwestHttpClient>;

/// Issues signed calls against a single endpoint with a single key pair.
///
/// The client owns a parameterless template [`Request`]; every call clones it, adds its own
/// parameters, and signs the clone, so concurrent calls never share mutable state.
pub struct Client<C>
where
	C: ?Sized + QueryHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	template: Request,
}
impl<C> Client<C>
where
	C: ?Sized + QueryHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		endpoint: Endpoint,
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), template: Request::new(endpoint, credentials) }
	}

	/// Endpoint every call targets.
	pub fn endpoint(&self) -> &Endpoint {
		self.template.endpoint()
	}

	/// Returns a fresh copy of the template request for custom parameter sets.
	pub fn request(&self) -> Request {
		self.template.clone()
	}

	/// Runs `action` with `params` and decodes the success body into `T`.
	pub async fn call<T>(&self, action: &str, params: Params) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut request = self.request();

		request.add(ACTION_PARAM, action);

		for param in params.iter() {
			request.add(param.key(), param.value());
		}

		self.execute(action, request).await
	}

	/// Signs and sends a prepared request, decoding the success body into `T`.
	///
	/// `action` only labels spans and metrics; the request must already carry its parameters.
	pub async fn execute<T>(&self, action: &str, request: Request) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let span = CallSpan::new(action, request.endpoint().host());

		obs::record_call_outcome(action, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let signed = request.sign()?;
				let endpoint = signed.endpoint();
				let response = self
					.http_client
					.post_form(endpoint.url(), endpoint.content_type(), signed.body().to_owned())
					.await
					.map_err(TransportError::network)?;

				obs::trace_response(response.status, &response.body);

				read_response(response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(action, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(action, CallOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a new client that provisions its own reqwest-backed transport.
	pub fn new(endpoint: Endpoint, credentials: Credentials) -> Self {
		Self::with_http_client(endpoint, credentials, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + QueryHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: Arc::clone(&self.http_client), template: self.template.clone() }
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + QueryHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("endpoint", self.template.endpoint())
			.field("access_key_id", &self.template.credentials().access_key_id())
			.finish()
	}
}

/// Maps a raw response onto the call result: `200` decodes into `T`, anything else into the
/// endpoint's error envelope.
pub fn read_response<T>(response: HttpResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status;

	if !response.is_ok() {
		let envelope = xml::decode_error_envelope(&response.body)
			.map_err(|source| Error::Decode { status, source })?;

		return Err(Error::Service { status, envelope });
	}

	xml::decode(&response.body).map_err(|source| Error::Decode { status, source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::DecodeError;

	#[derive(Debug, Deserialize)]
	struct Echo {
		#[serde(rename = "requestId")]
		request_id: String,
	}

	#[test]
	fn non_ok_status_always_yields_service_error() {
		let body = "<Response><Errors><Error><Code>AuthFailure</Code><Message>bad creds</Message></Error></Errors><RequestID>abc-123</RequestID></Response>";

		for status in [400, 401, 403, 500, 503] {
			let err = read_response::<Echo>(HttpResponse::new(status, body))
				.expect_err("Non-200 responses must not decode as success.");

			match err {
				Error::Service { status: got, envelope } => {
					assert_eq!(got, status);
					assert_eq!(envelope.request_id, "abc-123");
				},
				other => panic!("Unexpected error variant: {other:?}."),
			}
		}
	}

	#[test]
	fn ok_status_with_malformed_xml_is_decode_error() {
		let body = "<DescribeResponse><requestId>r-1</DescribeResponse>";
		let err = read_response::<Echo>(HttpResponse::new(200, body))
			.expect_err("Malformed XML must not decode.");

		assert!(matches!(err, Error::Decode { status: 200, source: DecodeError::Xml(_) }));
	}

	#[test]
	fn undecodable_error_body_is_decode_error() {
		let body = "<html><body>Bad Gateway</html>";
		let err = read_response::<Echo>(HttpResponse::new(502, body))
			.expect_err("Garbage error bodies must not decode.");

		assert!(matches!(err, Error::Decode { status: 502, .. }));
	}

	#[test]
	fn ok_status_decodes_target_shape() {
		let echo: Echo = read_response(HttpResponse::new(
			200,
			"<EchoResponse xmlns=\"http://ec2.amazonaws.com/doc/2011-11-01/\"><requestId>r-1</requestId></EchoResponse>",
		))
		.expect("Well-formed success body should decode.");

		assert_eq!(echo.request_id, "r-1");
	}
}
