// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
// self
use aws_query::{
	auth::{Credentials, SecretKey},
	client::Client,
	endpoint::Endpoint,
	error::{ConfigError, Error, TransportError},
	http::{HttpFuture, HttpResponse, QueryHttpClient},
	query::{Params, encode},
	request::{SIGNATURE_PARAM, canonical_string, compute_signature},
	url::Url,
};

const HOST: &str = "ec2.fake.internal";
const ACCESS_KEY_ID: &str = "AKIDFAKE";
const VERSION: &str = "2011-11-01";
const SECRET: &str = "fake-secret-key";

#[derive(Debug)]
enum FakeTransportError {
	Refused,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Refused => write!(f, "Connection refused."),
		}
	}
}
impl StdError for FakeTransportError {}

#[derive(Clone, Debug)]
struct Sent {
	url: String,
	content_type: &'static str,
	body: String,
}

#[derive(Default)]
struct FakeHttpClient {
	refuse: bool,
	reply: Option<HttpResponse>,
	sent: Mutex<Vec<Sent>>,
}
impl FakeHttpClient {
	fn replying(status: u16, body: &str) -> Self {
		Self { reply: Some(HttpResponse::new(status, body)), ..Default::default() }
	}

	fn refusing() -> Self {
		Self { refuse: true, ..Default::default() }
	}

	fn sent(&self) -> Vec<Sent> {
		self.sent.lock().clone()
	}
}
impl QueryHttpClient for FakeHttpClient {
	type TransportError = FakeTransportError;

	fn post_form<'a>(
		&'a self,
		url: &'a Url,
		content_type: &'static str,
		body: String,
	) -> HttpFuture<'a, Self::TransportError> {
		Box::pin(async move {
			self.sent.lock().push(Sent { url: url.to_string(), content_type, body });

			if self.refuse {
				return Err(FakeTransportError::Refused);
			}

			Ok(self.reply.clone().unwrap_or_else(|| HttpResponse::new(200, "<Response/>")))
		})
	}
}

fn client(transport: Arc<FakeHttpClient>) -> Client<FakeHttpClient> {
	let endpoint = Endpoint::builder(HOST, VERSION).build().expect("Fake endpoint should build.");
	let credentials =
		Credentials::new(ACCESS_KEY_ID, SECRET).expect("Fake credentials should be valid.");

	Client::with_http_client(endpoint, credentials, transport)
}

#[tokio::test]
async fn sent_body_carries_a_verifiable_trailing_signature() {
	let transport = Arc::new(FakeHttpClient::replying(
		200,
		"<DescribeInstancesResponse><requestId>r</requestId></DescribeInstancesResponse>",
	));
	let client = client(transport.clone());

	client.describe_instances().await.expect("Fake DescribeInstances should succeed.");

	let sent = transport.sent();

	assert_eq!(sent.len(), 1, "Exactly one request must be sent.");
	assert_eq!(sent[0].url, format!("https://{HOST}/"));
	assert_eq!(sent[0].content_type, "application/x-www-form-urlencoded; charset=utf-8");

	let marker = format!("&{SIGNATURE_PARAM}=");
	let (signed_part, signature) =
		sent[0].body.rsplit_once(&marker).expect("Body must end with the signature.");
	let keys = signed_part
		.split('&')
		.map(|pair| pair.split_once('=').map(|(k, _)| k).unwrap_or(pair))
		.collect::<Vec<_>>();
	let mut sorted = keys.clone();

	sorted.sort_unstable();

	assert_eq!(keys, sorted, "Signed parameters must be sorted by key.");
	assert_eq!(
		keys,
		["AWSAccessKeyId", "Action", "SignatureMethod", "SignatureVersion", "Timestamp", "Version"]
	);

	let canonical = format!("POST\n{HOST}\n/\n{signed_part}");
	let expected = compute_signature(&SecretKey::new(SECRET), &canonical)
		.expect("Signature recomputation should succeed.");

	assert_eq!(signature, encode(&expected));
}

#[test]
fn canonical_string_helper_matches_body_prefix() {
	let mut params = Params::new();

	params.add("Version", VERSION);
	params.add("Action", "DescribeInstances");
	params.sort_by_key();

	assert_eq!(
		canonical_string(HOST, &params),
		format!("POST\n{HOST}\n/\nAction=DescribeInstances&Version={VERSION}")
	);
}

#[tokio::test]
async fn transport_failure_is_propagated_without_retry() {
	let transport = Arc::new(FakeHttpClient::refusing());
	let client = client(transport.clone());
	let err = client.describe_instances().await.expect_err("Refused connections must fail.");

	match err {
		Error::Transport(TransportError::Network { source }) => {
			assert!(source.downcast_ref::<FakeTransportError>().is_some());
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert_eq!(transport.sent().len(), 1, "Failed calls must not be retried.");
}

#[tokio::test]
async fn reserved_parameters_fail_before_sending() {
	let transport = Arc::new(FakeHttpClient::default());
	let client = client(transport.clone());
	let params = [("Timestamp", "2000-01-01T00:00:00Z")].into_iter().collect::<Params>();
	let err = client
		.call::<aws_query::ec2::DescribeInstancesResponse>("DescribeInstances", params)
		.await
		.expect_err("Reserved parameters must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::ReservedParameter { .. })));
	assert!(transport.sent().is_empty(), "Rejected requests must never reach the transport.");
}

#[tokio::test]
async fn concurrent_calls_do_not_share_parameters() {
	let transport = Arc::new(FakeHttpClient::default());
	let client = client(transport.clone());
	let (first, second) = tokio::join!(
		client.describe_instances_by_id(["i-first"]),
		client.describe_instances_by_id(["i-second"]),
	);

	first.expect("First concurrent call should succeed.");
	second.expect("Second concurrent call should succeed.");

	let sent = transport.sent();

	assert_eq!(sent.len(), 2);

	for request in &sent {
		assert_eq!(request.body.matches("Action=").count(), 1);
		assert_eq!(request.body.matches("InstanceId.").count(), 1);
	}
}

#[tokio::test]
async fn template_requests_are_independent_copies() {
	let transport = Arc::new(FakeHttpClient::default());
	let client = client(transport);
	let mut request = client.request();

	request.add("Action", "DescribeRegions");

	assert!(client.request().params().is_empty(), "Template must stay parameterless.");
	assert_eq!(request.params().get("Action"), Some("DescribeRegions"));
	assert!(!format!("{client:?}").contains(SECRET));
}
