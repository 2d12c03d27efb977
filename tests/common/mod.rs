//! Shared fixtures for integration tests.

#![allow(dead_code)]

// self
use aws_query::{
	auth::Credentials,
	client::{Client, ReqwestQueryClient},
	endpoint::Endpoint,
	http::ReqwestHttpClient,
	reqwest::Client as ReqwestClient,
};

/// Access key identifier used by integration tests.
pub const TEST_ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
/// Secret access key used by integration tests.
pub const TEST_SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";
/// API version used by integration tests.
pub const TEST_VERSION: &str = "2011-11-01";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Constructs a [`Client`] pointed at `host` (typically a mock server's `ip:port`) with the test
/// credentials and the reqwest transport used across integration tests.
pub fn build_reqwest_test_client(host: &str) -> ReqwestQueryClient {
	let endpoint =
		Endpoint::builder(host, TEST_VERSION).build().expect("Failed to build test endpoint.");
	let credentials = Credentials::new(TEST_ACCESS_KEY_ID, TEST_SECRET_ACCESS_KEY)
		.expect("Failed to build test credentials.");

	Client::with_http_client(endpoint, credentials, test_reqwest_http_client())
}
