// crates.io
use httpmock::prelude::*;
// self
use billinggate::{
	client::{BillingGateClient, ReqwestBillingGateClient},
	config::{ConfigItem, GatewayConfig},
	error::{ConfigError, Error},
};

const API_KEY: &str = "api-key-verify";

fn client(server: &MockServer) -> ReqwestBillingGateClient {
	BillingGateClient::new(
		GatewayConfig::new().with_worker_url(server.base_url()).with_api_key(API_KEY),
	)
}

async fn verify_with_body(body: &'static str) -> bool {
	let server = MockServer::start_async().await;

	assert!(server.base_url().starts_with("http://"), "Mock gateway must be plain HTTP.");

	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/verify")
				.query_param("transaction", "tx_1")
				.header("authorization", format!("Bearer {API_KEY}"));
			then.status(200).header("content-type", "application/json").body(body);
		})
		.await;
	let verified = client(&server)
		.verify_transaction("tx_1")
		.await
		.expect("Verification should succeed against the mock gateway.");

	mock.assert_async().await;

	verified
}

#[tokio::test]
async fn verify_transaction_maps_booleans() {
	assert!(verify_with_body("true").await);
	assert!(!verify_with_body("false").await);
}

#[tokio::test]
async fn verify_transaction_reads_boolean_strings_literally() {
	assert!(!verify_with_body("\"false\"").await);
	assert!(!verify_with_body("\" FALSE \"").await);
	assert!(verify_with_body("\"true\"").await);
}

#[tokio::test]
async fn verify_transaction_coerces_other_shapes() {
	assert!(!verify_with_body("null").await);
	assert!(!verify_with_body("0").await);
	assert!(!verify_with_body("\"\"").await);
	assert!(verify_with_body("{\"status\":\"paid\"}").await);
}

#[tokio::test]
async fn verify_transaction_encodes_transaction_id() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/verify").query_param("transaction", "tx 1&2");
			then.status(200).body("true");
		})
		.await;
	let verified = client(&server)
		.verify_transaction("tx 1&2")
		.await
		.expect("Verification should succeed for ids that need escaping.");

	assert!(verified);

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_transaction_surfaces_error_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/verify");
			then.status(404).body("transaction not found");
		})
		.await;
	let err = client(&server)
		.verify_transaction("tx_missing")
		.await
		.expect_err("HTTP 404 should surface as a verification error.");

	assert_eq!(err.to_string(), "Verification Check Failed: transaction not found");
	assert_eq!(err.status(), Some(404));

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_transaction_requires_credentials() {
	let client = BillingGateClient::new(GatewayConfig::new().with_worker_url("https://x.test"));
	let err = client
		.verify_transaction("tx_1")
		.await
		.expect_err("Missing API key should be reported.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::Missing { item: ConfigItem::ApiKey, .. })
	));
	assert_eq!(err.to_string(), "API Key is required for Verification.");
}
