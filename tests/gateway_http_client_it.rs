// std
use std::{
	fmt::{Display, Formatter, Result as FmtResult},
	sync::{Arc, Mutex},
};
// crates.io
use http::{Method, StatusCode, header::AUTHORIZATION};
// self
use billinggate::{
	client::BillingGateClient,
	config::GatewayConfig,
	error::{Error, TransportError},
	http::{GatewayHttpClient, GatewayRequest, GatewayResponse, TransportFuture},
	types::PaymentPayload,
};

#[derive(Debug)]
enum FakeTransportError {
	Unreachable,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Unreachable => write!(f, "Gateway unreachable."),
		}
	}
}
impl std::error::Error for FakeTransportError {}

#[derive(Default)]
struct RecordingHttpClient {
	requests: Mutex<Vec<(Method, String, Option<String>)>>,
	status: Option<StatusCode>,
	body: &'static str,
}
impl RecordingHttpClient {
	fn responding(status: StatusCode, body: &'static str) -> Self {
		Self { status: Some(status), body, ..Default::default() }
	}

	fn unreachable() -> Self {
		Self::default()
	}

	fn recorded(&self) -> Vec<(Method, String, Option<String>)> {
		self.requests.lock().expect("Request log should not be poisoned.").clone()
	}
}
impl GatewayHttpClient for RecordingHttpClient {
	type TransportError = FakeTransportError;

	fn execute(&self, request: GatewayRequest) -> TransportFuture<'_, Self::TransportError> {
		let authorization = request
			.headers()
			.get(AUTHORIZATION)
			.and_then(|value| value.to_str().ok())
			.map(ToOwned::to_owned);

		self.requests.lock().expect("Request log should not be poisoned.").push((
			request.method().clone(),
			request.uri().to_string(),
			authorization,
		));

		let outcome = match self.status {
			Some(status) => {
				let mut response = GatewayResponse::new(self.body.as_bytes().to_vec());

				*response.status_mut() = status;

				Ok(response)
			},
			None => Err(FakeTransportError::Unreachable),
		};

		Box::pin(async move { outcome })
	}
}

fn config() -> GatewayConfig {
	GatewayConfig::new().with_worker_url("https://gateway.test/").with_api_key("fake-api-key")
}

#[tokio::test]
async fn custom_transport_receives_authorized_requests() {
	let transport = Arc::new(RecordingHttpClient::responding(StatusCode::OK, "1"));
	let client: BillingGateClient<RecordingHttpClient> =
		BillingGateClient::with_http_client(config(), transport.clone());
	let verified =
		client.verify_transaction("tx_42").await.expect("Fake transport should respond with 200.");

	assert!(verified);
	assert_eq!(
		transport.recorded(),
		vec![(
			Method::GET,
			"https://gateway.test/api/verify?transaction=tx_42".to_owned(),
			Some("Bearer fake-api-key".to_owned()),
		)]
	);
}

#[tokio::test]
async fn transport_failures_map_to_transport_errors() {
	let transport = Arc::new(RecordingHttpClient::unreachable());
	let client: BillingGateClient<RecordingHttpClient> =
		BillingGateClient::with_http_client(config(), transport.clone());
	let err = client
		.create_payment_api(&PaymentPayload::new("Widget", 100, "fake"))
		.await
		.expect_err("Unreachable transport should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(err.status(), None);
	assert_eq!(transport.recorded().len(), 1);
}

#[tokio::test]
async fn configuration_errors_skip_the_transport() {
	let transport = Arc::new(RecordingHttpClient::responding(StatusCode::OK, "true"));
	let client: BillingGateClient<RecordingHttpClient> = BillingGateClient::with_http_client(
		GatewayConfig::new().with_worker_url("https://gateway.test"),
		transport.clone(),
	);
	let err = client.verify_transaction("tx_1").await.expect_err("API key is missing.");

	assert!(matches!(err, Error::Config(_)));
	assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn concurrent_operations_share_one_client() {
	let transport = Arc::new(RecordingHttpClient::responding(StatusCode::OK, "true"));
	let client: Arc<BillingGateClient<RecordingHttpClient>> =
		Arc::new(BillingGateClient::with_http_client(config(), transport.clone()));
	let handles = (0..4)
		.map(|i| {
			let client = Arc::clone(&client);

			tokio::spawn(async move { client.verify_transaction(&format!("tx_{i}")).await })
		})
		.collect::<Vec<_>>();

	for handle in handles {
		assert!(handle.await.expect("Task should not panic.").expect("Verification should pass."));
	}

	assert_eq!(transport.recorded().len(), 4);
}
