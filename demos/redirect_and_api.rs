//! Demonstrates both payment initiation flows against a mock BillingGate worker: sealing a
//! redirect URL locally, then creating and verifying a payment over the API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use billinggate::{client::BillingGateClient, config::GatewayConfig, types::PaymentPayload};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let payment_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/payment").header("authorization", "Bearer demo-api-key");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"pay_demo\",\"url\":\"https://pay.example/demo\"}");
		})
		.await;
	let verify_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/verify").query_param("transaction", "pay_demo");
			then.status(200).header("content-type", "application/json").body("true");
		})
		.await;
	// Explicit options win; anything left unset falls back to `BILLINGGATE_*`.
	let client = BillingGateClient::with_options(
		GatewayConfig::new()
			.with_worker_url(server.base_url())
			.with_encryption_key("demo-encryption-key")
			.with_api_key("demo-api-key"),
	);
	let payload = PaymentPayload::new("SDK Test Product", 600, "RustSDK_Example")
		.with_callback_url("https://example.com/callback");

	println!("Redirect URL: {}.", client.generate_redirect_url(&payload)?);

	let payment = client.create_payment_api(&payload).await?;

	println!("Payment {} is hosted at {}.", payment.id, payment.url);
	println!("Verified: {}.", client.verify_transaction(&payment.id).await?);

	payment_mock.assert_async().await;
	verify_mock.assert_async().await;

	Ok(())
}
