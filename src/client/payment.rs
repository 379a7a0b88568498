// crates.io
use ::http::{Method, header::CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	client::{self, BillingGateClient},
	error::ConfigError,
	http::GatewayHttpClient,
	obs::{Operation, OperationSpan},
	types::{PaymentPayload, PaymentResponse},
};

impl<C> BillingGateClient<C>
where
	C: ?Sized + GatewayHttpClient,
{
	/// Creates a payment through `POST {worker_url}/api/payment`.
	///
	/// Requires the API key and worker URL. A non-success status surfaces the raw response body
	/// as [`Error::Api`].
	pub async fn create_payment_api(&self, payload: &PaymentPayload) -> Result<PaymentResponse> {
		const OPERATION: Operation = Operation::CreatePayment;

		let span = OperationSpan::start(OPERATION);

		span.clone()
			.run(async move {
				let api_key = self.config.require_api_key(OPERATION)?;
				let url = self.config.endpoint_url(OPERATION, "api/payment")?;
				let body = serde_json::to_vec(payload)
					.map_err(|source| Error::RequestEncode { source })?;
				let request = client::authorized_request(Method::POST, &url, api_key)?
					.header(CONTENT_TYPE, "application/json")
					.body(body)
					.map_err(ConfigError::from)?;
				let response = self.send(&span, request).await?;
				let status = response.status();

				if !status.is_success() {
					return Err(Error::Api {
						status: status.as_u16(),
						message: client::body_text(&response),
					});
				}

				client::decode_json(&response)
			})
			.await
	}
}
