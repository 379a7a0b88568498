// crates.io
use ::http::Method;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	client::{self, BillingGateClient},
	error::ConfigError,
	http::GatewayHttpClient,
	obs::{Operation, OperationSpan},
	types,
};

impl<C> BillingGateClient<C>
where
	C: ?Sized + GatewayHttpClient,
{
	/// Checks a transaction through `GET {worker_url}/api/verify?transaction=<id>`.
	///
	/// Requires the API key and worker URL. The JSON body is reduced to a boolean with
	/// [`types::verification_truthiness`]; a non-success status surfaces the raw response body as
	/// [`Error::Verification`].
	///
	/// A JSON string `"false"` (any case, surrounding whitespace ignored) yields `false`, unlike
	/// plain truthiness in JavaScript's `Boolean` or Python's `bool`, where any non-empty string is
	/// true.
	pub async fn verify_transaction(&self, transaction_id: &str) -> Result<bool> {
		const OPERATION: Operation = Operation::Verify;

		let span = OperationSpan::start(OPERATION);

		span.clone()
			.run(async move {
				let api_key = self.config.require_api_key(OPERATION)?;
				let mut url = self.config.endpoint_url(OPERATION, "api/verify")?;

				url.query_pairs_mut().append_pair("transaction", transaction_id);

				let request = client::authorized_request(Method::GET, &url, api_key)?
					.body(Vec::new())
					.map_err(ConfigError::from)?;
				let response = self.send(&span, request).await?;
				let status = response.status();

				if !status.is_success() {
					return Err(Error::Verification {
						status: status.as_u16(),
						message: client::body_text(&response),
					});
				}

				let value: Value = client::decode_json(&response)?;

				Ok(types::verification_truthiness(&value))
			})
			.await
	}
}
