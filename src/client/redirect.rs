// self
use crate::{
	_prelude::*,
	client::BillingGateClient,
	http::GatewayHttpClient,
	obs::{Operation, OperationSpan},
	token,
	types::PaymentPayload,
};

impl<C> BillingGateClient<C>
where
	C: ?Sized + GatewayHttpClient,
{
	/// Seals `payload` into a token and returns `{worker_url}/{token}` for the redirect flow.
	///
	/// Requires the encryption key and worker URL. Performs no I/O.
	pub fn generate_redirect_url(&self, payload: &PaymentPayload) -> Result<String> {
		const OPERATION: Operation = Operation::Redirect;

		OperationSpan::start(OPERATION).run_sync(|| {
			let secret = self.config.require_encryption_key(OPERATION)?;
			let worker_url = self.config.require_worker_url(OPERATION)?;
			let token = token::encrypt_payload(payload, secret.expose(), self.config.salt())?;

			Ok(format!("{worker_url}/{token}"))
		})
	}
}
