//! Gateway client and its operations.

mod payment;
mod redirect;
mod verify;

// crates.io
use ::http::{HeaderValue, Method, Request, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::ResolvedConfig,
	error::{ConfigError, TransportError},
	http::{GatewayHttpClient, GatewayRequest, GatewayResponse},
	obs::OperationSpan,
	secret::Secret,
};
#[cfg(feature = "reqwest")] use crate::{config::GatewayConfig, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestBillingGateClient = BillingGateClient<ReqwestHttpClient>;

/// Calls a BillingGate worker on behalf of a merchant.
///
/// The client owns its [`ResolvedConfig`] and transport; neither changes after construction, so
/// a single instance may serve concurrent operations without locking. Each operation checks the
/// configuration it needs before any I/O and reports the first missing item as
/// [`ConfigError::Missing`].
#[derive(Clone)]
pub struct BillingGateClient<C>
where
	C: ?Sized + GatewayHttpClient,
{
	/// HTTP client wrapper used for every outbound gateway request.
	pub http_client: Arc<C>,
	config: ResolvedConfig,
}
impl<C> BillingGateClient<C>
where
	C: ?Sized + GatewayHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		config: impl Into<ResolvedConfig>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), config: config.into() }
	}

	/// Returns the resolved configuration.
	pub fn config(&self) -> &ResolvedConfig {
		&self.config
	}

	async fn send(&self, span: &OperationSpan, request: GatewayRequest) -> Result<GatewayResponse> {
		let response =
			self.http_client.execute(request).await.map_err(TransportError::network)?;

		span.record_status(response.status().as_u16());

		Ok(response)
	}
}
#[cfg(feature = "reqwest")]
impl BillingGateClient<ReqwestHttpClient> {
	/// Creates a client from explicit configuration only.
	///
	/// The environment is not consulted; use [`BillingGateClient::with_options`] or
	/// [`BillingGateClient::from_env`] for the `BILLINGGATE_*` fallback.
	pub fn new(config: GatewayConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}

	/// Creates a client configured entirely from the `BILLINGGATE_*` environment variables.
	pub fn from_env() -> Self {
		Self::new(GatewayConfig::from_env())
	}

	/// Creates a client where set `options` take precedence over the environment.
	pub fn with_options(options: GatewayConfig) -> Self {
		Self::new(options.or(GatewayConfig::from_env()))
	}
}
impl<C> Debug for BillingGateClient<C>
where
	C: ?Sized + GatewayHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BillingGateClient")
			.field("worker_url", &self.config.worker_url())
			.field("encryption_key_set", &self.config.encryption_key().is_some())
			.field("api_key_set", &self.config.api_key().is_some())
			.field("salt", self.config.salt())
			.finish()
	}
}

fn authorized_request(
	method: Method,
	url: &Url,
	api_key: &Secret,
) -> Result<::http::request::Builder, ConfigError> {
	Ok(Request::builder().method(method).uri(url.as_str()).header(AUTHORIZATION, bearer(api_key)?))
}

fn bearer(api_key: &Secret) -> Result<HeaderValue, ConfigError> {
	let mut value = HeaderValue::try_from(format!("Bearer {}", api_key.expose()))
		.map_err(::http::Error::from)?;

	value.set_sensitive(true);

	Ok(value)
}

fn body_text(response: &GatewayResponse) -> String {
	String::from_utf8_lossy(response.body()).into_owned()
}

fn decode_json<T>(response: &GatewayResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(response.body());

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source, status: response.status().as_u16() })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bearer_header_is_sensitive() {
		let value = bearer(&Secret::new("api-key")).expect("Header should build.");

		assert_eq!(value.to_str().expect("Header should be ASCII."), "Bearer api-key");
		assert!(value.is_sensitive());
		assert!(bearer(&Secret::new("bad\nkey")).is_err());
	}

	#[test]
	fn decode_json_reports_status_on_failure() {
		let mut response = GatewayResponse::new(b"{\"id\":1}".to_vec());

		*response.status_mut() = ::http::StatusCode::CREATED;

		let err = decode_json::<crate::types::PaymentResponse>(&response)
			.expect_err("Numeric id should be rejected.");

		match err {
			Error::ResponseParse { source, status } => {
				assert_eq!(status, 201);
				assert_eq!(source.path().to_string(), "id");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
