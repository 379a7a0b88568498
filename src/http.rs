//! Transport primitives for gateway calls.
//!
//! [`GatewayHttpClient`] is the client's only dependency on an HTTP stack. It receives a fully
//! built [`GatewayRequest`] (method, URI, headers, body) and hands back the raw
//! [`GatewayResponse`]; status classification and JSON decoding stay in the client so every
//! transport behaves the same way. [`ReqwestHttpClient`] is the default implementation.

// self
use crate::_prelude::*;

/// Request handed to a transport.
pub type GatewayRequest = ::http::Request<Vec<u8>>;
/// Response returned by a transport.
pub type GatewayResponse = ::http::Response<Vec<u8>>;
/// Boxed future returned by [`GatewayHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<GatewayResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing gateway requests.
///
/// Implementations must be `Send + Sync + 'static` so a client can be shared across tasks
/// behind an [`Arc`], and the returned future must be `Send` so callers can spawn operations
/// onto multi-threaded executors. Non-success statuses are not errors at this layer: return the
/// response and let the client classify it. Only failures that prevent a response from being
/// received (DNS, TCP, TLS, body streaming) belong in [`GatewayHttpClient::TransportError`].
pub trait GatewayHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves once the full response body has been read.
	fn execute(&self, request: GatewayRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl GatewayHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: GatewayRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = GatewayResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
