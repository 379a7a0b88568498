//! Client-level error types shared across the redirect, payment, and verification operations.

// self
use crate::{_prelude::*, config::ConfigItem, obs::Operation};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// [`Error::Config`] is raised before any I/O is attempted and can be fixed by the caller;
/// every other network-facing variant only occurs after a request was dispatched.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Key derivation, serialization, or sealing failure.
	#[error(transparent)]
	Crypto(#[from] CryptoError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Payment endpoint returned a non-success status.
	#[error("API Error: {message}")]
	Api {
		/// HTTP status code returned by the gateway.
		status: u16,
		/// Raw response body.
		message: String,
	},
	/// Verification endpoint returned a non-success status.
	#[error("Verification Check Failed: {message}")]
	Verification {
		/// HTTP status code returned by the gateway.
		status: u16,
		/// Raw response body.
		message: String,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	RequestEncode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Gateway responded successfully but the body could not be decoded.
	#[error("Gateway returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl Error {
	/// Returns the HTTP status attached to the error, if the gateway responded.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. }
			| Self::Verification { status, .. }
			| Self::ResponseParse { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before any request is issued.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required credential or endpoint was not resolved.
	#[error("{item} is required for {}.", .operation.flow_label())]
	Missing {
		/// Missing configuration item.
		item: ConfigItem,
		/// Operation that needed the item.
		operation: Operation,
	},
	/// Worker endpoint cannot be parsed as a URL.
	#[error("Worker URL `{endpoint}` is invalid.")]
	InvalidEndpoint {
		/// Normalized endpoint that failed to parse.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] ::http::Error),
}

/// Token sealing failures. Treated as fatal; nothing retries them.
#[derive(Debug, ThisError)]
pub enum CryptoError {
	/// Payload could not be serialized to JSON.
	#[error("Payload could not be serialized.")]
	Serialize(#[from] serde_json::Error),
	/// Derived key was rejected by the cipher.
	#[error("Derived key has an invalid length.")]
	InvalidKeyLength,
	/// AES-GCM refused to seal the plaintext.
	#[error("Authenticated encryption failed.")]
	Seal,
}

/// Transport-level failures raised before an HTTP status was received.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the gateway.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
