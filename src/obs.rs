//! Optional observability helpers for gateway operations.
//!
//! Every client operation runs inside one [`OperationSpan`], which counts the attempt, notes the
//! gateway's HTTP status when one arrives, and records the final outcome.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit an `info` span named `billinggate.operation` carrying the
//!   `operation`, `status`, and `outcome` fields.
//! - Enable `metrics` to increment `billinggate_operation_total{operation,outcome}` and
//!   `billinggate_gateway_status_total{operation,status_class}`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Gateway operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Encrypted redirect URL generation.
	Redirect,
	/// Bearer-authenticated payment creation.
	CreatePayment,
	/// Transaction verification polling.
	Verify,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::Redirect => "redirect",
			Operation::CreatePayment => "create_payment",
			Operation::Verify => "verify",
		}
	}

	/// Human-readable flow name used in configuration errors.
	pub const fn flow_label(self) -> &'static str {
		match self {
			Operation::Redirect => "Redirect Flow",
			Operation::CreatePayment => "API Flow",
			Operation::Verify => "Verification",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Missing or invalid configuration; no request was sent.
	ConfigError,
	/// The gateway answered with a non-success status or an undecodable body.
	GatewayError,
	/// Sealing or transport failure.
	Failure,
}
impl Outcome {
	/// Classifies an operation result.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Outcome::Success,
			Err(Error::Config(_)) => Outcome::ConfigError,
			Err(Error::Api { .. } | Error::Verification { .. } | Error::ResponseParse { .. }) =>
				Outcome::GatewayError,
			Err(_) => Outcome::Failure,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::ConfigError => "config_error",
			Outcome::GatewayError => "gateway_error",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
