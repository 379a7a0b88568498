// self
use crate::{
	_prelude::*,
	obs::{self, Operation, Outcome},
};

/// Span wrapping a single client operation.
///
/// [`OperationSpan::start`] counts the attempt; [`OperationSpan::run`] and
/// [`OperationSpan::run_sync`] execute the operation inside the span and record its outcome.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	operation: Operation,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens a span for `operation` and counts the attempt.
	pub fn start(operation: Operation) -> Self {
		obs::record_operation_outcome(operation, Outcome::Attempt);

		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"billinggate.operation",
				operation = operation.as_str(),
				status = tracing::field::Empty,
				outcome = tracing::field::Empty,
			);

			Self { operation, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			Self { operation }
		}
	}

	/// Operation this span belongs to.
	pub fn operation(&self) -> Operation {
		self.operation
	}

	/// Notes the HTTP status returned by the gateway.
	pub fn record_status(&self, status: u16) {
		obs::record_gateway_status(self.operation, status);

		#[cfg(feature = "tracing")]
		self.span.record("status", status);
	}

	/// Runs a synchronous operation inside the span.
	pub fn run_sync<T, F>(self, f: F) -> Result<T>
	where
		F: FnOnce() -> Result<T>,
	{
		let result = {
			#[cfg(feature = "tracing")]
			let _entered = self.span.enter();

			f()
		};

		self.finish(&result);

		result
	}

	/// Runs an async operation inside the span without holding a guard across `.await` points.
	pub async fn run<T, Fut>(self, fut: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		#[cfg(feature = "tracing")]
		let result = {
			use tracing::Instrument;

			fut.instrument(self.span.clone()).await
		};
		#[cfg(not(feature = "tracing"))]
		let result = fut.await;

		self.finish(&result);

		result
	}

	fn finish<T>(&self, result: &Result<T>) {
		let outcome = Outcome::of(result);

		obs::record_operation_outcome(self.operation, outcome);

		#[cfg(feature = "tracing")]
		self.span.record("outcome", outcome.as_str());
	}
}
