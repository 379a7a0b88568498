//! Payment payloads and gateway response shapes.

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Charge request sent through either the redirect or the API flow.
///
/// Optional fields are omitted from the JSON body when unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayload {
	/// Product name shown on the payment page.
	pub product_name: String,
	/// Amount in the gateway's implicit currency (TWD).
	pub amount: u64,
	/// Identifier of the integrating source.
	pub source: String,
	/// URL the gateway notifies once the payment settles.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub callback_url: Option<String>,
	/// Product photo URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub photo_url: Option<String>,
	/// Path appended to the return URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub query_path: Option<String>,
}
impl PaymentPayload {
	/// Creates a payload with the required fields.
	pub fn new(product_name: impl Into<String>, amount: u64, source: impl Into<String>) -> Self {
		Self {
			product_name: product_name.into(),
			amount,
			source: source.into(),
			callback_url: None,
			photo_url: None,
			query_path: None,
		}
	}

	/// Sets the callback URL.
	pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
		self.callback_url = Some(url.into());

		self
	}

	/// Sets the photo URL.
	pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
		self.photo_url = Some(url.into());

		self
	}

	/// Sets the query path.
	pub fn with_query_path(mut self, path: impl Into<String>) -> Self {
		self.query_path = Some(path.into());

		self
	}
}

/// Payment created by the gateway's API flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
	/// Gateway-assigned payment identifier.
	pub id: String,
	/// Hosted payment page URL.
	pub url: String,
}

/// Interprets a verification response body as a boolean.
///
/// JSON booleans and the strings `"true"`/`"false"` map literally. Anything else falls back to
/// truthiness: `null`, `0`, `""`, `[]`, and `{}` are `false`.
pub fn verification_truthiness(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(text) => {
			let trimmed = text.trim();

			if trimmed.eq_ignore_ascii_case("true") {
				true
			} else if trimmed.eq_ignore_ascii_case("false") {
				false
			} else {
				!text.is_empty()
			}
		},
		Value::Array(items) => !items.is_empty(),
		Value::Object(fields) => !fields.is_empty(),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn payload_omits_unset_optionals() {
		let payload = PaymentPayload::new("SDK Test Product", 600, "rust-sdk");

		assert_eq!(
			serde_json::to_string(&payload).expect("Payload should serialize."),
			r#"{"product_name":"SDK Test Product","amount":600,"source":"rust-sdk"}"#
		);

		let payload = payload
			.with_callback_url("https://example.com/callback")
			.with_photo_url("https://example.com/p.png")
			.with_query_path("/orders/42");
		let value = serde_json::to_value(&payload).expect("Payload should serialize.");

		assert_eq!(value["callback_url"], "https://example.com/callback");
		assert_eq!(value["photo_url"], "https://example.com/p.png");
		assert_eq!(value["query_path"], "/orders/42");
	}

	#[test]
	fn verification_truthiness_covers_shapes() {
		assert!(verification_truthiness(&json!(true)));
		assert!(!verification_truthiness(&json!(false)));
		assert!(!verification_truthiness(&json!(null)));
		assert!(!verification_truthiness(&json!(0)));
		assert!(verification_truthiness(&json!(1)));
		assert!(!verification_truthiness(&json!(0.0)));
		assert!(!verification_truthiness(&json!("")));
		assert!(!verification_truthiness(&json!("false")));
		assert!(verification_truthiness(&json!(" TRUE ")));
		assert!(verification_truthiness(&json!("paid")));
		assert!(!verification_truthiness(&json!([])));
		assert!(verification_truthiness(&json!({ "paid": true })));
		assert!(!verification_truthiness(&json!({})));
	}
}
