//! BillingGate payment gateway client—encrypted redirect URLs, bearer-authenticated payment
//! creation, and transaction verification over a pluggable HTTP transport.
//!
//! The crate exposes three operations on [`client::BillingGateClient`]:
//!
//! - [`generate_redirect_url`](client::BillingGateClient::generate_redirect_url) seals a payment
//!   payload into a URL-safe token (PBKDF2-HMAC-SHA256 + AES-256-GCM) and appends it to the worker
//!   endpoint.
//! - [`create_payment_api`](client::BillingGateClient::create_payment_api) posts the payload to
//!   `/api/payment`.
//! - [`verify_transaction`](client::BillingGateClient::verify_transaction) polls
//!   `/api/verify?transaction=<id>`.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod secret;
pub mod token;
pub mod types;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
