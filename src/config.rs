//! Client configuration: explicit options, the environment adapter, and the resolved view.
//!
//! [`GatewayConfig`] holds caller-supplied options where every field is optional.
//! [`GatewayConfig::from_env`] is the thin adapter that reads the `BILLINGGATE_*` variables at
//! the application boundary; [`GatewayConfig::or`] layers explicit options over it so that
//! options take precedence field by field. [`ResolvedConfig`] is the normalized, read-only
//! form owned by a client for its whole lifetime.

// self
use crate::{_prelude::*, error::ConfigError, obs::Operation, secret::Secret, token::Salt};

/// Environment variable holding the worker endpoint.
pub const ENV_WORKER_URL: &str = "BILLINGGATE_WORKER_URL";
/// Environment variable holding the redirect-flow encryption secret.
pub const ENV_ENCRYPTION_KEY: &str = "BILLINGGATE_ENCRYPTION_KEY";
/// Environment variable holding the API bearer credential.
pub const ENV_API_KEY: &str = "BILLINGGATE_API_KEY";
/// Environment variable holding an optional salt override.
pub const ENV_SALT: &str = "BILLINGGATE_SALT";

/// Configuration items an operation may require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigItem {
	/// Worker endpoint base address.
	WorkerUrl,
	/// Redirect-flow encryption secret.
	EncryptionKey,
	/// API bearer credential.
	ApiKey,
}
impl ConfigItem {
	/// Returns the human-readable label used in error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigItem::WorkerUrl => "Worker URL",
			ConfigItem::EncryptionKey => "Encryption Key",
			ConfigItem::ApiKey => "API Key",
		}
	}
}
impl Display for ConfigItem {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Caller-supplied client options. Unset or empty fields fall back to the next layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GatewayConfig {
	/// Worker endpoint base address.
	pub worker_url: Option<String>,
	/// Redirect-flow encryption secret.
	pub encryption_key: Option<Secret>,
	/// API bearer credential.
	pub api_key: Option<Secret>,
	/// Key-derivation salt; defaults to `billinggate_salt`.
	pub salt: Option<Salt>,
}
impl GatewayConfig {
	/// Creates an empty option set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads the `BILLINGGATE_*` variables from the process environment.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds options from an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

		Self {
			worker_url: read(ENV_WORKER_URL),
			encryption_key: read(ENV_ENCRYPTION_KEY).map(Secret::new),
			api_key: read(ENV_API_KEY).map(Secret::new),
			salt: read(ENV_SALT).map(Salt::from),
		}
	}

	/// Sets the worker endpoint.
	pub fn with_worker_url(mut self, url: impl Into<String>) -> Self {
		self.worker_url = Some(url.into());

		self
	}

	/// Sets the redirect-flow encryption secret.
	pub fn with_encryption_key(mut self, key: impl Into<Secret>) -> Self {
		self.encryption_key = Some(key.into());

		self
	}

	/// Sets the API bearer credential.
	pub fn with_api_key(mut self, key: impl Into<Secret>) -> Self {
		self.api_key = Some(key.into());

		self
	}

	/// Sets the key-derivation salt (text or raw bytes).
	pub fn with_salt(mut self, salt: impl Into<Salt>) -> Self {
		self.salt = Some(salt.into());

		self
	}

	/// Layers `self` over `fallback`; set, non-empty fields in `self` win.
	pub fn or(self, fallback: GatewayConfig) -> Self {
		Self {
			worker_url: self.worker_url.filter(|v| !v.is_empty()).or(fallback.worker_url),
			encryption_key: self.encryption_key.filter(|v| !v.is_empty()).or(fallback.encryption_key),
			api_key: self.api_key.filter(|v| !v.is_empty()).or(fallback.api_key),
			salt: self.salt.filter(|v| !v.as_bytes().is_empty()).or(fallback.salt),
		}
	}

	/// Normalizes the options into the immutable form held by a client.
	pub fn resolve(self) -> ResolvedConfig {
		let worker_url = self
			.worker_url
			.map(|url| url.trim_end_matches('/').to_owned())
			.filter(|url| !url.is_empty());

		ResolvedConfig {
			worker_url,
			encryption_key: self.encryption_key.filter(|v| !v.is_empty()),
			api_key: self.api_key.filter(|v| !v.is_empty()),
			salt: self.salt.filter(|v| !v.as_bytes().is_empty()).unwrap_or_default(),
		}
	}
}

/// Normalized configuration owned by a client. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
	worker_url: Option<String>,
	encryption_key: Option<Secret>,
	api_key: Option<Secret>,
	salt: Salt,
}
impl ResolvedConfig {
	/// Worker endpoint without trailing slashes.
	pub fn worker_url(&self) -> Option<&str> {
		self.worker_url.as_deref()
	}

	/// Redirect-flow encryption secret.
	pub fn encryption_key(&self) -> Option<&Secret> {
		self.encryption_key.as_ref()
	}

	/// API bearer credential.
	pub fn api_key(&self) -> Option<&Secret> {
		self.api_key.as_ref()
	}

	/// Key-derivation salt.
	pub fn salt(&self) -> &Salt {
		&self.salt
	}

	pub(crate) fn require_worker_url(&self, operation: Operation) -> Result<&str, ConfigError> {
		self.worker_url()
			.ok_or(ConfigError::Missing { item: ConfigItem::WorkerUrl, operation })
	}

	pub(crate) fn require_encryption_key(
		&self,
		operation: Operation,
	) -> Result<&Secret, ConfigError> {
		self.encryption_key()
			.ok_or(ConfigError::Missing { item: ConfigItem::EncryptionKey, operation })
	}

	pub(crate) fn require_api_key(&self, operation: Operation) -> Result<&Secret, ConfigError> {
		self.api_key().ok_or(ConfigError::Missing { item: ConfigItem::ApiKey, operation })
	}

	/// Joins `path` onto the worker endpoint and parses the result.
	pub(crate) fn endpoint_url(
		&self,
		operation: Operation,
		path: &str,
	) -> Result<Url, ConfigError> {
		let base = self.require_worker_url(operation)?;
		let joined = format!("{base}/{}", path.trim_start_matches('/'));

		Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: base.to_owned(), source })
	}
}
impl From<GatewayConfig> for ResolvedConfig {
	fn from(config: GatewayConfig) -> Self {
		config.resolve()
	}
}
