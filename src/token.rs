//! Redirect-flow token sealing.
//!
//! A token is `base64url_nopad(nonce ‖ ciphertext ‖ tag)` where the AES-256-GCM key is derived
//! from the caller's secret with PBKDF2-HMAC-SHA256 (100 000 rounds, 32-byte output). The
//! layout matches AEAD APIs that append the tag to the ciphertext, so the gateway can open
//! tokens produced by any compliant client.

// crates.io
use aes_gcm::{
	Aes256Gcm, Nonce,
	aead::{Aead, KeyInit},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use sha2::Sha256;
// self
use crate::{_prelude::*, error::CryptoError};

/// Salt used when none is configured. Must match the gateway.
pub const DEFAULT_SALT: &[u8] = b"billinggate_salt";
/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 100_000;
/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;
/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Key-derivation salt, accepted either as text or raw bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Salt(Vec<u8>);
impl Salt {
	/// Wraps raw salt bytes.
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	/// Returns the raw salt bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}
}
impl Default for Salt {
	fn default() -> Self {
		Self(DEFAULT_SALT.to_vec())
	}
}
impl From<&str> for Salt {
	fn from(value: &str) -> Self {
		Self(value.as_bytes().to_vec())
	}
}
impl From<String> for Salt {
	fn from(value: String) -> Self {
		Self(value.into_bytes())
	}
}
impl From<&[u8]> for Salt {
	fn from(value: &[u8]) -> Self {
		Self(value.to_vec())
	}
}
impl From<Vec<u8>> for Salt {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}
impl Debug for Salt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Salt").field(&String::from_utf8_lossy(&self.0)).finish()
	}
}

/// Derives the AES-256 key for `secret` + `salt`.
///
/// Deterministic: the same inputs always yield the same key.
pub fn derive_key(secret: &str, salt: &Salt) -> [u8; KEY_LEN] {
	derive_key_with_rounds(secret.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS)
}

fn derive_key_with_rounds(secret: &[u8], salt: &[u8], rounds: u32) -> [u8; KEY_LEN] {
	let mut key = [0; KEY_LEN];

	pbkdf2::pbkdf2_hmac::<Sha256>(secret, salt, rounds, &mut key);

	key
}

/// Serializes `payload` to compact JSON and seals it into a URL-safe token.
///
/// A fresh random nonce is drawn for every call, so sealing the same payload twice yields
/// different tokens that open to the same JSON.
///
/// Structs serialize their fields in declaration order. A [`serde_json::Value`] object
/// serializes its keys sorted, which can differ from the insertion order a JavaScript client
/// would produce for the same object; the gateway parses the JSON, so only the token bytes differ.
pub fn encrypt_payload<T>(payload: &T, secret: &str, salt: &Salt) -> Result<String, CryptoError>
where
	T: ?Sized + Serialize,
{
	let mut nonce = [0; NONCE_LEN];

	rand::rng().fill_bytes(&mut nonce);

	seal(payload, secret, salt, nonce)
}

/// Returns the token length for a plaintext of `plaintext_len` bytes.
pub const fn encoded_len(plaintext_len: usize) -> usize {
	let raw = NONCE_LEN + plaintext_len + TAG_LEN;

	(raw * 4 + 2) / 3
}

fn seal<T>(
	payload: &T,
	secret: &str,
	salt: &Salt,
	nonce: [u8; NONCE_LEN],
) -> Result<String, CryptoError>
where
	T: ?Sized + Serialize,
{
	let key = derive_key(secret, salt);
	let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| CryptoError::InvalidKeyLength)?;
	let plaintext = serde_json::to_vec(payload)?;
	// `encrypt` appends the tag to the ciphertext.
	let sealed = cipher
		.encrypt(Nonce::from_slice(&nonce), plaintext.as_slice())
		.map_err(|_| CryptoError::Seal)?;
	let mut combined = Vec::with_capacity(NONCE_LEN + sealed.len());

	combined.extend_from_slice(&nonce);
	combined.extend_from_slice(&sealed);

	Ok(URL_SAFE_NO_PAD.encode(combined))
}
