//! Authenticated encryption with associated data.
//!
//! # Ciphertext format
//!
//! ```text
//! nonce (24 bytes) || encrypted payload (plaintext length) || tag (16 bytes)
//! ```
//!
//! No length fields are embedded: the nonce and tag lengths are fixed
//! constants, so both segments are recovered from the total buffer length
//! alone. Total output length is `24 + plaintext_len + 16`.

pub mod xchacha;

pub use xchacha::{XChaCha20Poly1305Cipher, KEY_LEN, NONCE_LEN, TAG_LEN};

use crate::error::CryptoError;

/// An AEAD capability handle.
///
/// Implementations are stateless with respect to message processing and safe
/// to call concurrently from multiple threads: each `encrypt` draws its own
/// nonce and each call works on its own buffers.
pub trait AeadCipher: Send + Sync {
    /// Encrypt `plaintext`, binding `associated_data` into the tag, and
    /// return a self-contained ciphertext blob.
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Authenticate and decrypt a blob produced by [`AeadCipher::encrypt`].
    /// The same `associated_data` must be supplied.
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}
