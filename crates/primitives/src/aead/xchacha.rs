//! XChaCha20-Poly1305 implementation of [`AeadCipher`].

use chacha20poly1305::{
    aead::{Aead, KeyInit, OsRng, Payload},
    XChaCha20Poly1305, XNonce,
};
use tracing::debug;

use crate::aead::AeadCipher;
use crate::error::CryptoError;

/// Byte length of an XChaCha20-Poly1305 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an XChaCha20-Poly1305 nonce (24 bytes = 192 bits).
pub const NONCE_LEN: usize = 24;

/// Byte length of the Poly1305 authentication tag.
pub const TAG_LEN: usize = 16;

/// XChaCha20-Poly1305 AEAD bound to a single key.
///
/// The key is validated and handed to the engine exactly once, at
/// construction; the engine cipher zeroizes its key schedule when the value
/// is dropped. Instances hold no per-message state and may be shared across
/// threads for concurrent [`encrypt`](Self::encrypt) /
/// [`decrypt`](Self::decrypt) calls.
///
/// The extended 24-byte nonce is what makes drawing a fresh random nonce per
/// message safe: collision probability stays negligible for any realistic
/// message volume under one key.
pub struct XChaCha20Poly1305Cipher {
    cipher: XChaCha20Poly1305,
}

impl XChaCha20Poly1305Cipher {
    /// Create a cipher from raw key material.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeySize`] if `key` is not exactly
    /// [`KEY_LEN`] bytes.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN {
            return Err(CryptoError::InvalidKeySize(key.len()));
        }
        let cipher = XChaCha20Poly1305::new_from_slice(key)
            .map_err(|_| CryptoError::InvalidKeySize(key.len()))?;

        debug!(algorithm = "xchacha20-poly1305", "aead cipher initialised");
        Ok(Self { cipher })
    }

    /// Encrypt `plaintext`, authenticating `associated_data` alongside it.
    ///
    /// A fresh 24-byte nonce is drawn from the OS CSPRNG on every call, so
    /// nonce uniqueness holds by construction rather than caller discipline.
    /// The returned blob is `nonce || encrypted payload || tag`, with total
    /// length `NONCE_LEN + plaintext.len() + TAG_LEN`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::AeadFailure`] on an internal engine error
    /// (unreachable with a validated key).
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        use chacha20poly1305::aead::rand_core::RngCore;
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = XNonce::from_slice(&nonce_bytes);

        // The engine appends the tag to the encrypted payload.
        let sealed = self
            .cipher
            .encrypt(
                nonce,
                Payload {
                    msg: plaintext,
                    aad: associated_data,
                },
            )
            .map_err(|_| CryptoError::AeadFailure)?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&sealed);
        Ok(blob)
    }

    /// Authenticate and decrypt a blob produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidCiphertextSize`] if `ciphertext` is too
    /// short to contain a nonce and a tag — checked before any cryptographic
    /// work. Returns [`CryptoError::AuthenticationFailed`] if tag
    /// verification fails for any reason (wrong key, tampered nonce, payload,
    /// tag, or associated data); the error carries no detail about the cause,
    /// and the engine's tag comparison is constant-time.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < NONCE_LEN + TAG_LEN {
            return Err(CryptoError::InvalidCiphertextSize(ciphertext.len()));
        }
        let (nonce_bytes, sealed) = ciphertext.split_at(NONCE_LEN);
        let nonce = XNonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(
                nonce,
                Payload {
                    msg: sealed,
                    aad: associated_data,
                },
            )
            .map_err(|_| CryptoError::AuthenticationFailed)
    }
}

impl AeadCipher for XChaCha20Poly1305Cipher {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        XChaCha20Poly1305Cipher::encrypt(self, plaintext, associated_data)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        XChaCha20Poly1305Cipher::decrypt(self, ciphertext, associated_data)
    }
}

impl std::fmt::Debug for XChaCha20Poly1305Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("XChaCha20Poly1305Cipher([REDACTED])")
    }
}
