//! Error types shared by the primitive layer.

use thiserror::Error;

/// Errors produced by the primitive layer.
///
/// Variants are deliberately coarse. An authentication failure never reports
/// which byte mismatched or where verification stopped, and no variant
/// carries key material — sizes only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Key material does not satisfy the algorithm's length requirement
    /// (exact length for the AEAD, minimum length for the MAC). Raised at
    /// construction only; no instance exists afterwards.
    #[error("invalid key size: {0} bytes")]
    InvalidKeySize(usize),

    /// The requested MAC tag length exceeds the native digest size of the
    /// chosen hash function.
    #[error("invalid tag size: {requested} bytes exceeds digest size {digest}")]
    InvalidTagSize { requested: usize, digest: usize },

    /// The requested hash function is not accepted for MAC use.
    #[error("unsupported hash type")]
    UnsupportedHashType,

    /// Decrypt input is too short to contain a nonce and a tag. Checked
    /// before any cryptographic work.
    #[error("invalid ciphertext size: {0} bytes")]
    InvalidCiphertextSize(usize),

    /// AEAD tag verification failed — wrong key, tampered ciphertext, or
    /// tampered associated data. Deliberately generic.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The engine rejected an encryption request. Should be unreachable
    /// with a validated key and a fresh nonce; surfaced rather than
    /// panicking.
    #[error("aead operation failed")]
    AeadFailure,

    /// Update or finalize called on an already-finalized MAC instance.
    #[error("mac context already finalized")]
    InvalidState,
}
