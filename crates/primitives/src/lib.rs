//! Thin, correctness-critical contracts over vetted cryptographic
//! implementations.
//!
//! Two independent capability abstractions:
//!
//! - [`aead`] — authenticated encryption with associated data
//!   (XChaCha20-Poly1305). Stateless after construction; produces
//!   self-contained `nonce || payload || tag` blobs.
//! - [`mac`] — incremental keyed message authentication (HMAC over the
//!   SHA-2 family) with a strict init → update → finalize lifecycle.
//!
//! The algorithms themselves are delegated to the RustCrypto crates
//! (`chacha20poly1305`, `hmac`, `sha2`); this layer owns the contract
//! discipline — key/nonce/tag size validation, deterministic ciphertext
//! framing, state-machine enforcement, and failure handling that never
//! leaks key material or verification detail.

pub mod aead;
pub mod error;
pub mod mac;

pub use aead::{AeadCipher, XChaCha20Poly1305Cipher};
pub use error::CryptoError;
pub use mac::{HashType, StatefulHmac, StatefulMac};
