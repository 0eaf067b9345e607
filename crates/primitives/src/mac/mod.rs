//! Incremental keyed message authentication.
//!
//! A [`StatefulMac`] accepts data in arbitrarily sized chunks and produces a
//! single tag once; the tag is identical to a one-shot computation over the
//! concatenated input. Instances are single-use: finalizing consumes the
//! key-derived state, and any further call returns
//! [`CryptoError::InvalidState`].

pub mod hmac;

pub use hmac::{StatefulHmac, MIN_KEY_LEN};

use crate::error::CryptoError;

/// Hash functions selectable for MAC construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// Listed for completeness; rejected at construction — no SHA-1 MACs
    /// are issued.
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    /// Native digest length in bytes. The upper bound for a requested tag
    /// size.
    pub fn digest_size(self) -> usize {
        match self {
            HashType::Sha1 => 20,
            HashType::Sha224 => 28,
            HashType::Sha256 => 32,
            HashType::Sha384 => 48,
            HashType::Sha512 => 64,
        }
    }
}

/// An incremental MAC capability handle.
///
/// Not safe for concurrent use: `update` and `finalize` mutate a single
/// owned context and must be issued as one strictly ordered sequence of
/// calls. No internal locking is provided.
pub trait StatefulMac {
    /// Feed a chunk of data into the MAC computation.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Produce the tag over everything fed so far (possibly nothing) and
    /// spend the instance.
    fn finalize(&mut self) -> Result<Vec<u8>, CryptoError>;
}
