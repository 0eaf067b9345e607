//! HMAC implementation of [`StatefulMac`].

use hmac::{Hmac, Mac};
use sha2::{Sha224, Sha256, Sha384, Sha512};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::mac::{HashType, StatefulMac};

/// Minimum accepted HMAC key length in bytes.
///
/// A local policy floor, independent of the hash's block size — HMAC itself
/// accepts keys of any length. Keys shorter than this provide too little
/// entropy to be worth issuing a MAC for.
pub const MIN_KEY_LEN: usize = 16;

/// Engine context for one HMAC computation, monomorphised per hash.
enum HmacContext {
    Sha224(Hmac<Sha224>),
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
}

impl HmacContext {
    fn init(hash_type: HashType, key: &[u8]) -> Result<Self, CryptoError> {
        let invalid = |_| CryptoError::InvalidKeySize(key.len());
        Ok(match hash_type {
            HashType::Sha1 => return Err(CryptoError::UnsupportedHashType),
            HashType::Sha224 => HmacContext::Sha224(Hmac::new_from_slice(key).map_err(invalid)?),
            HashType::Sha256 => HmacContext::Sha256(Hmac::new_from_slice(key).map_err(invalid)?),
            HashType::Sha384 => HmacContext::Sha384(Hmac::new_from_slice(key).map_err(invalid)?),
            HashType::Sha512 => HmacContext::Sha512(Hmac::new_from_slice(key).map_err(invalid)?),
        })
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            HmacContext::Sha224(ctx) => ctx.update(data),
            HmacContext::Sha256(ctx) => ctx.update(data),
            HmacContext::Sha384(ctx) => ctx.update(data),
            HmacContext::Sha512(ctx) => ctx.update(data),
        }
    }

    /// Consume the context and return the full-length digest. Wrapped in
    /// [`Zeroizing`] so the untruncated remainder is wiped once the caller
    /// has copied its tag out.
    fn finalize(self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(match self {
            HmacContext::Sha224(ctx) => ctx.finalize().into_bytes().to_vec(),
            HmacContext::Sha256(ctx) => ctx.finalize().into_bytes().to_vec(),
            HmacContext::Sha384(ctx) => ctx.finalize().into_bytes().to_vec(),
            HmacContext::Sha512(ctx) => ctx.finalize().into_bytes().to_vec(),
        })
    }
}

/// Lifecycle of a [`StatefulHmac`]. `Finalized` is terminal: the engine
/// context is gone, so the key-derived state cannot be inspected or reused.
enum State {
    Created(HmacContext),
    Updating(HmacContext),
    Finalized,
}

/// Incremental HMAC bound to a single key and hash function.
///
/// Produced tags are the leading `tag_size` bytes of the native digest.
/// Feeding data in chunks of any size yields the same tag as a single
/// [`update`](StatefulMac::update) over the concatenation.
pub struct StatefulHmac {
    state: State,
    tag_size: usize,
}

impl StatefulHmac {
    /// Create an HMAC context for `hash_type` producing `tag_size`-byte tags.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeySize`] if `key` is shorter than
    /// [`MIN_KEY_LEN`] bytes, [`CryptoError::InvalidTagSize`] if `tag_size`
    /// exceeds the hash's native digest size, and
    /// [`CryptoError::UnsupportedHashType`] for hash functions not accepted
    /// for MAC use.
    pub fn new(hash_type: HashType, tag_size: usize, key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() < MIN_KEY_LEN {
            return Err(CryptoError::InvalidKeySize(key.len()));
        }
        let digest = hash_type.digest_size();
        if tag_size > digest {
            return Err(CryptoError::InvalidTagSize {
                requested: tag_size,
                digest,
            });
        }
        let context = HmacContext::init(hash_type, key)?;

        debug!(?hash_type, tag_size, "stateful hmac initialised");
        Ok(Self {
            state: State::Created(context),
            tag_size,
        })
    }
}

impl StatefulMac for StatefulHmac {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        match std::mem::replace(&mut self.state, State::Finalized) {
            State::Created(mut context) | State::Updating(mut context) => {
                context.update(data);
                self.state = State::Updating(context);
                Ok(())
            }
            State::Finalized => Err(CryptoError::InvalidState),
        }
    }

    fn finalize(&mut self) -> Result<Vec<u8>, CryptoError> {
        match std::mem::replace(&mut self.state, State::Finalized) {
            // Finalizing straight from Created produces the MAC over the
            // empty string.
            State::Created(context) | State::Updating(context) => {
                let digest = context.finalize();
                Ok(digest[..self.tag_size].to_vec())
            }
            State::Finalized => Err(CryptoError::InvalidState),
        }
    }
}

impl std::fmt::Debug for StatefulHmac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the engine context — it embeds key-derived state.
        let state = match self.state {
            State::Created(_) => "Created",
            State::Updating(_) => "Updating",
            State::Finalized => "Finalized",
        };
        write!(f, "StatefulHmac {{ state: {state}, tag_size: {} }}", self.tag_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(hash_type: HashType, tag_size: usize, key: &[u8], data: &[u8]) -> Vec<u8> {
        let mut mac = StatefulHmac::new(hash_type, tag_size, key).unwrap();
        mac.update(data).unwrap();
        mac.finalize().unwrap()
    }

    // RFC 4231, test case 1.
    const RFC4231_KEY: [u8; 20] = [0x0b; 20];
    const RFC4231_DATA: &[u8] = b"Hi There";

    #[test]
    fn rfc4231_case1_sha256() {
        let tag = tag_of(HashType::Sha256, 32, &RFC4231_KEY, RFC4231_DATA);
        assert_eq!(
            hex::encode(tag),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
    }

    #[test]
    fn rfc4231_case1_sha512() {
        let tag = tag_of(HashType::Sha512, 64, &RFC4231_KEY, RFC4231_DATA);
        assert_eq!(
            hex::encode(tag),
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
             daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
        );
    }

    #[test]
    fn incremental_equals_one_shot() {
        let key = [0x42u8; 32];
        let data = b"the quick brown fox jumps over the lazy dog";

        let one_shot = tag_of(HashType::Sha256, 32, &key, data);

        // Uneven chunking, including an empty chunk.
        let mut mac = StatefulHmac::new(HashType::Sha256, 32, &key).unwrap();
        mac.update(&data[..1]).unwrap();
        mac.update(&data[1..7]).unwrap();
        mac.update(b"").unwrap();
        mac.update(&data[7..]).unwrap();
        assert_eq!(mac.finalize().unwrap(), one_shot);

        // Byte-at-a-time.
        let mut mac = StatefulHmac::new(HashType::Sha256, 32, &key).unwrap();
        for byte in data {
            mac.update(std::slice::from_ref(byte)).unwrap();
        }
        assert_eq!(mac.finalize().unwrap(), one_shot);
    }

    #[test]
    fn finalize_without_update_macs_empty_string() {
        let key = [0x17u8; 16];
        let mut fresh = StatefulHmac::new(HashType::Sha256, 32, &key).unwrap();
        let direct = fresh.finalize().unwrap();
        assert_eq!(direct.len(), 32);
        assert_eq!(direct, tag_of(HashType::Sha256, 32, &key, b""));
    }

    #[test]
    fn truncated_tag_is_digest_prefix() {
        let key = [0x33u8; 24];
        let data = b"truncate me";
        let full = tag_of(HashType::Sha256, 32, &key, data);
        let short = tag_of(HashType::Sha256, 10, &key, data);
        assert_eq!(short.len(), 10);
        assert_eq!(short, full[..10]);
    }

    #[test]
    fn short_key_rejected() {
        for len in [0, 1, MIN_KEY_LEN - 1] {
            let key = vec![0u8; len];
            assert_eq!(
                StatefulHmac::new(HashType::Sha256, 16, &key).unwrap_err(),
                CryptoError::InvalidKeySize(len)
            );
        }
        // The floor itself is accepted.
        assert!(StatefulHmac::new(HashType::Sha256, 16, &[0u8; MIN_KEY_LEN]).is_ok());
    }

    #[test]
    fn oversized_tag_rejected() {
        let key = [0u8; 16];
        assert_eq!(
            StatefulHmac::new(HashType::Sha256, 33, &key).unwrap_err(),
            CryptoError::InvalidTagSize {
                requested: 33,
                digest: 32,
            }
        );
        assert_eq!(
            StatefulHmac::new(HashType::Sha512, 65, &key).unwrap_err(),
            CryptoError::InvalidTagSize {
                requested: 65,
                digest: 64,
            }
        );
        // Native-length tags are fine.
        assert!(StatefulHmac::new(HashType::Sha384, 48, &key).is_ok());
    }

    #[test]
    fn sha1_rejected() {
        assert_eq!(
            StatefulHmac::new(HashType::Sha1, 20, &[0u8; 16]).unwrap_err(),
            CryptoError::UnsupportedHashType
        );
    }

    #[test]
    fn finalized_instance_is_spent() {
        let mut mac = StatefulHmac::new(HashType::Sha256, 32, &[0u8; 16]).unwrap();
        mac.update(b"data").unwrap();
        mac.finalize().unwrap();

        assert_eq!(mac.update(b"more").unwrap_err(), CryptoError::InvalidState);
        assert_eq!(mac.finalize().unwrap_err(), CryptoError::InvalidState);
    }

    #[test]
    fn different_keys_produce_different_tags() {
        let data = b"same message";
        let a = tag_of(HashType::Sha256, 32, &[0x01u8; 16], data);
        let b = tag_of(HashType::Sha256, 32, &[0x02u8; 16], data);
        assert_ne!(a, b);
    }

    #[test]
    fn all_supported_hashes_produce_full_tags() {
        let key = [0x55u8; 16];
        for hash_type in [
            HashType::Sha224,
            HashType::Sha256,
            HashType::Sha384,
            HashType::Sha512,
        ] {
            let tag = tag_of(hash_type, hash_type.digest_size(), &key, b"x");
            assert_eq!(tag.len(), hash_type.digest_size());
        }
    }

    #[test]
    fn usable_through_trait_object() {
        let mut mac: Box<dyn StatefulMac> =
            Box::new(StatefulHmac::new(HashType::Sha512, 16, &[0u8; 16]).unwrap());
        mac.update(b"dyn dispatch").unwrap();
        assert_eq!(mac.finalize().unwrap().len(), 16);
    }

    #[test]
    fn debug_reports_lifecycle_not_state() {
        let mut mac = StatefulHmac::new(HashType::Sha256, 32, &[0u8; 16]).unwrap();
        assert!(format!("{mac:?}").contains("Created"));
        mac.update(b"x").unwrap();
        assert!(format!("{mac:?}").contains("Updating"));
        mac.finalize().unwrap();
        assert!(format!("{mac:?}").contains("Finalized"));
    }
}
