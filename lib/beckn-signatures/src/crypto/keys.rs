//!
//! Codecs for key material at rest
//!
//! Private keys travel as the Base64 encoding of the 64-byte extended signing
//! key (the 32-byte seed followed by the 32-byte public half), public keys as
//! the Base64 encoding of the raw 32-byte verify key. The registry never sees
//! PEM or DER.
//!

use miette::Diagnostic;
use ring::{
    rand::{SecureRandom, SystemRandom},
    signature::{Ed25519KeyPair, KeyPair as _, UnparsedPublicKey, ED25519},
};
use thiserror::Error;

/// Length of the extended signing key: seed followed by the public half
pub const EXTENDED_KEY_LEN: usize = 64;

/// Length of the Ed25519 seed
pub const SEED_LEN: usize = 32;

/// Length of the raw verify key
pub const PUBLIC_KEY_LEN: usize = 32;

/// Key decoding error
#[derive(Debug, Diagnostic, Error)]
pub enum KeyError {
    /// The key wasn't valid Base64
    #[error(transparent)]
    Base64(#[from] base64_simd::Error),

    /// The key decoded to the wrong length for its role
    #[error("Expected {expected} key bytes, got {actual}")]
    InvalidLength {
        /// Length the role requires
        expected: usize,

        /// Length the input decoded to
        actual: usize,
    },

    /// The system RNG refused to produce key material
    #[error("Random generator failure")]
    Random,

    /// ring rejected the key material
    #[error(transparent)]
    Rejected(#[from] ring::error::KeyRejected),
}

/// Freshly encoded keypair, ready for the registry
pub struct EncodedKeyPair {
    /// Base64 extended signing key. Never leaves the subscriber.
    pub private_key: String,

    /// Base64 raw verify key, published on the registry
    pub public_key: String,
}

/// Decode a Base64 extended signing key into an Ed25519 signer
///
/// Only the seed half is actually needed to reconstruct the signer; the
/// embedded public half is checked against it so a corrupted pair fails here
/// instead of producing signatures nobody can verify.
///
/// # Errors
///
/// Returns an error if the input isn't Base64, isn't
/// [`EXTENDED_KEY_LEN`] bytes long, or holds an inconsistent seed/public pair
#[inline]
pub fn decode_signing_key(b64: &str) -> Result<Ed25519KeyPair, KeyError> {
    let extended = base64_simd::STANDARD.decode_to_vec(b64)?;
    if extended.len() != EXTENDED_KEY_LEN {
        return Err(KeyError::InvalidLength {
            expected: EXTENDED_KEY_LEN,
            actual: extended.len(),
        });
    }

    let (seed, public_key) = extended.split_at(SEED_LEN);
    Ed25519KeyPair::from_seed_and_public_key(seed, public_key).map_err(KeyError::from)
}

/// Decode a Base64 verify key
///
/// # Errors
///
/// Returns an error if the input isn't Base64 or isn't [`PUBLIC_KEY_LEN`]
/// bytes long
#[inline]
pub fn decode_verify_key(b64: &str) -> Result<UnparsedPublicKey<Vec<u8>>, KeyError> {
    let raw = base64_simd::STANDARD.decode_to_vec(b64)?;
    if raw.len() != PUBLIC_KEY_LEN {
        return Err(KeyError::InvalidLength {
            expected: PUBLIC_KEY_LEN,
            actual: raw.len(),
        });
    }

    Ok(UnparsedPublicKey::new(&ED25519, raw))
}

/// Encode a seed and verify key into their at-rest representations
///
/// # Errors
///
/// Returns an error if `public_key` isn't [`PUBLIC_KEY_LEN`] bytes long
pub fn encode_key_pair(
    seed: &[u8; SEED_LEN],
    public_key: &[u8],
) -> Result<EncodedKeyPair, KeyError> {
    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(KeyError::InvalidLength {
            expected: PUBLIC_KEY_LEN,
            actual: public_key.len(),
        });
    }

    let mut extended = [0; EXTENDED_KEY_LEN];
    extended[..SEED_LEN].copy_from_slice(seed);
    extended[SEED_LEN..].copy_from_slice(public_key);

    Ok(EncodedKeyPair {
        private_key: base64_simd::STANDARD.encode_to_string(extended),
        public_key: base64_simd::STANDARD.encode_to_string(public_key),
    })
}

/// Derive the encoded keypair belonging to a fixed seed
///
/// Deterministic by construction. Tests want this; production callers want
/// [`generate`].
///
/// # Errors
///
/// Returns an error if ring rejects the seed
pub fn from_seed(seed: &[u8; SEED_LEN]) -> Result<EncodedKeyPair, KeyError> {
    let key_pair = Ed25519KeyPair::from_seed_unchecked(seed)?;
    encode_key_pair(seed, key_pair.public_key().as_ref())
}

/// Generate a fresh Ed25519 keypair from the system CSPRNG
///
/// # Errors
///
/// Returns an error if the system RNG fails or ring rejects the generated
/// seed
pub fn generate() -> Result<EncodedKeyPair, KeyError> {
    let rng = SystemRandom::new();

    let mut seed = [0; SEED_LEN];
    rng.fill(&mut seed).map_err(|_| KeyError::Random)?;

    from_seed(&seed)
}
