//!
//! Deterministic digests of request bodies
//!

use blake2::{Blake2b512, Digest};

/// Label the digest carries inside the signing string
pub const DIGEST_LABEL: &str = "BLAKE-512=";

/// Compute the Base64-encoded BLAKE2b-512 digest of a request body
///
/// The digest is a pure function of the exact bytes, so peers only agree on
/// it if they agree on the serialisation of the body. See [`crate::canonical`]
/// for the byte form the network expects.
#[inline]
#[must_use]
pub fn digest(body: &[u8]) -> String {
    base64_simd::STANDARD.encode_to_string(Blake2b512::digest(body))
}
