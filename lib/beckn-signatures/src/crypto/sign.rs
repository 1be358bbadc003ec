use ring::signature::Ed25519KeyPair;

/// Sign a payload and encode the signature in Base64
///
/// Ed25519 is deterministic, so the same payload under the same key always
/// produces the same signature; no RNG is involved on this path.
#[inline]
#[must_use]
pub fn sign(payload: &[u8], key: &Ed25519KeyPair) -> String {
    base64_simd::STANDARD.encode_to_string(key.sign(payload))
}
