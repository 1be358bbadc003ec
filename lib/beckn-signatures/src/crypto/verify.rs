use miette::Diagnostic;
use ring::signature::UnparsedPublicKey;
use thiserror::Error;

/// Why a signature failed to check out
///
/// Only exists so the rejection reason can be logged. Callers deciding trust
/// go through the boolean surface in [`crate::easy`], which collapses both
/// variants; an untrusted peer never learns which one it hit.
#[derive(Debug, Diagnostic, Error)]
pub enum VerifyError {
    /// The signature wasn't valid Base64
    #[error(transparent)]
    Base64(#[from] base64_simd::Error),

    /// The signature doesn't match the payload under this verify key
    #[error("Signature mismatch")]
    Mismatch,
}

/// Check a Base64 signature against a payload
///
/// The comparison happens inside ring and is constant-time; no signature
/// bytes are ever compared manually here.
///
/// # Errors
///
/// Returns an error if the signature doesn't decode or doesn't verify
#[inline]
pub fn verify<B>(
    payload: &[u8],
    encoded_signature: &str,
    key: &UnparsedPublicKey<B>,
) -> Result<(), VerifyError>
where
    B: AsRef<[u8]>,
{
    let signature = base64_simd::STANDARD.decode_to_vec(encoded_signature)?;
    key.verify(payload, &signature)
        .map_err(|_| VerifyError::Mismatch)
}
