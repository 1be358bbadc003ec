//!
//! Easy and fool-proof signing and verification
//!
//! Composes the digest, signing string, and header codecs into the two
//! operations a subscriber actually performs: stamping an outbound request
//! body with an `Authorization` header value, and deciding whether an inbound
//! one vouches for the body it arrived with.
//!

use crate::{
    clock::Clock,
    crypto::{
        self,
        keys::{self, KeyError},
    },
    digest,
    header::{self, SignatureHeader},
    signing_string,
    window::{ValidityWindow, ALLOWED_CLOCK_SKEW},
    BoxError, ALGORITHM, SIGNED_HEADERS,
};
use derive_builder::Builder;
use std::time::Duration;
use tracing::{debug, instrument};

/// Subscriber-side signer
#[derive(Builder, Clone)]
#[builder(pattern = "owned")]
pub struct Signer<'a> {
    /// Subscriber id registered on the network
    subscriber_id: &'a str,

    /// Identifier of the key within the subscriber's registry entry
    unique_key_id: &'a str,

    /// Base64 extended signing key
    private_key: &'a str,
}

impl<'a> Signer<'a> {
    /// Return a builder of the signer
    pub fn builder() -> SignerBuilder<'a> {
        SignerBuilder::default()
    }
}

impl Signer<'_> {
    /// Produce the `Authorization` header value for a request body
    ///
    /// `body` has to be the canonical byte serialisation of the payload (see
    /// [`crate::canonical`]); the counterpart recomputes the digest from the
    /// bytes it receives, not from any reformatted copy. Windows usually come
    /// out of [`ValidityWindow::from_clock`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured private key doesn't decode. That's
    /// a hard failure: without a usable key there is no request to send.
    #[instrument(skip_all)]
    pub fn sign(&self, body: &[u8], window: ValidityWindow) -> Result<String, KeyError> {
        let key = keys::decode_signing_key(self.private_key)?;

        let digest = digest::digest(body);
        let signing_string = signing_string::construct(&digest, &window);
        let signature = crypto::sign(signing_string.as_bytes(), &key);

        let key_id = format!("{}|{}|{ALGORITHM}", self.subscriber_id, self.unique_key_id);
        let header = SignatureHeader {
            key_id: &key_id,
            headers: SIGNED_HEADERS.split_whitespace().collect(),
            signature: &signature,
            created: window.created,
            expires: window.expires,
        };

        Ok(header::serialise(&header))
    }
}

/// Counterpart-side verifier
#[derive(Builder, Clone)]
#[builder(pattern = "owned")]
pub struct Verifier {
    /// Clock the freshness policy reads
    #[builder(default)]
    clock: Clock,

    /// Whether to reject signatures whose validity window doesn't cover "now".
    /// Only turn this off when replaying recorded traffic.
    #[builder(default = "true")]
    enforce_window: bool,

    /// Tolerated clock drift between peers
    #[builder(default = "ALLOWED_CLOCK_SKEW")]
    allowed_skew: Duration,
}

impl Verifier {
    /// Return a builder of the verifier
    pub fn builder() -> VerifierBuilder {
        VerifierBuilder::default()
    }

    /// Decide whether an `Authorization` header vouches for a request body
    ///
    /// `get_key` resolves the header's key id to the Base64 verify key
    /// registered for that subscriber.
    ///
    /// The signing string is rebuilt from the window the header itself claims;
    /// shifting the timestamps shifts the string the signature is checked
    /// against, so tampering stays detectable. Every failure mode collapses to
    /// `false`. The caller gets a single trust decision, and the cause only
    /// surfaces in the debug logs so the sender can't tell a malformed header
    /// apart from a bad signature.
    #[instrument(skip_all)]
    pub fn verify<F, E>(&self, header_value: &str, body: &[u8], get_key: F) -> bool
    where
        F: FnOnce(&str) -> Result<String, E>,
        E: Into<BoxError>,
    {
        let header = match header::parse(header_value) {
            Ok(header) => header,
            Err(error) => {
                debug!(?error, "Malformed authorisation header");
                return false;
            }
        };

        let window = header.window();
        if self.enforce_window && !window.is_current(&self.clock, self.allowed_skew) {
            debug!(
                created = window.created,
                expires = window.expires,
                "Validity window out of range"
            );
            return false;
        }

        let encoded_key = match get_key(header.key_id) {
            Ok(key) => key,
            Err(error) => {
                let error = error.into();
                debug!(%error, "Failed to resolve the verify key");
                return false;
            }
        };

        let verify_key = match keys::decode_verify_key(&encoded_key) {
            Ok(key) => key,
            Err(error) => {
                debug!(?error, "Malformed verify key");
                return false;
            }
        };

        let digest = digest::digest(body);
        let signing_string = signing_string::construct(&digest, &window);

        if let Err(error) = crypto::verify(signing_string.as_bytes(), header.signature, &verify_key)
        {
            debug!(?error, "Rejected signature");
            return false;
        }

        true
    }
}
