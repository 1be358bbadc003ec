//!
//! The structured `Authorization` header and its wire representation
//!

mod parse;
mod serialise;

pub use self::parse::{parse, ParseError};
pub use self::serialise::serialise;

use crate::window::ValidityWindow;
use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Parsed view of an `Authorization` header value
///
/// Borrows from the raw header it was parsed out of. The timestamps are the
/// window the *sender claims*; nothing here has been checked yet.
#[derive(Clone, Debug)]
pub struct SignatureHeader<'a> {
    /// Composite identifier of the signing key
    pub key_id: &'a str,

    /// Ordered list of the signed pseudo-headers
    pub headers: Vec<&'a str>,

    /// Base64-encoded Ed25519 signature
    pub signature: &'a str,

    /// Timestamp the signature was created
    pub created: u64,

    /// Timestamp the signature expires
    pub expires: u64,
}

impl SignatureHeader<'_> {
    /// The validity window the header claims
    #[must_use]
    pub fn window(&self) -> ValidityWindow {
        ValidityWindow {
            created: self.created,
            expires: self.expires,
        }
    }
}

/// Error splitting a composite key id
#[derive(Debug, Diagnostic, Error)]
#[error("Malformed key id, expected `subscriber|unique key id|algorithm`")]
pub struct MalformedKeyId;

/// Composite key identifier: `{subscriber_id}|{unique_key_id}|{algorithm}`
///
/// The verifier uses it to figure out whose key to fetch from the registry
/// and which algorithm the key speaks; there is no separate algorithm
/// negotiation.
#[derive(Clone, Copy)]
pub struct KeyId<'a> {
    /// Subscriber id registered on the network
    pub subscriber_id: &'a str,

    /// Identifier of the key within the subscriber's registry entry
    pub unique_key_id: &'a str,

    /// Name of the signature algorithm the key belongs to
    pub algorithm: &'a str,
}

impl<'a> KeyId<'a> {
    /// Split a composite key id into its segments
    ///
    /// # Errors
    ///
    /// Returns an error if the id doesn't consist of three `|`-separated
    /// segments
    pub fn parse(raw: &'a str) -> Result<Self, MalformedKeyId> {
        let mut segments = raw.splitn(3, '|');
        let (Some(subscriber_id), Some(unique_key_id), Some(algorithm)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(MalformedKeyId);
        };

        // `splitn` leaves any extra separators inside the last segment
        if algorithm.contains('|') {
            return Err(MalformedKeyId);
        }

        Ok(Self {
            subscriber_id,
            unique_key_id,
            algorithm,
        })
    }
}

impl fmt::Display for KeyId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.subscriber_id, self.unique_key_id, self.algorithm
        )
    }
}

#[cfg(test)]
mod test {
    use super::KeyId;

    #[test]
    fn key_id_round_trip() {
        let key_id = KeyId::parse("buyer-app.example.org|207|ed25519").unwrap();

        assert_eq!(key_id.subscriber_id, "buyer-app.example.org");
        assert_eq!(key_id.unique_key_id, "207");
        assert_eq!(key_id.algorithm, "ed25519");
        assert_eq!(key_id.to_string(), "buyer-app.example.org|207|ed25519");
    }

    #[test]
    fn key_id_wrong_segment_count() {
        assert!(KeyId::parse("buyer-app.example.org|207").is_err());
        assert!(KeyId::parse("buyer-app.example.org|207|ed25519|extra").is_err());
    }
}
