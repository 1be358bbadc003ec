//!
//! Message authentication for Beckn network traffic
//!
//! Subscribers prove the authenticity and integrity of the JSON bodies they
//! exchange by digesting the body with BLAKE2b, signing a canonical signing
//! string bound to a validity window with Ed25519, and shipping the result
//! as a structured `Authorization` header.
//!
//! Only the asymmetric scheme the network registry prescribes is supported;
//! there are no shared secrets anywhere in the protocol.
//!

pub mod canonical;
pub mod clock;
pub mod crypto;
pub mod digest;
pub mod easy;
pub mod header;
pub mod signing_string;
pub mod window;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The only signature algorithm the scheme supports
pub const ALGORITHM: &str = "ed25519";

/// The fixed list of signed pseudo-headers, in signing order
pub const SIGNED_HEADERS: &str = "(created) (expires) digest";
