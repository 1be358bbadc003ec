//!
//! Cryptographic operations of the scheme
//!

mod sign;
mod verify;

pub mod keys;

pub use self::sign::sign;
pub use self::verify::{verify, VerifyError};
