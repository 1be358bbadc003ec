//!
//! Canonical JSON serialisation of request bodies
//!
//! Two differently formatted serialisations of the same payload digest to
//! different values and fail verification, so both peers have to produce the
//! same bytes: object keys in lexicographic order, no insignificant
//! whitespace. Running a value through [`serde_json::Value`] gives us both,
//! since its object representation is backed by a `BTreeMap`.
//!

use serde::Serialize;

// TODO: NFC-normalise string values once the registry settles whether peers
//       are expected to normalise unicode before digesting.

/// Serialise a value into its canonical JSON byte form
///
/// # Errors
///
/// Returns an error if the value doesn't map onto JSON (non-string map keys
/// and the like)
#[inline]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize,
{
    let value = serde_json::to_value(value)?;
    serde_json::to_vec(&value)
}
