//!
//! Construction of the canonical string that actually gets signed
//!

use crate::{digest::DIGEST_LABEL, window::ValidityWindow};

/// Build the signing string from a body digest and a validity window
///
/// The layout is fixed by the network registry and matched byte-for-byte on
/// the other side; reordering the lines, touching the labels, or appending a
/// trailing newline all break verification:
///
/// ```text
/// (created): <created>
/// (expires): <expires>
/// digest: BLAKE-512=<digest>
/// ```
#[inline]
#[must_use]
pub fn construct(digest: &str, window: &ValidityWindow) -> String {
    format!(
        "(created): {}\n(expires): {}\ndigest: {DIGEST_LABEL}{digest}",
        window.created, window.expires,
    )
}
