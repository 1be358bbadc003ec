use super::SignatureHeader;
use crate::ALGORITHM;
use std::fmt::Write;

/// Render a signature header into its exact wire form
///
/// Field order, quoting, and the `Signature ` scheme tag are all fixed;
/// counterpart implementations match this byte-for-byte.
#[inline]
#[must_use]
pub fn serialise(header: &SignatureHeader<'_>) -> String {
    let mut buffer = String::from("Signature ");

    let _ = write!(buffer, "keyId=\"{}\"", header.key_id);
    let _ = write!(buffer, ",algorithm=\"{ALGORITHM}\"");
    let _ = write!(buffer, ",created=\"{}\"", header.created);
    let _ = write!(buffer, ",expires=\"{}\"", header.expires);

    buffer.push_str(",headers=\"");
    for item in itertools::intersperse(header.headers.iter().copied(), " ") {
        buffer.push_str(item);
    }
    buffer.push('"');

    let _ = write!(buffer, ",signature=\"{}\"", header.signature);

    buffer
}
