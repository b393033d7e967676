//! URL-safe base64 encoding into an owned string.

use crate::alphabet::Alphabet;

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and does not add padding.
///
/// # Example
///
/// ```
/// use base64_codec::to_base64_url;
///
/// let encoded = to_base64_url(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    Alphabet::URL_SAFE.encode_to_string(uint8)
}
