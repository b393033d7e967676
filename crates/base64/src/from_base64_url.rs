//! URL-safe base64 decoding into an owned buffer.

use crate::alphabet::Alphabet;
use crate::Base64Error;

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`).
/// Padding may be omitted; if present it must complete the last block.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64_url;
///
/// let decoded = from_base64_url("aGVsbG8gd29ybGQ").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64_url<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>, Base64Error> {
    Alphabet::URL_SAFE.decode_to_vec(encoded.as_ref())
}
