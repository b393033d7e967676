//! Standard base64 encoding into an owned string.

use crate::alphabet::Alphabet;

/// Encodes a byte slice to a standard base64 string.
///
/// # Arguments
///
/// * `uint8` - The bytes to encode.
///
/// # Returns
///
/// A base64-encoded string with standard padding. Empty input yields an
/// empty string.
///
/// # Example
///
/// ```
/// use base64_codec::to_base64;
///
/// let encoded = to_base64(b"Man");
/// assert_eq!(encoded, "TWFu");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    Alphabet::STANDARD.encode_to_string(uint8)
}
