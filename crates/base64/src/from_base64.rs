//! Standard base64 decoding into an owned buffer.

use crate::alphabet::Alphabet;
use crate::Base64Error;

/// Decodes a standard base64 string to bytes.
///
/// Accepts anything byte-like (`&str`, `&[u8]`, `String`, ...). The input
/// must be padded to a multiple of 4 characters.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid. Empty input
/// decodes to an empty vector.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64;
///
/// let decoded = from_base64("TWFu").unwrap();
/// assert_eq!(decoded, b"Man");
/// assert!(from_base64("TW|u").is_err());
/// ```
pub fn from_base64<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>, Base64Error> {
    Alphabet::STANDARD.decode_to_vec(encoded.as_ref())
}
