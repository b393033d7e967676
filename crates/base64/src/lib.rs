//! Base64 encoding and decoding into caller-supplied buffers.
//!
//! This crate provides:
//! - Standard base64 (`A-Z a-z 0-9 + /`) with `=` padding
//! - URL-safe base64 (`- _` in place of `+ /`) without padding
//! - Size calculators that tell callers exactly how large a buffer to
//!   allocate before calling the fixed-buffer `encode`/`decode` functions
//! - Allocating wrappers (`to_base64`, `from_base64`, ...) on top of them
//!
//! Decoding is strict: any byte outside the alphabet, padding anywhere but
//! the end of the final 4-byte block, or an impossible input length rejects
//! the whole input.
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, decoded_size, encode, encoded_size};
//!
//! let data = b"leasure.";
//! let mut enc = vec![0u8; encoded_size(data.len())];
//! let enc_len = encode(data, &mut enc);
//! assert_eq!(&enc[..enc_len], b"bGVhc3VyZS4=");
//!
//! let mut raw = vec![0u8; decoded_size(enc_len)];
//! let raw_len = decode(&enc[..enc_len], &mut raw).unwrap();
//! assert_eq!(&raw[..raw_len], data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod from_base64;
mod from_base64_url;
mod size;
mod to_base64;
mod to_base64_url;

pub use alphabet::Alphabet;
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD};
pub use decode::{decode, url_decode};
pub use encode::{encode, url_encode};
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use size::{decoded_size, encoded_size, url_decoded_size, url_encoded_size};
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;

/// Standard alphabet with `=` padding.
pub const STANDARD: Alphabet = Alphabet::STANDARD;

/// URL-safe alphabet without padding.
pub const URL_SAFE: Alphabet = Alphabet::URL_SAFE;

/// Error type for base64 decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// No encoding produced by the alphabet has this length.
    #[error("invalid base64 length {0}")]
    InvalidLength(usize),
    /// A byte outside the alphabet.
    #[error("invalid base64 character 0x{byte:02x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },
    /// Padding that does not complete the final 4-byte block.
    #[error("misplaced base64 padding at offset {offset}")]
    MisplacedPadding { offset: usize },
    /// The output buffer is shorter than the size calculator requires.
    #[error("output buffer holds {actual} bytes, {required} required")]
    OutputTooSmall { required: usize, actual: usize },
}
