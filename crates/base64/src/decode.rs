//! Fixed-buffer base64 decoding with strict validation.

use crate::alphabet::{Alphabet, PADDING};
use crate::constants::PAD;
use crate::Base64Error;

fn reject(err: Base64Error) -> Base64Error {
    log::debug!("base64 decode rejected: {err}");
    err
}

/// Shared decoder behind both alphabets.
///
/// The encoded length is checked against the size calculator before anything
/// is written. Trailing padding is only accepted when it completes a 4-byte
/// block. Any byte outside the alphabet aborts the whole call.
pub(crate) fn decode_into(
    alphabet: &Alphabet,
    enc: &[u8],
    out: &mut [u8],
) -> Result<usize, Base64Error> {
    if enc.is_empty() {
        return Ok(0);
    }

    let required = alphabet.decoded_size(enc.len());
    if required == 0 {
        return Err(reject(Base64Error::InvalidLength(enc.len())));
    }
    if out.len() < required {
        return Err(reject(Base64Error::OutputTooSmall {
            required,
            actual: out.len(),
        }));
    }

    let padding = match enc {
        [.., PAD, PAD] => 2,
        [.., PAD] => 1,
        _ => 0,
    };
    let data_len = enc.len() - padding;
    if padding > 0 && enc.len() % 4 != 0 {
        return Err(reject(Base64Error::MisplacedPadding { offset: data_len }));
    }

    let mut bits: u32 = 0;
    let mut bit_count: u32 = 0;
    let mut j = 0;

    for (offset, &byte) in enc[..data_len].iter().enumerate() {
        let sextet = match alphabet.lookup(byte) {
            PADDING => return Err(reject(Base64Error::MisplacedPadding { offset })),
            value if value < 0 => {
                return Err(reject(Base64Error::InvalidCharacter { offset, byte }));
            }
            value => value as u32,
        };
        bits = (bits << 6) | sextet;
        bit_count += 6;

        if bit_count >= 8 {
            bit_count -= 8;
            out[j] = (bits >> bit_count) as u8;
            j += 1;
            bits &= (1 << bit_count) - 1;
        }
    }

    Ok(j)
}

/// Decodes standard base64 from `enc` into the front of `out`.
///
/// `out` must hold at least [`decoded_size(enc.len())`](crate::decoded_size)
/// bytes. Returns the number of bytes written; empty input decodes to
/// `Ok(0)`. On error the contents of `out` are unspecified.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if `enc.len()` is not a multiple of 4.
/// - [`Base64Error::OutputTooSmall`] if `out` is shorter than required.
/// - [`Base64Error::MisplacedPadding`] if `=` appears before the last two
///   positions.
/// - [`Base64Error::InvalidCharacter`] for any byte outside `A-Za-z0-9+/`.
///
/// # Example
///
/// ```
/// use base64_codec::{decode, decoded_size};
///
/// let enc = b"TWE=";
/// let mut out = vec![0u8; decoded_size(enc.len())];
/// let len = decode(enc, &mut out).unwrap();
/// assert_eq!(&out[..len], b"Ma");
/// ```
pub fn decode(enc: &[u8], out: &mut [u8]) -> Result<usize, Base64Error> {
    decode_into(&Alphabet::STANDARD, enc, out)
}

/// Decodes URL-safe base64 from `enc` into the front of `out`.
///
/// `out` must hold at least
/// [`url_decoded_size(enc.len())`](crate::url_decoded_size) bytes. Padding
/// is optional, but when present it must complete the final 4-byte block.
///
/// # Errors
///
/// Same conditions as [`decode`], with `-` and `_` in place of `+` and `/`
/// and lengths of `4n + 1` rejected as [`Base64Error::InvalidLength`].
///
/// # Example
///
/// ```
/// use base64_codec::{url_decode, url_decoded_size};
///
/// let enc = b"bGVhc3VyZS4";
/// let mut out = vec![0u8; url_decoded_size(enc.len())];
/// let len = url_decode(enc, &mut out).unwrap();
/// assert_eq!(&out[..len], b"leasure.");
/// ```
pub fn url_decode(enc: &[u8], out: &mut [u8]) -> Result<usize, Base64Error> {
    decode_into(&Alphabet::URL_SAFE, enc, out)
}
