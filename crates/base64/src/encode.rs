//! Fixed-buffer base64 encoding.

use crate::alphabet::Alphabet;

/// Shared encoder behind both alphabets.
///
/// Bytes are shifted into an accumulator eight bits at a time and drained six
/// bits at a time. Leftover bits are zero-extended into one final symbol, then
/// padding (if the alphabet has any) fills the last 4-symbol block.
pub(crate) fn encode_into(alphabet: &Alphabet, raw: &[u8], out: &mut [u8]) -> usize {
    let required = alphabet.encoded_size(raw.len());
    assert!(
        out.len() >= required,
        "base64 output buffer holds {} bytes, {} required",
        out.len(),
        required
    );

    let symbols = alphabet.symbols();
    let mut bits: u32 = 0;
    let mut bit_count: u32 = 0;
    let mut j = 0;

    for &octet in raw {
        bits = (bits << 8) | octet as u32;
        bit_count += 8;

        while bit_count >= 6 {
            bit_count -= 6;
            out[j] = symbols[((bits >> bit_count) & 0x3f) as usize];
            j += 1;
        }
        bits &= (1 << bit_count) - 1;
    }

    if bit_count > 0 {
        out[j] = symbols[((bits << (6 - bit_count)) & 0x3f) as usize];
        j += 1;
    }

    if let Some(pad) = alphabet.pad() {
        while j % 4 != 0 {
            out[j] = pad;
            j += 1;
        }
    }

    debug_assert_eq!(j, required);
    j
}

/// Encodes `raw` as standard base64 into the front of `out`.
///
/// Writes exactly [`encoded_size(raw.len())`](crate::encoded_size) bytes and
/// returns that count.
///
/// # Panics
///
/// Panics if `out` is shorter than `encoded_size(raw.len())`.
///
/// # Example
///
/// ```
/// use base64_codec::{encode, encoded_size};
///
/// let raw = b"leasure.";
/// let mut out = vec![0u8; encoded_size(raw.len())];
/// let len = encode(raw, &mut out);
/// assert_eq!(&out[..len], b"bGVhc3VyZS4=");
/// ```
pub fn encode(raw: &[u8], out: &mut [u8]) -> usize {
    encode_into(&Alphabet::STANDARD, raw, out)
}

/// Encodes `raw` as unpadded URL-safe base64 into the front of `out`.
///
/// Writes exactly [`url_encoded_size(raw.len())`](crate::url_encoded_size)
/// bytes and returns that count.
///
/// # Panics
///
/// Panics if `out` is shorter than `url_encoded_size(raw.len())`.
///
/// # Example
///
/// ```
/// use base64_codec::{url_encode, url_encoded_size};
///
/// let raw = b"leasure.";
/// let mut out = vec![0u8; url_encoded_size(raw.len())];
/// let len = url_encode(raw, &mut out);
/// assert_eq!(&out[..len], b"bGVhc3VyZS4");
/// ```
pub fn url_encode(raw: &[u8], out: &mut [u8]) -> usize {
    encode_into(&Alphabet::URL_SAFE, raw, out)
}
