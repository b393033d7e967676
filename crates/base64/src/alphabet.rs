//! Alphabet tables shared by the encoder and the decoder.

use std::fmt;

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, PAD};
use crate::decode::decode_into;
use crate::encode::encode_into;
use crate::size::{decoded_size, encoded_size, url_decoded_size, url_encoded_size};
use crate::Base64Error;

/// Decode table entry for bytes outside the alphabet.
pub(crate) const INVALID: i8 = -1;

/// Decode table entry for the padding byte.
pub(crate) const PADDING: i8 = -2;

/// Builds the byte -> sextet table at compile time.
///
/// Both alphabets recognise `=` as padding on input, even the URL-safe one
/// which never emits it.
const fn build_decode_table(symbols: &[u8; 64]) -> [i8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[symbols[i] as usize] = i as i8;
        i += 1;
    }
    table[PAD as usize] = PADDING;
    table
}

/// A base64 alphabet: 64 output symbols, an optional padding byte, and the
/// inverse lookup table used when decoding.
///
/// Only the two variants below exist; every codec operation in this crate is
/// a single implementation parameterised by one of them.
///
/// # Example
///
/// ```
/// use base64_codec::Alphabet;
///
/// let encoded = Alphabet::URL_SAFE.encode_to_string(b"leasure.");
/// assert_eq!(encoded, "bGVhc3VyZS4");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8; 64],
    pad: Option<u8>,
    decode_table: [i8; 256],
}

impl Alphabet {
    /// `A-Z a-z 0-9 + /` with `=` padding.
    pub const STANDARD: Alphabet = Alphabet::new(ALPHABET_BYTES, Some(PAD));

    /// `A-Z a-z 0-9 - _` without padding.
    pub const URL_SAFE: Alphabet = Alphabet::new(ALPHABET_URL_BYTES, None);

    const fn new(symbols: &'static [u8; 64], pad: Option<u8>) -> Self {
        Self {
            symbols,
            pad,
            decode_table: build_decode_table(symbols),
        }
    }

    /// The 64 symbols, indexed by sextet value.
    pub fn symbols(&self) -> &'static [u8; 64] {
        self.symbols
    }

    /// The padding byte appended by the encoder, if any.
    pub fn pad(&self) -> Option<u8> {
        self.pad
    }

    /// Returns the sextet value of `byte`, or `None` when the byte is not
    /// one of the 64 symbols (padding included).
    pub fn sextet(&self, byte: u8) -> Option<u8> {
        let value = self.lookup(byte);
        if value < 0 {
            None
        } else {
            Some(value as u8)
        }
    }

    #[inline]
    pub(crate) fn lookup(&self, byte: u8) -> i8 {
        self.decode_table[byte as usize]
    }

    /// Number of bytes [`Alphabet::encode`] writes for `decoded_len` input
    /// bytes.
    pub const fn encoded_size(&self, decoded_len: usize) -> usize {
        match self.pad {
            Some(_) => encoded_size(decoded_len),
            None => url_encoded_size(decoded_len),
        }
    }

    /// Output buffer size needed to decode `encoded_len` bytes, or `0` when
    /// no encoding produced by this alphabet has that length.
    pub const fn decoded_size(&self, encoded_len: usize) -> usize {
        match self.pad {
            Some(_) => decoded_size(encoded_len),
            None => url_decoded_size(encoded_len),
        }
    }

    /// Encodes `raw` into the front of `out`, returning the number of bytes
    /// written.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `self.encoded_size(raw.len())`.
    pub fn encode(&self, raw: &[u8], out: &mut [u8]) -> usize {
        encode_into(self, raw, out)
    }

    /// Decodes `enc` into the front of `out`, returning the number of bytes
    /// written.
    pub fn decode(&self, enc: &[u8], out: &mut [u8]) -> Result<usize, Base64Error> {
        decode_into(self, enc, out)
    }

    /// Encodes `raw` into a freshly allocated string.
    pub fn encode_to_string(&self, raw: &[u8]) -> String {
        let mut buf = vec![0u8; self.encoded_size(raw.len())];
        let written = encode_into(self, raw, &mut buf);
        buf[..written].iter().map(|&b| b as char).collect()
    }

    /// Decodes `enc` into a freshly allocated vector sized to the decoded
    /// payload.
    pub fn decode_to_vec(&self, enc: &[u8]) -> Result<Vec<u8>, Base64Error> {
        let mut buf = vec![0u8; self.decoded_size(enc.len())];
        let written = decode_into(self, enc, &mut buf)?;
        buf.truncate(written);
        Ok(buf)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(self.symbols))
            .field("pad", &self.pad.map(char::from))
            .finish()
    }
}
