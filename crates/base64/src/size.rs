//! Buffer size calculations.
//!
//! Callers size their output buffers with these before calling the
//! fixed-buffer codec functions, so each formula matches exactly what the
//! encoder writes or the upper bound of what the decoder writes.

/// Number of bytes standard (padded) base64 encoding of `decoded_len` bytes
/// occupies. Always a multiple of 4.
///
/// # Example
///
/// ```
/// use base64_codec::encoded_size;
///
/// assert_eq!(encoded_size(0), 0);
/// assert_eq!(encoded_size(4), 8);
/// ```
pub const fn encoded_size(decoded_len: usize) -> usize {
    let groups = decoded_len / 3;
    if decoded_len % 3 == 0 {
        groups * 4
    } else {
        groups * 4 + 4
    }
}

/// Output buffer size required to decode `encoded_len` bytes of standard
/// base64, or `0` when `encoded_len` is not a multiple of 4.
///
/// The result may exceed the decoded payload by up to two bytes when the
/// input is padded.
pub const fn decoded_size(encoded_len: usize) -> usize {
    let rv = (encoded_len / 4) * 3;
    if encoded_size(rv) != encoded_len {
        return 0;
    }
    rv
}

/// Number of bytes URL-safe (unpadded) base64 encoding of `decoded_len`
/// bytes occupies.
pub const fn url_encoded_size(decoded_len: usize) -> usize {
    let remainder = decoded_len % 3;
    let tail = if remainder == 0 { 0 } else { remainder + 1 };
    (decoded_len / 3) * 4 + tail
}

/// Output buffer size required to decode `encoded_len` bytes of URL-safe
/// base64, or `0` when no encoding has that length.
///
/// A remainder of 1 is always rejected: a single trailing character carries
/// six bits and cannot complete a byte.
pub const fn url_decoded_size(encoded_len: usize) -> usize {
    let remainder = encoded_len % 4;
    if remainder == 1 {
        return 0;
    }
    let tail = if remainder == 0 { 0 } else { remainder - 1 };
    let rv = (encoded_len / 4) * 3 + tail;
    if url_encoded_size(rv) != encoded_len {
        return 0;
    }
    rv
}
