//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use rand::Rng;

/// Every sextet 0..64 in order; encodes to the full alphabet.
pub const ALL_SEXTETS: &[u8; 48] = b"\x00\x10\x83\x10\x51\x87\x20\x92\x8b\x30\
\xd3\x8f\x41\x14\x93\x51\x55\x97\x61\x96\
\x9b\x71\xd7\x9f\x82\x18\xa3\x92\x59\xa7\
\xa2\x9a\xab\xb2\xdb\xaf\xc3\x1c\xb3\xd3\
\x5d\xb7\xe3\x9e\xbb\xf3\xdf\xbf";

pub const QUOTE: &str = concat!(
    "Man is distinguished, not only by his reason, but by this ",
    "singular passion from other animals, which is a lust of ",
    "the mind, that by a perseverance of delight in the ",
    "continued and indefatigable generation of knowledge, ",
    "exceeds the short vehemence of any carnal pleasure.",
);

pub const QUOTE_BASE64: &str = concat!(
    "TWFuIGlzIGRpc3Rpbmd1aXNoZWQsIG5vdCBvbmx5IGJ5IGhpcyByZWFzb24s",
    "IGJ1dCBieSB0aGlzIHNpbmd1bGFyIHBhc3Npb24gZnJvbSBvdGhlciBhbmlt",
    "YWxzLCB3aGljaCBpcyBhIGx1c3Qgb2YgdGhlIG1pbmQsIHRoYXQgYnkgYSBw",
    "ZXJzZXZlcmFuY2Ugb2YgZGVsaWdodCBpbiB0aGUgY29udGludWVkIGFuZCBp",
    "bmRlZmF0aWdhYmxlIGdlbmVyYXRpb24gb2Yga25vd2xlZGdlLCBleGNlZWRz",
    "IHRoZSBzaG9ydCB2ZWhlbWVuY2Ugb2YgYW55IGNhcm5hbCBwbGVhc3VyZS4=",
);

/// Inputs every decoder must reject, regardless of alphabet.
pub const REJECTED: &[&[u8]] = &[
    b"a",
    b"asdf1\xffjj",
    b"asdf1=jj",
    b"==",
    b"b==",
    b"ba=",
    b"bad==",
    b"bad4==",
    b"bad4=",
    b"as d",
    b"as!d",
    b"as\"d",
    b"as#d",
    b"as$d",
    b"as%d",
    b"as&d",
    b"as'd",
    b"as(d",
    b"as)d",
    b"as*d",
    b"as.d",
    b"as:d",
    b"as;d",
    b"as<d",
    b"as>d",
    b"as?d",
    b"as@d",
    b"as[d",
    b"as\\d",
    b"as]d",
    b"as^d",
    b"as`d",
    b"as{d",
    b"as|d",
    b"as}d",
    b"as~d",
    b"bs\x00p",
    b"bs\x01p",
    b"bs\x02p",
    b"bs\x03p",
    b"bs\x04p",
    b"bs\x05p",
    b"bs\x06p",
    b"bs\x07p",
    b"bs\x08p",
    b"bs\x09p",
    b"bs\x0ap",
    b"TWFub",
    b"YXN=cmUu",
    b"YXN\xffmcUu",
];

pub fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}
