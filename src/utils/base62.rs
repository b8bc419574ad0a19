//! Base62 encoding of database row ids into short codes.
//!
//! The mapping is bijective: every id produced by the store encodes to
//! exactly one code and decodes back to the same id. Codes derived this way
//! are as short as the id allows (no padding). Custom codes supplied by
//! clients are opaque strings and must never be passed to [`decode`].

/// Fixed 62-symbol alphabet: digits, lowercase, uppercase.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Encodes a non-negative integer as a base62 string.
///
/// `encode(0)` yields `"0"`; larger values produce the shortest
/// representation with the most significant symbol first.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = Vec::new();
    while n > 0 {
        buf.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    buf.reverse();

    // Alphabet bytes are ASCII, so the buffer is valid UTF-8.
    String::from_utf8(buf).expect("base62 alphabet is ASCII")
}

/// Decodes a base62 string back to the integer it was encoded from.
///
/// Returns `None` if the input is empty, contains a character outside the
/// alphabet, or overflows `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }

    let mut n: u64 = 0;
    for byte in code.bytes() {
        let digit = ALPHABET.iter().position(|&c| c == byte)? as u64;
        n = n.checked_mul(BASE)?.checked_add(digit)?;
    }

    Some(n)
}
