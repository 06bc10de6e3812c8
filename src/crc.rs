//! CRC-32 over 32-bit words
//! Parameters:
//! - Poly:    0x04C11DB7
//! - Init:    0xFFFFFFFF
//! - RefIn:   true (per 32-bit word)
//! - RefOut:  true
//! - XorOut:  0xFFFFFFFF
//!
//!  how it works:
//!   - every word is bit-reflected as a whole 32-bit value
//!   - the reflected word is shifted into the register MSB first
//!   - the final register is reflected again and inverted
//!
//! feeding a word reflected and MSB-first is the same as feeding it LSB-first,
//! so this ends up equal to the usual CRC-32 (zlib, PNG, ethernet) run over
//! each word's little-endian bytes.

use crate::reflect::reflect;

/// generator polynomial, normal (non-reflected) form
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// register value before the first word
pub const INIT: u32 = 0xFFFF_FFFF;

/// applied to the reflected register at the end
pub const XOR_OUT: u32 = 0xFFFF_FFFF;

/// CRC-32 of `words`, in order.
///
/// an empty slice is fine and gives `0x00000000` (the untouched register
/// reflected and inverted).
pub fn calculate_crc(words: &[u32]) -> u32 {
    finalize(words.iter().fold(INIT, |crc, &word| fold_word(crc, word)))
}

/// CRC-32 of the first `length` words of `words`.
///
/// for callers that carry the count separately from the buffer.
///
/// # Panics
///
/// if `length > words.len()`. it never reads past the slice.
pub fn calculate_crc_prefix(words: &[u32], length: usize) -> u32 {
    assert!(
        length <= words.len(),
        "crc length {} exceeds {} available words",
        length,
        words.len()
    );
    calculate_crc(&words[..length])
}

/// push one word through the register
pub(crate) const fn fold_word(mut crc: u32, word: u32) -> u32 {
    let block = reflect(word, 32);

    let mut i = 0;
    while i < 32 {
        let bit = (block >> (31 - i)) & 1;
        let top = (crc >> 31) & 1;
        crc <<= 1;
        if top ^ bit == 1 {
            crc ^= POLYNOMIAL;
        }
        i += 1;
    }
    crc
}

pub(crate) const fn finalize(crc: u32) -> u32 {
    reflect(crc, 32) ^ XOR_OUT
}
