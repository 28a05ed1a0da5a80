//! Bit-to-Character Reassembler
//!
//! The last stage of the receiver: groups a station's recovered bit
//! stream into fixed-width chunks and converts each chunk back into a
//! character. Chunks are read big-endian, matching the MSB-first order
//! the encoder emitted.
//!
//! A trailing partial chunk (fewer than `bit_width` bits) is silently
//! dropped. That truncation is the one intentional lossy behavior in
//! the pipeline and is part of the contract, not an error.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::reassemble::reassemble;
//!
//! let bits = [0, 1, 0, 0, 0, 1, 1, 1]; // 'G'
//! assert_eq!(reassemble(&bits, 8).unwrap(), "G");
//! ```

use crate::error::{CdmaError, CdmaResult};
use crate::types::Bit;

/// Rebuild text from a decoded bit stream.
///
/// Fails with [`CdmaError::EncodingRange`] when a chunk's value is not
/// a valid Unicode scalar (only reachable for widths above 8).
pub fn reassemble(bits: &[Bit], bit_width: usize) -> CdmaResult<String> {
    assert!(bit_width > 0, "bit_width must be positive");
    let mut text = String::with_capacity(bits.len() / bit_width);
    for chunk in bits.chunks_exact(bit_width) {
        let value = chunk
            .iter()
            .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit & 1));
        let ch = char::from_u32(value).ok_or_else(|| {
            CdmaError::EncodingRange(format!(
                "decoded value {value:#x} is not a valid character"
            ))
        })?;
        text.push(ch);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spread::char_bits;

    #[test]
    fn test_single_character() {
        let bits = char_bits('S', 8).unwrap();
        assert_eq!(reassemble(&bits, 8).unwrap(), "S");
    }

    #[test]
    fn test_multiple_characters_in_order() {
        let mut bits = Vec::new();
        for ch in "SUN".chars() {
            bits.extend(char_bits(ch, 8).unwrap());
        }
        assert_eq!(reassemble(&bits, 8).unwrap(), "SUN");
    }

    #[test]
    fn test_trailing_partial_group_dropped() {
        let mut bits = char_bits('X', 8).unwrap();
        bits.extend([1, 0, 1]); // incomplete last character
        assert_eq!(reassemble(&bits, 8).unwrap(), "X");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(reassemble(&[], 8).unwrap(), "");
    }

    #[test]
    fn test_narrow_width_round_trip() {
        // 4-bit alphabet: control characters 0..=15
        let bits = char_bits('\u{9}', 4).unwrap();
        assert_eq!(reassemble(&bits, 4).unwrap(), "\u{9}");
    }

    #[test]
    fn test_surrogate_value_rejected() {
        // 0xD800 in 16 bits is not a Unicode scalar value.
        let bits = [1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(
            reassemble(&bits, 16).unwrap_err(),
            CdmaError::EncodingRange(_)
        ));
    }
}
