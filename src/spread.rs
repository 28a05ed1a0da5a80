//! Spreading Encoder
//!
//! Turns a station's text message into the chip-rate signal it puts on
//! the air. Each character is taken apart into `bit_width` bits,
//! most-significant bit first, and every bit is spread across the whole
//! code length: a 1-bit transmits the station's code as-is, a 0-bit
//! transmits its negation.
//!
//! ```text
//!   code = [+1, -1, +1, -1]
//!
//!   bit 1  →  [+1, -1, +1, -1]
//!   bit 0  →  [-1, +1, -1, +1]
//! ```
//!
//! The output rate is therefore `bit_width * code length` chips per
//! character.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::spread::encode;
//!
//! let code = [1, -1];
//! let signal = encode("A", 8, &code).unwrap(); // 'A' = 0b01000001
//! assert_eq!(signal.len(), 8);
//! assert_eq!(signal[0], vec![-1, 1]); // leading 0 bit
//! assert_eq!(signal[1], vec![1, -1]); // the 1 bit
//! ```

use crate::error::{CdmaError, CdmaResult};
use crate::types::{Bit, Chip, EncodedSignal};

/// Spread a message into one chip vector per bit.
///
/// Fails with [`CdmaError::EncodingRange`] when a character's scalar
/// value does not fit in `bit_width` bits.
pub fn encode(message: &str, bit_width: usize, code: &[Chip]) -> CdmaResult<EncodedSignal> {
    let mut signal = Vec::with_capacity(message.chars().count() * bit_width);
    for ch in message.chars() {
        for bit in char_bits(ch, bit_width)? {
            if bit == 1 {
                signal.push(code.to_vec());
            } else {
                signal.push(code.iter().map(|&chip| -chip).collect());
            }
        }
    }
    Ok(signal)
}

/// A character's `bit_width`-bit representation, MSB first.
pub fn char_bits(ch: char, bit_width: usize) -> CdmaResult<Vec<Bit>> {
    let value = ch as u32;
    if bit_width < 32 && value >= 1u32 << bit_width {
        return Err(CdmaError::EncodingRange(format!(
            "character {ch:?} (value {value}) does not fit in {bit_width} bits"
        )));
    }
    Ok((0..bit_width)
        .rev()
        .map(|position| {
            if position < 32 {
                ((value >> position) & 1) as Bit
            } else {
                0
            }
        })
        .collect())
}
