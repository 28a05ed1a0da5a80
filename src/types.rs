//! Core types for CDMA signal processing
//!
//! This module defines the fundamental types used throughout the CDMA
//! pipeline. Everything on the channel is integer-valued:
//!
//! - A **chip** is a single ±1 element of a spreading code. One data bit
//!   is spread across `n` chips, where `n` is the code length.
//! - A **composite** value is the sum of many chips from different
//!   stations transmitting at the same instant. With `k` concurrent
//!   stations it ranges over `-k..=k`, so it needs a wider integer than
//!   the chips themselves.
//!
//! ```text
//!   station A chips:  +1 -1 +1 +1
//!   station B chips:  -1 -1 +1 -1
//!   composite:         0 -2 +2  0
//! ```

/// A single spreading-code element, always +1 or -1.
pub type Chip = i8;

/// One spreading code, or one transmitted symbol: a vector of chips.
pub type ChipVector = Vec<Chip>;

/// A station's encoded message: one chip vector per message bit.
pub type EncodedSignal = Vec<ChipVector>;

/// One position of the aggregate channel: coordinate-wise chip sums.
pub type CompositeVector = Vec<i32>;

/// The full aggregate signal crossing the channel.
pub type TransmittedSignal = Vec<CompositeVector>;

/// A recovered data bit, 0 or 1.
pub type Bit = u8;
