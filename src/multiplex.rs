//! Channel Multiplexer
//!
//! The shared medium itself: every station transmits at once, and the
//! channel is the exact coordinate-wise sum of their chip signals. No
//! noise, attenuation, or timing error is modeled. Decoders only ever
//! see the composite, never a per-station signal.
//!
//! Stations may have encoded different message lengths; summation runs
//! position-wise up to the shortest signal present.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::multiplex::multiplex;
//!
//! let a = vec![vec![1, -1], vec![1, 1]];
//! let b = vec![vec![-1, -1], vec![1, -1]];
//! let composite = multiplex(&[a, b]);
//! assert_eq!(composite, vec![vec![0, -2], vec![2, 0]]);
//! ```

use crate::types::{EncodedSignal, TransmittedSignal};

/// Sum all stations' encoded signals into the transmitted composite.
///
/// Pure and stateless; station order does not affect the result. An
/// empty station set yields an empty signal.
pub fn multiplex(signals: &[EncodedSignal]) -> TransmittedSignal {
    let positions = signals.iter().map(Vec::len).min().unwrap_or(0);
    (0..positions)
        .map(|position| {
            let width = signals
                .iter()
                .map(|signal| signal[position].len())
                .min()
                .unwrap_or(0);
            let mut composite = vec![0i32; width];
            for signal in signals {
                for (slot, &chip) in composite.iter_mut().zip(signal[position].iter()) {
                    *slot += chip as i32;
                }
            }
            composite
        })
        .collect()
}
