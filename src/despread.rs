//! Despreading Decoder
//!
//! Recovers every station's bit stream from the summed composite by
//! correlation. For each transmitted position the receiver takes the
//! dot product of the composite vector with each station's known code;
//! orthogonality cancels all other stations' contributions, leaving
//! `±n` scaled by the station's own bit.
//!
//! Decision rule: a strictly positive dot product decodes as bit 1,
//! anything else (including exactly zero) as bit 0. The zero case shows
//! up when a station simply was not transmitting at that position, and
//! the asymmetric tie-break is part of the wire contract.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::assign::CodeAssignment;
//! use cdma_sim::despread::decode;
//! use cdma_sim::multiplex::multiplex;
//! use cdma_sim::spread::encode;
//! use cdma_sim::walsh::WalshMatrix;
//!
//! let walsh = WalshMatrix::new(2).unwrap();
//! let stations = ["A".to_string()];
//! let assignment = CodeAssignment::generate(&stations, &walsh, Some(0)).unwrap();
//! let signal = encode("\u{2}", 2, assignment.code("A")).unwrap(); // bits 1,0
//! let bits = decode(&multiplex(&[signal]), &assignment);
//! assert_eq!(bits["A"], vec![1, 0]);
//! ```

use crate::assign::CodeAssignment;
use crate::types::{Bit, TransmittedSignal};
use std::collections::BTreeMap;

/// Correlate the composite against every station's code.
///
/// Returns one decoded bit per transmitted position per station, in the
/// original transmission order.
pub fn decode(
    transmitted: &TransmittedSignal,
    assignment: &CodeAssignment,
) -> BTreeMap<String, Vec<Bit>> {
    let mut decoded: BTreeMap<String, Vec<Bit>> = assignment
        .stations()
        .map(|station| (station.to_string(), Vec::with_capacity(transmitted.len())))
        .collect();

    for composite in transmitted {
        for (station, code) in assignment.iter() {
            let dot: i32 = composite
                .iter()
                .zip(code.iter())
                .map(|(&sum, &chip)| sum * chip as i32)
                .sum();
            let bit: Bit = if dot > 0 { 1 } else { 0 };
            decoded
                .get_mut(station)
                .expect("station inserted above")
                .push(bit);
        }
    }
    decoded
}
