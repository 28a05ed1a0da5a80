//! # CDMA Multiplexing Simulator
//!
//! This crate demonstrates Code-Division Multiple Access: several
//! stations transmit character messages *simultaneously* over one
//! shared channel, and a receiver recovers every message intact.
//!
//! Separation comes from orthogonal Walsh–Hadamard spreading codes.
//! Each station multiplies its data bits against its own ±1 code; the
//! channel is the plain sum of everyone's chips; the receiver
//! correlates the composite against each known code and applies a sign
//! decision.
//!
//! ## Signal Flow
//!
//! ```text
//! TX: text → bits (MSB first) → ±code per bit ─┐
//! TX: text → bits (MSB first) → ±code per bit ─┼─► Σ composite
//! TX: text → bits (MSB first) → ±code per bit ─┘        │
//!                                                       ▼
//! RX: text ← chars ← bits ← sign(dot(composite, code)) per station
//! ```
//!
//! The channel is ideal: no noise, attenuation, or synchronization
//! error is modeled, so decoding is exact whenever the codes are
//! orthogonal.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::prelude::*;
//!
//! let walsh = WalshMatrix::new(8).unwrap();
//! let stations: Vec<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
//! let assignment = CodeAssignment::generate(&stations, &walsh, Some(42)).unwrap();
//!
//! let signals = vec![
//!     encode("HI", 8, assignment.code("A")).unwrap(),
//!     encode("YO", 8, assignment.code("B")).unwrap(),
//! ];
//! let transmitted = multiplex(&signals);
//! let bits = decode(&transmitted, &assignment);
//!
//! assert_eq!(reassemble(&bits["A"], 8).unwrap(), "HI");
//! assert_eq!(reassemble(&bits["B"], 8).unwrap(), "YO");
//! ```

pub mod assign;
pub mod config;
pub mod despread;
pub mod error;
pub mod multiplex;
pub mod reassemble;
pub mod simulator;
pub mod spread;
pub mod types;
pub mod walsh;

pub use assign::CodeAssignment;
pub use config::SimConfig;
pub use despread::decode;
pub use error::{CdmaError, CdmaResult};
pub use multiplex::multiplex;
pub use reassemble::reassemble;
pub use simulator::{run, RunReport};
pub use spread::encode;
pub use walsh::WalshMatrix;

/// Commonly used items, re-exported in one place.
pub mod prelude {
    pub use crate::assign::CodeAssignment;
    pub use crate::config::SimConfig;
    pub use crate::despread::decode;
    pub use crate::error::{CdmaError, CdmaResult};
    pub use crate::multiplex::multiplex;
    pub use crate::reassemble::reassemble;
    pub use crate::simulator::{run, RunReport};
    pub use crate::spread::encode;
    pub use crate::types::{Bit, Chip, ChipVector, CompositeVector, EncodedSignal, TransmittedSignal};
    pub use crate::walsh::WalshMatrix;
}
