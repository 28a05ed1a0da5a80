//! CDMA pipeline error types

use std::io;
use thiserror::Error;

/// Result type for CDMA operations
pub type CdmaResult<T> = Result<T, CdmaError>;

/// Errors that can abort a CDMA run
///
/// Every variant is fatal: the pipeline either completes and produces a
/// full report, or fails before emitting any output.
#[derive(Error, Debug)]
pub enum CdmaError {
    /// Requested matrix order is not a positive power of two
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// More stations than orthogonal codes available
    #[error("insufficient codes: {stations} stations but only {codes} codes available")]
    InsufficientCodes { stations: usize, codes: usize },

    /// Character value does not fit the configured bit width
    #[error("encoding range: {0}")]
    EncodingRange(String),

    /// Missing or invalid configuration
    #[error("malformed config: {0}")]
    MalformedConfig(String),

    /// Failed to read a configuration file
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] io::Error),
}
