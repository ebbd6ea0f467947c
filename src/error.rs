//! Error taxonomy for the range engine.
//!
//! The engine never recovers from invalid input: it reports immediately and
//! leaves presentation (dialog, inline message) to the caller. Calculations
//! are deterministic, so retrying with the same input is meaningless.

use thiserror::Error;

/// Everything that can go wrong while evaluating the range equation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A numeric field is non-finite or violates its domain precondition
    /// (≤ 0 where > 0 is required, or a quartic-root argument that is
    /// negative or non-finite).
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A required field was never supplied (caller-side input collection,
    /// distinct from a supplied-but-invalid value).
    #[error("required input `{name}` was not supplied")]
    MissingInput { name: &'static str },

    /// A sweep aborted because one SNR sample failed to evaluate. Carries
    /// the failing SNR value and the underlying parameter error.
    #[error("sweep failed at SNR = {snr_db} dB")]
    InvalidSweepSample {
        snr_db: f64,
        #[source]
        source: Box<RangeError>,
    },
}
