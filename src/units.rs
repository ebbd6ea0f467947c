//! Decibel ↔ linear-scale conversion.
//!
//! linear = 10^(dB/10). Decibels may legitimately be negative, producing
//! linear values in (0, 1); there is no error path.

/// Convert a decibel quantity to linear scale.
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Convert a linear quantity back to decibels.
pub fn linear_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
