//! Point calculation of maximum detection range.
//!
//! # Radar range equation
//! range = ( (Pt · G² · σ · λ²) / ((4π)³ · SNR_lin) ) ^ (1/4)
//!
//! where Pt is transmitted power (W), G the linear antenna gain, σ the
//! target RCS (m²), λ the wavelength (m) and SNR_lin the linear
//! signal-to-noise ratio.
//!
//! The quartic-root argument is checked before the root is taken: a zero
//! SNR or a non-positive parameter must surface as
//! [`RangeError::InvalidParameter`], never as a NaN or complex result.

use std::f64::consts::PI;

use crate::error::RangeError;
use crate::params::RadarParameters;
use crate::units::db_to_linear;

/// Compute the maximum detection range in meters for one parameter set.
pub fn compute_range(params: &RadarParameters) -> Result<f64, RangeError> {
    params.validate()?;
    let gain_linear = db_to_linear(params.antenna_gain_db);
    let snr_linear = db_to_linear(params.snr_db);
    range_from_linear(
        params.transmitted_power,
        gain_linear,
        params.target_rcs,
        params.wavelength,
        snr_linear,
    )
}

/// Core of the range equation, shared by the point calculation and the
/// sweep. All inputs are already in linear scale; perturbed values (scaled
/// power, scaled RCS) flow through the same guards as nominal ones.
pub(crate) fn range_from_linear(
    transmitted_power: f64,
    gain_linear: f64,
    target_rcs: f64,
    wavelength: f64,
    snr_linear: f64,
) -> Result<f64, RangeError> {
    let inputs = [
        ("transmitted_power", transmitted_power),
        ("antenna_gain_linear", gain_linear),
        ("target_rcs", target_rcs),
        ("wavelength", wavelength),
        ("snr_linear", snr_linear),
    ];
    for (name, value) in inputs {
        if !value.is_finite() || value <= 0.0 {
            return Err(RangeError::InvalidParameter {
                name,
                value,
                reason: "must be finite and > 0",
            });
        }
    }

    let numerator =
        transmitted_power * gain_linear.powi(2) * target_rcs * wavelength.powi(2);
    let argument = numerator / ((4.0 * PI).powi(3) * snr_linear);
    if !argument.is_finite() || argument < 0.0 {
        return Err(RangeError::InvalidParameter {
            name: "range_argument",
            value: argument,
            reason: "quartic-root argument must be finite and non-negative",
        });
    }

    Ok(argument.powf(0.25))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
