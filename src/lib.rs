//! `range_engine` — Maximum radar detection range from the radar range
//! equation, with SNR sensitivity sweeps.
//!
//! # Module layout
//! - [`units`]  — decibel ↔ linear conversion
//! - [`params`] — [`RadarParameters`] value object and builder
//! - [`error`]  — error taxonomy
//! - [`range`]  — point calculation of detection range
//! - [`sweep`]  — sensitivity sweep producing paired curve families
//!
//! The engine is pure: no internal state, no I/O, no locks, safe to call
//! repeatedly and concurrently. Presentation (input forms, plotting,
//! debouncing of recalculation) lives entirely in the caller.

pub mod error;
pub mod params;
pub mod range;
pub mod sweep;
pub mod units;

pub use error::RangeError;
pub use params::{RadarParameters, RadarParametersBuilder};
pub use range::compute_range;
pub use sweep::{
    compute_sweep, Curve, CurveTriple, InvalidSamplePolicy, SweepConfig, SweepResult,
};
