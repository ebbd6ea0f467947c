//! Radar parameter set: the immutable input to every calculation.

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// One fully-populated radar parameter set.
///
/// Constructed once per calculation request and passed by reference; the
/// engine never mutates it. Value equality only — there is no identity
/// beyond the field values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarParameters {
    /// Transmitted power Pt (watts, > 0)
    pub transmitted_power: f64,
    /// Antenna gain G (decibels)
    pub antenna_gain_db: f64,
    /// Carrier wavelength λ (meters, > 0)
    pub wavelength: f64,
    /// Target radar cross-section σ (square meters, > 0)
    pub target_rcs: f64,
    /// Required signal-to-noise ratio at the detector (decibels)
    pub snr_db: f64,
    /// RCS perturbation, applied multiplicatively (decibels)
    pub delta1_db: f64,
    /// RCS perturbation, applied divisively (decibels)
    pub delta2_db: f64,
    /// Power perturbation, percent of transmitted power.
    /// Not clamped to 0–100: values above 100 model a power margin.
    pub percent1: f64,
    /// Power perturbation, percent of transmitted power (see `percent1`)
    pub percent2: f64,
}

impl Default for RadarParameters {
    fn default() -> Self {
        Self {
            transmitted_power: 100_000.0, // 100 kW
            antenna_gain_db: 30.0,
            wavelength: 0.03, // X-band, 10 GHz
            target_rcs: 1.0,  // small aircraft
            snr_db: 10.0,
            delta1_db: 3.0, // ≈ 2× RCS
            delta2_db: 3.0, // ≈ 0.5× RCS
            percent1: 50.0,
            percent2: 150.0, // power margin above nominal
        }
    }
}

impl RadarParameters {
    /// Check every domain precondition. The engine calls this before any
    /// root evaluation so a bad field is reported by name instead of
    /// surfacing later as a NaN range.
    pub fn validate(&self) -> Result<(), RangeError> {
        let fields = [
            ("transmitted_power", self.transmitted_power),
            ("antenna_gain_db", self.antenna_gain_db),
            ("wavelength", self.wavelength),
            ("target_rcs", self.target_rcs),
            ("snr_db", self.snr_db),
            ("delta1_db", self.delta1_db),
            ("delta2_db", self.delta2_db),
            ("percent1", self.percent1),
            ("percent2", self.percent2),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(RangeError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }

        let positive = [
            ("transmitted_power", self.transmitted_power),
            ("wavelength", self.wavelength),
            ("target_rcs", self.target_rcs),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(RangeError::InvalidParameter {
                    name,
                    value,
                    reason: "must be > 0",
                });
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builder — caller-side input collection
// ---------------------------------------------------------------------------

/// Collects per-field inputs one at a time (e.g. parsed form fields) and
/// produces a validated [`RadarParameters`].
///
/// A field left unset fails `build()` with [`RangeError::MissingInput`],
/// which is distinct from a supplied-but-invalid value.
#[derive(Clone, Debug, Default)]
pub struct RadarParametersBuilder {
    transmitted_power: Option<f64>,
    antenna_gain_db: Option<f64>,
    wavelength: Option<f64>,
    target_rcs: Option<f64>,
    snr_db: Option<f64>,
    delta1_db: Option<f64>,
    delta2_db: Option<f64>,
    percent1: Option<f64>,
    percent2: Option<f64>,
}

impl RadarParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transmitted_power(mut self, watts: f64) -> Self {
        self.transmitted_power = Some(watts);
        self
    }

    pub fn antenna_gain_db(mut self, db: f64) -> Self {
        self.antenna_gain_db = Some(db);
        self
    }

    pub fn wavelength(mut self, meters: f64) -> Self {
        self.wavelength = Some(meters);
        self
    }

    pub fn target_rcs(mut self, square_meters: f64) -> Self {
        self.target_rcs = Some(square_meters);
        self
    }

    pub fn snr_db(mut self, db: f64) -> Self {
        self.snr_db = Some(db);
        self
    }

    pub fn delta1_db(mut self, db: f64) -> Self {
        self.delta1_db = Some(db);
        self
    }

    pub fn delta2_db(mut self, db: f64) -> Self {
        self.delta2_db = Some(db);
        self
    }

    pub fn percent1(mut self, percent: f64) -> Self {
        self.percent1 = Some(percent);
        self
    }

    pub fn percent2(mut self, percent: f64) -> Self {
        self.percent2 = Some(percent);
        self
    }

    /// Fails with [`RangeError::MissingInput`] on the first unset field,
    /// then validates the assembled parameter set.
    pub fn build(self) -> Result<RadarParameters, RangeError> {
        fn take(value: Option<f64>, name: &'static str) -> Result<f64, RangeError> {
            value.ok_or(RangeError::MissingInput { name })
        }

        let params = RadarParameters {
            transmitted_power: take(self.transmitted_power, "transmitted_power")?,
            antenna_gain_db: take(self.antenna_gain_db, "antenna_gain_db")?,
            wavelength: take(self.wavelength, "wavelength")?,
            target_rcs: take(self.target_rcs, "target_rcs")?,
            snr_db: take(self.snr_db, "snr_db")?,
            delta1_db: take(self.delta1_db, "delta1_db")?,
            delta2_db: take(self.delta2_db, "delta2_db")?,
            percent1: take(self.percent1, "percent1")?,
            percent2: take(self.percent2, "percent2")?,
        };
        params.validate()?;
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
