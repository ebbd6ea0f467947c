//! Sensitivity sweep: SNR vs. range curves under parameter perturbation.
//!
//! # Curve families
//! - **RCS variation**:   σ, σ·δ1, σ/δ2 (δ1, δ2 converted from dB)
//! - **Power variation**: Pt, Pt·percent1/100, Pt·percent2/100
//!
//! All six curves share one strictly ascending SNR sample sequence over
//! [snr_db − w, snr_db + w]; only the dependent range values differ. Each
//! invocation recomputes from scratch and returns fresh curves.

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::params::RadarParameters;
use crate::range::range_from_linear;
use crate::units::db_to_linear;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What to do when a single SNR sample fails to evaluate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidSamplePolicy {
    /// Abort the whole sweep at the first failing sample (default).
    #[default]
    Fail,
    /// Drop failing samples from all six curves so the shared-sample
    /// invariant holds. A window with no surviving sample still fails.
    Skip,
}

/// Sweep window configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Half-width of the SNR window around `snr_db` (decibels, > 0)
    pub half_width_db: f64,
    /// Number of evenly spaced samples, endpoints inclusive (≥ 1)
    pub sample_count: usize,
    /// Per-sample failure policy
    pub on_invalid: InvalidSamplePolicy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            half_width_db: 10.0,
            sample_count: 50,
            on_invalid: InvalidSamplePolicy::Fail,
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One labelled curve of (snr_db, range_m) pairs, ascending in SNR.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Legend label, e.g. `"RCS + Delta1 (2.00)"`
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// SNR sample values of this curve.
    pub fn snr_samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(snr, _)| snr)
    }

    /// Range values of this curve.
    pub fn ranges(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, r)| r)
    }
}

/// A baseline curve plus its two perturbed variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveTriple {
    pub baseline: Curve,
    pub first: Curve,
    pub second: Curve,
}

impl CurveTriple {
    pub fn curves(&self) -> [&Curve; 3] {
        [&self.baseline, &self.first, &self.second]
    }
}

/// Output of one sweep: the two curve families.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// {σ, σ·δ1, σ/δ2}
    pub rcs_variation: CurveTriple,
    /// {Pt, Pt·percent1/100, Pt·percent2/100}
    pub power_variation: CurveTriple,
}

impl SweepResult {
    /// All six curves, RCS family first, baseline first within each family.
    pub fn curves(&self) -> [&Curve; 6] {
        let [a, b, c] = self.rcs_variation.curves();
        let [d, e, f] = self.power_variation.curves();
        [a, b, c, d, e, f]
    }
}

// ---------------------------------------------------------------------------
// Sweep
// ---------------------------------------------------------------------------

/// Sweep SNR over the configured window, holding everything else fixed, and
/// evaluate the range equation for the six perturbation variants at every
/// sample.
pub fn compute_sweep(
    params: &RadarParameters,
    config: &SweepConfig,
) -> Result<SweepResult, RangeError> {
    params.validate()?;
    if config.sample_count == 0 {
        return Err(RangeError::InvalidParameter {
            name: "sample_count",
            value: 0.0,
            reason: "must be >= 1",
        });
    }
    if !config.half_width_db.is_finite() || config.half_width_db <= 0.0 {
        return Err(RangeError::InvalidParameter {
            name: "half_width_db",
            value: config.half_width_db,
            reason: "must be finite and > 0",
        });
    }

    let gain_linear = db_to_linear(params.antenna_gain_db);
    let delta1_linear = db_to_linear(params.delta1_db);
    let delta2_linear = db_to_linear(params.delta2_db);
    let pt1 = params.transmitted_power * params.percent1 / 100.0;
    let pt2 = params.transmitted_power * params.percent2 / 100.0;

    // (transmitted power, RCS) per variant; the baseline appears in both
    // families so each family is self-contained for plotting.
    let variants: [(f64, f64); 6] = [
        (params.transmitted_power, params.target_rcs),
        (params.transmitted_power, params.target_rcs * delta1_linear),
        (params.transmitted_power, params.target_rcs / delta2_linear),
        (params.transmitted_power, params.target_rcs),
        (pt1, params.target_rcs),
        (pt2, params.target_rcs),
    ];

    let snr_samples = linspace(
        params.snr_db - config.half_width_db,
        params.snr_db + config.half_width_db,
        config.sample_count,
    );

    let mut points: [Vec<(f64, f64)>; 6] = Default::default();
    let mut last_dropped: Option<(f64, RangeError)> = None;

    for &snr_db in &snr_samples {
        let snr_linear = db_to_linear(snr_db);

        let mut row = [0.0f64; 6];
        let mut row_error = None;
        for (i, &(pt, rcs)) in variants.iter().enumerate() {
            match range_from_linear(pt, gain_linear, rcs, params.wavelength, snr_linear) {
                Ok(range) => row[i] = range,
                Err(err) => {
                    row_error = Some(err);
                    break;
                }
            }
        }

        match (row_error, config.on_invalid) {
            (None, _) => {
                for (i, &range) in row.iter().enumerate() {
                    points[i].push((snr_db, range));
                }
            }
            (Some(err), InvalidSamplePolicy::Fail) => {
                return Err(RangeError::InvalidSweepSample {
                    snr_db,
                    source: Box::new(err),
                });
            }
            (Some(err), InvalidSamplePolicy::Skip) => {
                last_dropped = Some((snr_db, err));
            }
        }
    }

    if points[0].is_empty() {
        if let Some((snr_db, source)) = last_dropped {
            return Err(RangeError::InvalidSweepSample {
                snr_db,
                source: Box::new(source),
            });
        }
    }

    let labels = [
        "RCS".to_string(),
        format!("RCS + Delta1 ({delta1_linear:.2})"),
        format!("RCS - Delta2 ({delta2_linear:.2})"),
        "Transmitted Power".to_string(),
        format!("Transmitted Power * {}%", params.percent1),
        format!("Transmitted Power * {}%", params.percent2),
    ];

    let [r0, r1, r2, w0, w1, w2] = points;
    let [l0, l1, l2, l3, l4, l5] = labels;

    Ok(SweepResult {
        rcs_variation: CurveTriple {
            baseline: Curve { label: l0, points: r0 },
            first: Curve { label: l1, points: r1 },
            second: Curve { label: l2, points: r2 },
        },
        power_variation: CurveTriple {
            baseline: Curve { label: l3, points: w0 },
            first: Curve { label: l4, points: w1 },
            second: Curve { label: l5, points: w2 },
        },
    })
}

/// Evenly spaced samples over [start, end], endpoints inclusive.
/// `count == 1` yields the window midpoint.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![(start + end) / 2.0];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::compute_range;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_sweep_has_fifty_shared_ascending_samples() {
        let result = compute_sweep(&RadarParameters::default(), &SweepConfig::default()).unwrap();
        let curves = result.curves();

        for curve in curves {
            assert_eq!(curve.points.len(), 50);
        }

        let reference: Vec<f64> = curves[0].snr_samples().collect();
        assert!(reference.windows(2).all(|w| w[0] < w[1]));
        assert_abs_diff_eq!(reference[0], 0.0, epsilon = 1e-12); // 10 − 10
        assert_abs_diff_eq!(reference[49], 20.0, epsilon = 1e-12); // 10 + 10

        for curve in &curves[1..] {
            let samples: Vec<f64> = curve.snr_samples().collect();
            assert_eq!(samples, reference);
        }
    }

    #[test]
    fn rcs_perturbations_bracket_the_baseline() {
        // delta1 (3 dB ≈ 2×) lifts every point, delta2 lowers every point.
        let result = compute_sweep(&RadarParameters::default(), &SweepConfig::default()).unwrap();
        let group = &result.rcs_variation;
        for i in 0..group.baseline.points.len() {
            assert!(group.first.points[i].1 > group.baseline.points[i].1);
            assert!(group.second.points[i].1 < group.baseline.points[i].1);
        }
    }

    #[test]
    fn power_margin_above_100_percent_lifts_the_curve() {
        // percent1 = 50 halves the power, percent2 = 150 scales it up.
        let result = compute_sweep(&RadarParameters::default(), &SweepConfig::default()).unwrap();
        let group = &result.power_variation;
        for i in 0..group.baseline.points.len() {
            assert!(group.first.points[i].1 < group.baseline.points[i].1);
            assert!(group.second.points[i].1 > group.baseline.points[i].1);
        }
    }

    #[test]
    fn single_sample_sweep_is_the_point_calculation_at_the_midpoint() {
        let params = RadarParameters::default();
        let config = SweepConfig {
            sample_count: 1,
            ..SweepConfig::default()
        };
        let result = compute_sweep(&params, &config).unwrap();
        let point = compute_range(&params).unwrap();

        for curve in [&result.rcs_variation.baseline, &result.power_variation.baseline] {
            assert_eq!(curve.points.len(), 1);
            assert_abs_diff_eq!(curve.points[0].0, params.snr_db, epsilon = 1e-12);
            assert_abs_diff_eq!(curve.points[0].1, point, epsilon = 1e-9);
        }
    }

    #[test]
    fn fail_policy_reports_the_failing_snr() {
        // 1e300 W with SNR near −120 dB overflows the quartic-root argument
        // at the low end of the window only.
        let params = RadarParameters {
            transmitted_power: 1e300,
            antenna_gain_db: 0.0,
            wavelength: 1.0,
            snr_db: -110.0,
            ..RadarParameters::default()
        };
        match compute_sweep(&params, &SweepConfig::default()) {
            Err(RangeError::InvalidSweepSample { snr_db, .. }) => {
                assert_abs_diff_eq!(snr_db, -120.0, epsilon = 1e-9);
            }
            other => panic!("expected InvalidSweepSample, got {other:?}"),
        }
    }

    #[test]
    fn skip_policy_drops_failing_samples_from_every_curve() {
        let params = RadarParameters {
            transmitted_power: 1e300,
            antenna_gain_db: 0.0,
            wavelength: 1.0,
            snr_db: -110.0,
            ..RadarParameters::default()
        };
        let config = SweepConfig {
            on_invalid: InvalidSamplePolicy::Skip,
            ..SweepConfig::default()
        };
        let result = compute_sweep(&params, &config).unwrap();
        let len = result.rcs_variation.baseline.points.len();
        assert!(len > 0 && len < 50, "some but not all samples survive");
        for curve in result.curves() {
            assert_eq!(curve.points.len(), len);
        }
    }

    #[test]
    fn skip_policy_with_no_surviving_sample_still_fails() {
        // Every sample in the window overflows.
        let params = RadarParameters {
            transmitted_power: 1e300,
            antenna_gain_db: 0.0,
            wavelength: 1.0,
            snr_db: -160.0,
            ..RadarParameters::default()
        };
        let config = SweepConfig {
            on_invalid: InvalidSamplePolicy::Skip,
            ..SweepConfig::default()
        };
        assert!(matches!(
            compute_sweep(&params, &config),
            Err(RangeError::InvalidSweepSample { .. })
        ));
    }

    #[test]
    fn zero_sample_count_rejected() {
        let config = SweepConfig {
            sample_count: 0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            compute_sweep(&RadarParameters::default(), &config),
            Err(RangeError::InvalidParameter {
                name: "sample_count",
                ..
            })
        ));
    }

    #[test]
    fn curve_labels_follow_the_perturbation_values() {
        let result = compute_sweep(&RadarParameters::default(), &SweepConfig::default()).unwrap();
        // 3 dB → 2.00 in linear scale after rounding
        assert_eq!(result.rcs_variation.first.label, "RCS + Delta1 (2.00)");
        assert_eq!(
            result.power_variation.second.label,
            "Transmitted Power * 150%"
        );
    }

    #[test]
    fn linspace_endpoints_inclusive() {
        let samples = linspace(0.0, 20.0, 5);
        assert_eq!(samples, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }
}
