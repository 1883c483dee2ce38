/// Log-law wind profile model
///
/// Holds the reference datum (speed at a given height) and the selected
/// roughness length, and regenerates the profile sample sequence whenever
/// a parameter changes. The curve follows the boundary-layer log law:
/// v(h) = k * ln(h / z0) with k chosen so the datum lies on the curve.

use serde::{Deserialize, Serialize};

/// Terrain roughness lengths z0 in meters, from open water up to city
/// centers. Ordered strictly increasing; selected by index via the slider.
pub const ROUGHNESS_TABLE: [f64; 9] = [0.0002, 0.0024, 0.03, 0.055, 0.1, 0.2, 0.4, 0.8, 1.6];

/// Highest sampled height in meters; samples run 0, 1, .., MAX_HEIGHT_M.
pub const MAX_HEIGHT_M: usize = 100;

/// The user-adjustable physical parameters of the profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileParameters {
    /// Wind speed at the reference height, m/s. Unconstrained sign — the
    /// datum can be dragged below the speed axis origin.
    pub reference_speed: f64,
    /// Height of the datum, m.
    pub reference_height: f64,
    /// Index into ROUGHNESS_TABLE.
    pub roughness_index: usize,
}

impl Default for ProfileParameters {
    fn default() -> Self {
        Self {
            reference_speed: 5.0,
            reference_height: 3.0,
            roughness_index: 4,
        }
    }
}

impl ProfileParameters {
    /// The active roughness length z0 in meters
    pub fn roughness_length(&self) -> f64 {
        ROUGHNESS_TABLE[self.roughness_index]
    }
}

/// The profile model: parameters plus the derived sample sequence
#[derive(Debug, Clone)]
pub struct ProfileModel {
    params: ProfileParameters,
    /// [speed, height] pairs: the fixed (0,0) origin followed by one
    /// sample per integer height 1..=MAX_HEIGHT_M. Heights never change;
    /// recomputes overwrite speeds only.
    samples: Vec<[f64; 2]>,
}

impl ProfileModel {
    pub fn new(params: ProfileParameters) -> Self {
        let mut samples = Vec::with_capacity(MAX_HEIGHT_M + 1);
        samples.push([0.0, 0.0]);
        for h in 1..=MAX_HEIGHT_M {
            samples.push([0.0, h as f64]);
        }
        let mut model = Self { params, samples };
        model.recompute();
        model
    }

    pub fn params(&self) -> ProfileParameters {
        self.params
    }

    pub fn samples(&self) -> &[[f64; 2]] {
        &self.samples
    }

    /// Move the reference datum and regenerate the curve
    pub fn set_reference_datum(&mut self, speed: f64, height: f64) {
        self.params.reference_speed = speed;
        self.params.reference_height = height;
        log::debug!("Datum moved: {:.3} m/s @ {:.3} m", speed, height);
        self.recompute();
    }

    /// Select a roughness length by table index and regenerate the curve.
    /// The slider keeps the index in range by construction; anything else
    /// is clamped here.
    pub fn set_roughness_index(&mut self, index: usize) {
        let clamped = index.min(ROUGHNESS_TABLE.len() - 1);
        if clamped != index {
            log::warn!("Roughness index {} out of range, clamped to {}", index, clamped);
        }
        self.params.roughness_index = clamped;
        log::debug!("Roughness length: {} m", self.params.roughness_length());
        self.recompute();
    }

    /// Replace all parameters at once (session load)
    pub fn set_parameters(&mut self, params: ProfileParameters) {
        self.params = ProfileParameters {
            roughness_index: params.roughness_index.min(ROUGHNESS_TABLE.len() - 1),
            ..params
        };
        self.recompute();
    }

    /// Recompute speeds in place from the current parameters.
    ///
    /// A datum at h0 <= 0 or at h0 == z0 makes the common factor
    /// non-finite and every speed NaN/inf; the curve renders degenerate
    /// but nothing fails.
    fn recompute(&mut self) {
        let z0 = self.params.roughness_length();
        let k = self.params.reference_speed / (self.params.reference_height / z0).ln();
        if !k.is_finite() {
            log::warn!(
                "Degenerate datum (h0={} m, z0={} m): profile speeds are not finite",
                self.params.reference_height,
                z0
            );
        }
        for sample in self.samples.iter_mut().skip(1) {
            sample[0] = k * (sample[1] / z0).ln();
        }
    }
}

impl Default for ProfileModel {
    fn default() -> Self {
        Self::new(ProfileParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sequence_shape() {
        let model = ProfileModel::default();
        assert_eq!(model.samples().len(), MAX_HEIGHT_M + 1, "origin plus one sample per meter");
        assert_eq!(model.samples()[0], [0.0, 0.0], "first sample is the fixed origin");
        for (i, s) in model.samples().iter().enumerate().skip(1) {
            assert_eq!(s[1], i as f64, "heights are the fixed integers 1..=100");
        }
    }

    #[test]
    fn reference_datum_lies_on_curve() {
        let model = ProfileModel::new(ProfileParameters {
            reference_speed: 5.0,
            reference_height: 3.0,
            roughness_index: 4,
        });
        let at_h3 = model.samples()[3];
        assert_eq!(at_h3[1], 3.0);
        assert!(
            (at_h3[0] - 5.0).abs() < 1e-9,
            "speed at the reference height should reproduce the datum, got {}",
            at_h3[0]
        );
    }

    #[test]
    fn known_profile_values() {
        // z0 = 0.1: k = 5 / ln(30), v(10) = k * ln(100)
        let model = ProfileModel::new(ProfileParameters {
            reference_speed: 5.0,
            reference_height: 3.0,
            roughness_index: 4,
        });
        let k = 5.0 / (30.0f64).ln();
        assert!((k - 1.4723).abs() < 1e-4);
        let at_h10 = model.samples()[10];
        let expected = k * (100.0f64).ln();
        assert!((at_h10[0] - expected).abs() < 1e-12);
        assert!((at_h10[0] - 6.774).abs() < 1e-3);
    }

    #[test]
    fn speeds_monotone_for_positive_datum() {
        let model = ProfileModel::new(ProfileParameters {
            reference_speed: 8.0,
            reference_height: 10.0,
            roughness_index: 2,
        });
        for pair in model.samples().windows(2).skip(1) {
            assert!(
                pair[1][0] >= pair[0][0],
                "speed must not decrease with height: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn recompute_is_deterministic() {
        let mut a = ProfileModel::default();
        a.set_reference_datum(7.25, 12.5);
        let first: Vec<[f64; 2]> = a.samples().to_vec();
        a.set_reference_datum(7.25, 12.5);
        assert_eq!(first, a.samples(), "same datum twice must give bit-identical samples");
    }

    #[test]
    fn roughness_index_is_clamped() {
        let mut model = ProfileModel::default();
        model.set_roughness_index(42);
        assert_eq!(model.params().roughness_index, ROUGHNESS_TABLE.len() - 1);
        assert!(model.samples().iter().all(|s| s[0].is_finite()));
    }

    #[test]
    fn loaded_parameters_are_clamped_too() {
        let mut model = ProfileModel::default();
        model.set_parameters(ProfileParameters {
            reference_speed: 6.0,
            reference_height: 20.0,
            roughness_index: 99,
        });
        assert_eq!(model.params().roughness_index, ROUGHNESS_TABLE.len() - 1);
    }

    #[test]
    fn degenerate_datum_stays_non_finite_without_panic() {
        let mut model = ProfileModel::default();
        // Height equal to the active roughness length: ln(1) = 0 divides k
        model.set_reference_datum(5.0, ROUGHNESS_TABLE[4]);
        assert_eq!(model.samples()[0], [0.0, 0.0], "origin is untouched");
        for s in model.samples().iter().skip(1) {
            assert!(!s[0].is_finite(), "expected non-finite speed at h={}", s[1]);
        }

        // Non-positive height: ln of a non-positive ratio
        model.set_reference_datum(5.0, -2.0);
        assert!(model.samples().iter().skip(1).any(|s| !s[0].is_finite()));
    }

    #[test]
    fn negative_datum_speed_flips_the_curve() {
        let model = ProfileModel::new(ProfileParameters {
            reference_speed: -4.0,
            reference_height: 5.0,
            roughness_index: 4,
        });
        let top = model.samples()[MAX_HEIGHT_M];
        assert!(top[0] < 0.0, "negative datum speed keeps the curve below zero");
    }

    #[test]
    fn roughness_table_is_strictly_increasing() {
        for pair in ROUGHNESS_TABLE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
