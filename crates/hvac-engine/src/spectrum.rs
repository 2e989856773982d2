//! Octave-band spectrum representation and the handful of pure arithmetic
//! operations every calculator and the traversal engine build on.

use serde::{Deserialize, Serialize};

/// Center frequencies of the eight octave bands carried throughout the engine, in Hz.
pub const FREQUENCY_BANDS: [f64; 8] = [63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0];

/// A-weighting correction applied per band when computing an overall dB(A) level.
const A_WEIGHTS: [f64; 8] = [-26.2, -16.1, -8.6, -3.2, 0.0, 1.2, 1.0, -1.1];

/// Shape used to estimate a full spectrum from a single overall dB(A) figure.
const DBA_ESTIMATE_SHAPE: [f64; 8] = [0.0, -2.0, -1.0, 0.0, 1.0, 2.0, 1.0, -1.0];

/// NC curve table: rating -> per-band ceiling, ordered 63 Hz..8 kHz.
const NC_CURVES: [(u32, [f64; 8]); 11] = [
    (15, [47.0, 36.0, 29.0, 22.0, 17.0, 14.0, 12.0, 11.0]),
    (20, [51.0, 40.0, 33.0, 26.0, 22.0, 19.0, 17.0, 16.0]),
    (25, [54.0, 44.0, 37.0, 31.0, 27.0, 24.0, 22.0, 21.0]),
    (30, [57.0, 48.0, 41.0, 35.0, 31.0, 29.0, 28.0, 27.0]),
    (35, [60.0, 52.0, 45.0, 40.0, 36.0, 34.0, 33.0, 32.0]),
    (40, [64.0, 56.0, 50.0, 45.0, 41.0, 39.0, 38.0, 37.0]),
    (45, [67.0, 60.0, 54.0, 49.0, 46.0, 44.0, 43.0, 42.0]),
    (50, [71.0, 64.0, 58.0, 54.0, 51.0, 49.0, 48.0, 47.0]),
    (55, [74.0, 67.0, 62.0, 58.0, 56.0, 54.0, 53.0, 52.0]),
    (60, [77.0, 71.0, 67.0, 63.0, 61.0, 59.0, 58.0, 57.0]),
    (65, [80.0, 75.0, 71.0, 68.0, 66.0, 64.0, 63.0, 62.0]),
];

/// NC rating returned once the spectrum exceeds every tabulated curve.
const NC_RATING_CEILING: u32 = 65;

/// An eight-band octave spectrum in dB, indexed by [`FREQUENCY_BANDS`].
///
/// Fixed-size by construction, so the "length exactly 8" invariant never needs a runtime check
/// once a `Spectrum` exists — only the boundary that builds one from a caller-supplied `Vec<f64>`
/// (an explicit source spectrum, or JSON input) needs to validate length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spectrum(pub [f64; 8]);

impl Spectrum {
    /// All-zero spectrum (silence).
    pub const fn silence() -> Self {
        Spectrum([0.0; 8])
    }

    /// Build a spectrum from a caller-supplied slice, rejecting anything but exactly 8 bands.
    pub fn from_bands(bands: &[f64]) -> Option<Self> {
        let array: [f64; 8] = bands.try_into().ok()?;
        Some(Spectrum(array))
    }

    /// Spectrum with every band set to the same level.
    pub const fn flat(level: f64) -> Self {
        Spectrum([level; 8])
    }

    pub fn bands(&self) -> &[f64; 8] {
        &self.0
    }

    /// Replace any NaN/∞ band with 0, returning whether a guard fired.
    pub fn guard_numeric(&mut self) -> bool {
        let mut fired = false;
        for level in self.0.iter_mut() {
            if !level.is_finite() {
                *level = 0.0;
                fired = true;
            }
        }
        fired
    }

    /// A-weighted overall level, per §4.1: linear-sum the positive bands after weighting, then
    /// convert back to dB. A silent spectrum has a dB(A) of 0, not -∞.
    pub fn dba(&self) -> f64 {
        let mut linear_sum = 0.0;
        for (level, weight) in self.0.iter().zip(A_WEIGHTS.iter()) {
            if *level > 0.0 {
                linear_sum += 10f64.powf((level + weight) / 10.0);
            }
        }
        if linear_sum > 0.0 {
            10.0 * linear_sum.log10()
        } else {
            0.0
        }
    }

    /// Elementwise `max(0, level - attenuation)`.
    pub fn subtract_attenuation(&self, attenuation: &Spectrum) -> Spectrum {
        let mut out = [0.0; 8];
        for i in 0..8 {
            out[i] = (self.0[i] - attenuation.0[i]).max(0.0);
        }
        Spectrum(out)
    }

    /// Elementwise energy-sum with a generated spectrum, skipping bands that are not positive.
    pub fn add_generated(&self, generated: &Spectrum) -> Spectrum {
        let mut out = self.0;
        for i in 0..8 {
            if generated.0[i] > 0.0 {
                out[i] = energy_sum(out[i], generated.0[i]);
            }
        }
        Spectrum(out)
    }

    /// NC rating: the largest curve this spectrum does not exceed in any band, or
    /// [`NC_RATING_CEILING`] if it exceeds all of them.
    pub fn nc_rating(&self) -> u32 {
        for (rating, curve) in NC_CURVES.iter().rev() {
            if self.0.iter().zip(curve.iter()).all(|(level, ceiling)| level <= ceiling) {
                return *rating;
            }
        }
        NC_RATING_CEILING
    }

    /// Does `self` dominate `other` band-wise (`self_i >= other_i` for all i)?
    pub fn dominates(&self, other: &Spectrum) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }
}

/// Energy sum of two band levels (dB): `10*log10(10^(a/10) + 10^(b/10))`, with the degenerate
/// ≤0 cases handled explicitly so a silent band never contributes a spurious `10^0 = 1`.
pub fn energy_sum(a: f64, b: f64) -> f64 {
    if a <= 0.0 && b <= 0.0 {
        0.0
    } else if a <= 0.0 {
        b
    } else if b <= 0.0 {
        a
    } else {
        10.0 * (10f64.powf(a / 10.0) + 10f64.powf(b / 10.0)).log10()
    }
}

/// Estimate a full spectrum from an overall dB(A) figure using the typical HVAC spectrum shape,
/// clamped at 0 per band.
pub fn estimate_spectrum_from_dba(dba: f64) -> Spectrum {
    let mut out = [0.0; 8];
    for i in 0..8 {
        out[i] = (dba + DBA_ESTIMATE_SHAPE[i]).max(0.0);
    }
    Spectrum(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dba_of_silence_is_zero() {
        assert_eq!(Spectrum::silence().dba(), 0.0);
    }

    #[test]
    fn energy_sum_is_commutative_and_associative() {
        let (a, b, c) = (42.3, 38.1, 50.0);
        assert_abs_diff_eq!(energy_sum(a, b), energy_sum(b, a), epsilon = 1e-9);
        assert_abs_diff_eq!(
            energy_sum(energy_sum(a, b), c),
            energy_sum(a, energy_sum(b, c)),
            epsilon = 1e-6
        );
    }

    #[test]
    fn energy_sum_with_silent_band_returns_the_other() {
        assert_eq!(energy_sum(0.0, 45.0), 45.0);
        assert_eq!(energy_sum(45.0, 0.0), 45.0);
        assert_eq!(energy_sum(0.0, 0.0), 0.0);
    }

    #[test]
    fn subtract_attenuation_floors_at_zero() {
        let s = Spectrum::flat(10.0);
        let att = Spectrum::flat(25.0);
        assert_eq!(s.subtract_attenuation(&att), Spectrum::silence());
    }

    #[test]
    fn nc_rating_monotonic_in_dominance() {
        let a = Spectrum([40.0, 35.0, 30.0, 28.0, 25.0, 22.0, 20.0, 18.0]);
        let b = Spectrum([50.0, 45.0, 40.0, 38.0, 35.0, 32.0, 30.0, 28.0]);
        assert!(b.dominates(&a));
        assert!(b.nc_rating() >= a.nc_rating());
    }

    #[test]
    fn nc_rating_ceiling_when_every_curve_exceeded() {
        let loud = Spectrum::flat(120.0);
        assert_eq!(loud.nc_rating(), NC_RATING_CEILING);
    }

    #[test]
    fn estimate_from_dba_matches_scenario_one() {
        let spectrum = estimate_spectrum_from_dba(50.0);
        assert_eq!(
            spectrum.0,
            [50.0, 48.0, 49.0, 50.0, 51.0, 52.0, 51.0, 49.0]
        );
    }

    #[test]
    fn from_bands_rejects_wrong_length() {
        assert!(Spectrum::from_bands(&[1.0, 2.0, 3.0]).is_none());
        assert!(Spectrum::from_bands(&[0.0; 8]).is_some());
    }
}
