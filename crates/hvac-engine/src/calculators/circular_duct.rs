//! Circular duct attenuation: unlined (Table 5.5, bucketed by diameter) and lined
//! (Equation 5.18, a continuous polynomial in thickness and diameter so no interpolation is
//! needed — only range saturation at the formula's validated bounds).

use crate::error::Warning;
use crate::spectrum::{Spectrum, FREQUENCY_BANDS};
use crate::tables::circular_duct::{LINED_COEFFICIENTS, UNLINED_DIAMETER_BRACKETS};

const LINED_CAP_DB: f64 = 40.0;
const VALID_DIAMETER: (f64, f64) = (6.0, 60.0);
const VALID_THICKNESS: (f64, f64) = (1.0, 3.0);

/// Table 5.5: per-foot attenuation for bands 63..4000 Hz (8 kHz is always 0), bucketed by
/// diameter range. Diameters above the top bracket saturate at the widest bucket's values with a
/// warning rather than the source's `ValueError`.
pub fn unlined(diameter_in: f64, length_ft: f64) -> (Spectrum, Vec<Warning>) {
    let mut warnings = Vec::new();
    let (_, per_foot) = UNLINED_DIAMETER_BRACKETS
        .iter()
        .find(|(upper, _)| diameter_in <= *upper)
        .unwrap_or_else(|| {
            warnings.push(Warning::OutOfRange(format!(
                "diameter {diameter_in} in exceeds 60 in maximum; saturating at widest bracket"
            )));
            UNLINED_DIAMETER_BRACKETS.last().unwrap()
        });

    let mut bands = [0.0; 8];
    for (i, value) in per_foot.iter().enumerate() {
        bands[i] = value * length_ft;
    }
    (Spectrum(bands), warnings)
}

/// Equation 5.18: `IL = (A + B*t + C*t^2 + D*d + E*d^2 + F*d^3) * L`, capped at 40 dB and floored
/// at 0 per band. Valid for d in [6, 60] in, t in [1, 3] in; out-of-range inputs are clamped to
/// the nearest valid value and a warning is raised instead of the source's hard error.
pub fn lined(diameter_in: f64, thickness_in: f64, length_ft: f64) -> (Spectrum, Vec<Warning>) {
    let mut warnings = Vec::new();
    let d = clamp_with_warning(diameter_in, VALID_DIAMETER, "diameter", &mut warnings);
    let t = clamp_with_warning(thickness_in, VALID_THICKNESS, "lining thickness", &mut warnings);

    let mut bands = [0.0; 8];
    for (i, coeffs) in LINED_COEFFICIENTS.iter().enumerate() {
        let [a, b, c, dd, e, f] = *coeffs;
        let il = (a + b * t + c * t * t + dd * d + e * d * d + f * d * d * d) * length_ft;
        bands[i] = if il.is_finite() {
            il.max(0.0).min(LINED_CAP_DB)
        } else {
            warnings.push(Warning::NumericGuard(format!(
                "non-finite insertion loss at {} Hz",
                FREQUENCY_BANDS[i]
            )));
            0.0
        };
    }
    (Spectrum(bands), warnings)
}

fn clamp_with_warning(value: f64, range: (f64, f64), label: &str, warnings: &mut Vec<Warning>) -> f64 {
    if value < range.0 {
        warnings.push(Warning::OutOfRange(format!(
            "{label} {value} below valid range; saturating at {}",
            range.0
        )));
        range.0
    } else if value > range.1 {
        warnings.push(Warning::OutOfRange(format!(
            "{label} {value} above valid range; saturating at {}",
            range.1
        )));
        range.1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unlined_scenario_two_matches_spec() {
        let (spectrum, warnings) = unlined(18.0, 10.0);
        assert!(warnings.is_empty());
        assert_abs_diff_eq!(
            spectrum.0.as_slice(),
            [0.2, 0.2, 0.2, 0.3, 0.5, 0.5, 0.5, 0.0].as_slice(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn unlined_above_max_diameter_saturates_with_warning() {
        let (_, warnings) = unlined(72.0, 5.0);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn lined_caps_at_forty_db() {
        let (spectrum, _) = lined(60.0, 3.0, 50.0);
        assert!(spectrum.bands().iter().all(|&v| v <= 40.0 + 1e-9));
    }

    #[test]
    fn lined_out_of_range_saturates_rather_than_panics() {
        let (_, warnings) = lined(4.0, 0.5, 10.0);
        assert_eq!(warnings.len(), 2);
    }
}
