//! Flex duct insertion loss: bilinear interpolation over the (diameter, length) grid (Table 25).

use crate::error::Warning;
use crate::spectrum::Spectrum;
use crate::tables::flex_duct::{row, DIAMETERS, LENGTHS};

fn bracket(value: f64, axis: &[f64]) -> (f64, f64, f64) {
    if value <= axis[0] {
        return (axis[0], axis[0], 0.0);
    }
    if value >= axis[axis.len() - 1] {
        let last = axis[axis.len() - 1];
        return (last, last, 0.0);
    }
    for w in axis.windows(2) {
        if w[0] <= value && value <= w[1] {
            let t = (value - w[0]) / (w[1] - w[0]);
            return (w[0], w[1], t);
        }
    }
    unreachable!("value within axis bounds must fall in some bracket")
}

/// Recommended duct length range per ASHRAE guidance — advisory only, never used to reject a
/// calculation.
pub fn recommended_length_range_ft() -> (f64, f64) {
    (3.0, 6.0)
}

/// Bilinear interpolation over the exact Table 25 grid. Saturates at the nearest edge outside
/// `[4, 16]` in diameter or `[3, 12]` ft length (the source returns NaN via
/// `RegularGridInterpolator(bounds_error=False)`; this reimplementation clamps instead).
pub fn insertion_loss(diameter_in: f64, length_ft: f64) -> (Spectrum, Vec<Warning>) {
    let mut warnings = Vec::new();
    if diameter_in < DIAMETERS[0] || diameter_in > *DIAMETERS.last().unwrap() {
        warnings.push(Warning::OutOfRange(format!(
            "flex duct diameter {diameter_in} in outside tabulated range; saturating"
        )));
    }
    if length_ft < LENGTHS[0] || length_ft > *LENGTHS.last().unwrap() {
        warnings.push(Warning::OutOfRange(format!(
            "flex duct length {length_ft} ft outside tabulated range; saturating"
        )));
    }
    let (min_recommended, max_recommended) = recommended_length_range_ft();
    if length_ft < min_recommended {
        warnings.push(Warning::OutOfRange(format!(
            "flex duct length {length_ft} ft is below the recommended minimum ({min_recommended} ft)"
        )));
    } else if length_ft > max_recommended {
        warnings.push(Warning::OutOfRange(format!(
            "flex duct length {length_ft} ft exceeds the recommended maximum ({max_recommended} ft)"
        )));
    }

    let (d0, d1, td) = bracket(diameter_in, &DIAMETERS);
    let (l0, l1, tl) = bracket(length_ft, &LENGTHS);

    let r00 = row(d0, l0).expect("grid point must exist");
    let r01 = row(d0, l1).expect("grid point must exist");
    let r10 = row(d1, l0).expect("grid point must exist");
    let r11 = row(d1, l1).expect("grid point must exist");

    let mut bands = [0.0; 8];
    for i in 0..8 {
        let top = r00[i] + (r01[i] - r00[i]) * tl;
        let bottom = r10[i] + (r11[i] - r10[i]) * tl;
        bands[i] = top + (bottom - top) * td;
    }
    (Spectrum(bands), warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn exact_table_hit_matches_scenario_five() {
        // 9 ft is above the recommended 3-6 ft length, so this hits the advisory warning even
        // though it's a fully in-table lookup.
        let (spectrum, warnings) = insertion_loss(6.0, 9.0);
        assert_eq!(warnings.len(), 1);
        assert_abs_diff_eq!(
            spectrum.0.as_slice(),
            [6.0, 9.0, 13.0, 25.0, 29.0, 30.0, 20.0, 12.0].as_slice(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn length_within_recommended_range_has_no_advisory_warning() {
        let (_, warnings) = insertion_loss(6.0, 5.0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn length_outside_recommended_range_warns_without_rejecting() {
        let (spectrum, warnings) = insertion_loss(6.0, 10.0);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("recommended maximum"));
        assert!(spectrum.0.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn midpoint_interpolates_between_adjacent_diameters() {
        let (at_6, _) = insertion_loss(6.0, 9.0);
        let (at_7, _) = insertion_loss(7.0, 9.0);
        let (mid, _) = insertion_loss(6.5, 9.0);
        for i in 0..8 {
            let expected = (at_6.0[i] + at_7.0[i]) / 2.0;
            assert_abs_diff_eq!(mid.0[i], expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn out_of_bounds_saturates_with_warning() {
        // length held at 5 ft (within the recommended range) so only the diameter warning fires.
        let (_, warnings) = insertion_loss(40.0, 5.0);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn out_of_table_diameter_and_out_of_range_length_both_warn() {
        let (_, warnings) = insertion_loss(40.0, 9.0);
        assert_eq!(warnings.len(), 2);
    }
}
