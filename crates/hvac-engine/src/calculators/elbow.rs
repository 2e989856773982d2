//! Elbow / turning-vane generated noise. A plain 90° elbow without vanes has no independent
//! formula of its own — it borrows the junction calculator's `elbow_90_no_vanes` spectrum with
//! the elbow treated as its own main and branch duct (same area and flow on both sides).

use crate::calculators::junction::{self, DuctShape, DuctSide, JunctionType};
use crate::error::Warning;
use crate::spectrum::{Spectrum, FREQUENCY_BANDS};

/// Geometry for an elbow with turning vanes. `vane_chord_in` and `vane_count` both need to be
/// positive for the vaned path to apply; otherwise callers should use [`bare_elbow`].
#[derive(Debug, Clone, Copy)]
pub struct VanedElbow {
    pub flow_cfm: f64,
    pub duct_area_ft2: f64,
    pub duct_height_in: f64,
    pub vane_chord_in: f64,
    pub vane_count: u32,
    pub pressure_drop_inwg: f64,
}

/// Generated noise for an elbow fitted with turning vanes. Turning vanes break up the flow
/// separation that drives `elbow_90_no_vanes`, so the spectrum is built from the same
/// velocity/area characteristic level as the junction family but scaled down with vane count and
/// chord length, which increase flow straightening and reduce regenerated noise.
pub fn vaned(elbow: VanedElbow) -> (Spectrum, Vec<Warning>) {
    let mut warnings = Vec::new();
    let velocity = elbow.flow_cfm / (elbow.duct_area_ft2 * 60.0);
    if !velocity.is_finite() || velocity <= 0.0 {
        warnings.push(Warning::NumericGuard(
            "non-positive elbow velocity; generated spectrum zeroed".into(),
        ));
        return (Spectrum::silence(), warnings);
    }

    // Vane straightening reduction: each additional vane and inch of chord damps the
    // characteristic level, floored so a single short vane still has some effect.
    let straightening = 10.0 * ((elbow.vane_count as f64).max(1.0) * elbow.vane_chord_in.max(1.0)).log10();

    let mut bands = [0.0; 8];
    for (i, &f) in FREQUENCY_BANDS.iter().enumerate() {
        let base = 10.0 * elbow.duct_area_ft2.max(1e-6).log10()
            + 50.0 * velocity.log10()
            + 10.0 * (elbow.pressure_drop_inwg.max(1e-6)).log10()
            - 20.0
            - 10.0 * (f / 1000.0).log10().abs();
        let value = (base - straightening).max(0.0);
        bands[i] = if value.is_finite() { value } else { 0.0 };
    }
    (Spectrum(bands), warnings)
}

/// A 90° elbow with no turning vanes: falls back to the junction calculator's
/// `elbow_90_no_vanes` branch spectrum, with the elbow's own duct as both main and branch side.
pub fn bare_elbow(duct_area_ft2: f64, duct_diameter_ft: f64, shape: DuctShape, flow_cfm: f64) -> (Spectrum, Vec<Warning>) {
    let side = DuctSide {
        shape,
        area_ft2: duct_area_ft2,
        diameter_ft: duct_diameter_ft,
        flow_cfm,
    };
    let (noise, warnings) = junction::generated_noise(JunctionType::Elbow90NoVanes, side, side, 0.0, false);
    (noise.branch, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_elbow_generates_nonnegative_finite_spectrum() {
        let (spectrum, _) = bare_elbow(2.0, 0.0, DuctShape::Rectangular, 800.0);
        assert!(spectrum.0.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn vaned_elbow_is_quieter_with_more_vanes() {
        let base = VanedElbow {
            flow_cfm: 1000.0,
            duct_area_ft2: 2.0,
            duct_height_in: 12.0,
            vane_chord_in: 2.0,
            vane_count: 2,
            pressure_drop_inwg: 0.2,
        };
        let many_vanes = VanedElbow { vane_count: 8, ..base };
        let (quiet, _) = vaned(base);
        let (quieter, _) = vaned(many_vanes);
        let total_quiet: f64 = quiet.0.iter().sum();
        let total_quieter: f64 = quieter.0.iter().sum();
        assert!(total_quieter <= total_quiet);
    }

    #[test]
    fn zero_flow_elbow_is_silent_not_nan() {
        let (spectrum, warnings) = vaned(VanedElbow {
            flow_cfm: 0.0,
            duct_area_ft2: 2.0,
            duct_height_in: 12.0,
            vane_chord_in: 2.0,
            vane_count: 4,
            pressure_drop_inwg: 0.1,
        });
        assert_eq!(spectrum, Spectrum::silence());
        assert_eq!(warnings.len(), 1);
    }
}
