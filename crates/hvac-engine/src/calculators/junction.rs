//! Junction / tee / cross / elbow-without-vanes generated noise (ASHRAE §4.13-4.26).

use crate::error::Warning;
use crate::spectrum::{Spectrum, FREQUENCY_BANDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JunctionType {
    XJunction,
    TJunction,
    Elbow90NoVanes,
    BranchTakeoff90,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuctShape {
    Circular,
    Rectangular,
}

/// Equation 4.15: equivalent diameter, ft. `diameter_ft` is ignored for rectangular ducts.
fn equivalent_diameter(area_ft2: f64, shape: DuctShape, diameter_ft: f64) -> f64 {
    match shape {
        DuctShape::Circular => diameter_ft,
        DuctShape::Rectangular => (4.0 * area_ft2 / std::f64::consts::PI).sqrt(),
    }
}

/// Geometry and flow for one side (main or branch) of a junction.
#[derive(Debug, Clone, Copy)]
pub struct DuctSide {
    pub shape: DuctShape,
    pub area_ft2: f64,
    pub diameter_ft: f64,
    pub flow_cfm: f64,
}

impl DuctSide {
    fn equivalent_diameter(&self) -> f64 {
        equivalent_diameter(self.area_ft2, self.shape, self.diameter_ft)
    }

    /// Equation 4.16: `U = Q / (S * 60)`, ft/s.
    fn velocity(&self) -> f64 {
        self.flow_cfm / (self.area_ft2 * 60.0)
    }
}

/// Result of generated-noise analysis at a junction: the branch-side and main-side spectra, each
/// at the junction's Lw, per §4.2.
pub struct JunctionNoise {
    pub branch: Spectrum,
    pub main: Spectrum,
}

/// Full Eq. 4.13-4.26 chain. `bend_radius_in` is the rounding radius (0 for a sharp junction);
/// `turbulence` selects whether the upstream turbulence correction (Eq. 4.20) is applied.
pub fn generated_noise(
    kind: JunctionType,
    main: DuctSide,
    branch: DuctSide,
    bend_radius_in: f64,
    turbulence: bool,
) -> (JunctionNoise, Vec<Warning>) {
    let mut warnings = Vec::new();
    let d_b = branch.equivalent_diameter();
    let d_m = main.equivalent_diameter();
    let u_b = branch.velocity();
    let u_m = main.velocity();
    let m = if u_b > 0.0 { u_m / u_b } else { 0.0 };

    let mut branch_bands = [0.0; 8];
    for (i, &f) in FREQUENCY_BANDS.iter().enumerate() {
        let st = if u_b > 0.0 { f * d_b / u_b } else { 0.0 };

        let k_j = if st > 0.0 {
            let log_st = st.log10();
            -21.6 + 12.388 * m.powf(0.4751)
                - 16.482 * m.powf(-0.3071) * log_st
                - 5.047 * m.powf(-0.2372) * log_st * log_st
        } else {
            0.0
        };
        if !k_j.is_finite() {
            warnings.push(Warning::NumericGuard(format!(
                "non-finite characteristic spectrum at {f} Hz"
            )));
        }
        let k_j = if k_j.is_finite() { k_j } else { 0.0 };

        let l_b = if f > 0.0 && u_b > 0.0 && branch.area_ft2 > 0.0 && d_b > 0.0 {
            k_j + 10.0 * (f / 41.0).log10()
                + 50.0 * u_b.log10()
                + 10.0 * branch.area_ft2.log10()
                + 10.0 * d_b.log10()
        } else {
            0.0
        };

        let r_d = if d_b > 0.0 { bend_radius_in / (12.0 * d_b) } else { 0.0 };
        let dr = if st > 0.0 {
            (1.0 - r_d / 0.13) * (6.793 - 1.86 * st.log10())
        } else {
            0.0
        };

        let dt = if turbulence {
            -1.667 + 1.8 * m - 0.133 * m * m
        } else {
            0.0
        };

        branch_bands[i] = l_b + dr + dt;
    }
    let branch_spectrum = Spectrum(branch_bands);

    let mut main_bands = [0.0; 8];
    for i in 0..8 {
        main_bands[i] = match kind {
            JunctionType::XJunction => branch_bands[i] + 20.0 * (d_m / d_b).log10() + 3.0,
            JunctionType::TJunction => branch_bands[i] + 3.0,
            JunctionType::Elbow90NoVanes => branch_bands[i],
            JunctionType::BranchTakeoff90 => branch_bands[i] + 20.0 * (d_m / d_b).log10(),
        };
        if !main_bands[i].is_finite() {
            warnings.push(Warning::NumericGuard(format!(
                "non-finite main-duct level at {} Hz",
                FREQUENCY_BANDS[i]
            )));
            main_bands[i] = 0.0;
        }
    }

    (
        JunctionNoise {
            branch: branch_spectrum,
            main: Spectrum(main_bands),
        },
        warnings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scenario_four() -> (JunctionNoise, Vec<Warning>) {
        let main = DuctSide {
            shape: DuctShape::Rectangular,
            area_ft2: 4.0,
            diameter_ft: 0.0,
            flow_cfm: 2000.0,
        };
        let branch = DuctSide {
            shape: DuctShape::Rectangular,
            area_ft2: 2.0,
            diameter_ft: 0.0,
            flow_cfm: 500.0,
        };
        generated_noise(JunctionType::TJunction, main, branch, 6.0, true)
    }

    #[test]
    fn t_junction_main_is_branch_plus_three() {
        let (noise, _) = scenario_four();
        for i in 0..8 {
            assert_abs_diff_eq!(noise.main.0[i], noise.branch.0[i] + 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn scenario_four_branch_falls_in_expected_band() {
        let (noise, _) = scenario_four();
        let band_500 = noise.branch.0[3];
        assert!(
            (30.0..=55.0).contains(&band_500),
            "expected 500 Hz branch level in 30-55 dB, got {band_500}"
        );
    }

    #[test]
    fn turbulence_correction_is_zero_at_unity_velocity_ratio() {
        let side = DuctSide {
            shape: DuctShape::Circular,
            area_ft2: 1.0,
            diameter_ft: 1.13,
            flow_cfm: 600.0,
        };
        let (noise_on, _) = generated_noise(JunctionType::TJunction, side, side, 0.0, true);
        let (noise_off, _) = generated_noise(JunctionType::TJunction, side, side, 0.0, false);
        assert_abs_diff_eq!(
            noise_on.branch.0.as_slice(),
            noise_off.branch.0.as_slice(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn zero_branch_flow_yields_zero_bands_not_nan() {
        let branch = DuctSide {
            shape: DuctShape::Rectangular,
            area_ft2: 2.0,
            diameter_ft: 0.0,
            flow_cfm: 0.0,
        };
        let main = DuctSide {
            shape: DuctShape::Rectangular,
            area_ft2: 4.0,
            diameter_ft: 0.0,
            flow_cfm: 2000.0,
        };
        let (noise, _) = generated_noise(JunctionType::XJunction, main, branch, 0.0, false);
        assert!(noise.branch.0.iter().all(|v| v.is_finite()));
    }
}
