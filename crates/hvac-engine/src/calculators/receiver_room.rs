//! Receiver room sound-power-to-sound-pressure correction (Eqs. 26-29). All four models operate
//! on the first 7 bands (63..4000 Hz); the 8 kHz band is carried through unmodified by the caller.

use crate::error::Warning;
use crate::tables::receiver_room::{
    TABLE_35_A, TABLE_36_B, TABLE_37_C, TABLE_38_D, TABLE_38_DEFAULT_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverModel {
    Auto,
    Eq26,
    Eq27,
    Eq28,
    Eq29,
}

/// Per-path parameters needed by whichever model is selected.
#[derive(Debug, Clone, Copy)]
pub struct ReceiverParams {
    pub distance_ft: f64,
    pub room_volume_ft3: f64,
    pub ceiling_height_ft: Option<f64>,
    pub floor_area_per_diffuser_ft2: Option<f64>,
}

/// Interpolate linearly on a sorted `(key, value)` table, clamping at the endpoints (never
/// extrapolating), matching every `_interpolate_table_*` helper in the source.
fn interpolate_scalar(table: &[(f64, f64)], x: f64) -> f64 {
    if x <= table[0].0 {
        return table[0].1;
    }
    if x >= table[table.len() - 1].0 {
        return table[table.len() - 1].1;
    }
    for w in table.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if x0 <= x && x <= x1 {
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    table[table.len() - 1].1
}

fn interpolate_row(table: &[(f64, [f64; 7])], x: f64) -> [f64; 7] {
    if x <= table[0].0 {
        return table[0].1;
    }
    if x >= table[table.len() - 1].0 {
        return table[table.len() - 1].1;
    }
    for w in table.windows(2) {
        let ((x0, row0), (x1, row1)) = (w[0], w[1]);
        if x0 <= x && x <= x1 {
            let t = (x - x0) / (x1 - x0);
            let mut out = [0.0; 7];
            for i in 0..7 {
                out[i] = row0[i] + (row1[i] - row0[i]) * t;
            }
            return out;
        }
    }
    table[table.len() - 1].1
}

/// Equation 26: `Lp = Lw - 10*log10(r) - 5*log10(V) - 3*log10(f) + 25`.
pub fn eq26(lw: f64, distance_ft: f64, room_volume_ft3: f64, frequency_hz: f64) -> f64 {
    lw - 10.0 * distance_ft.log10() - 5.0 * room_volume_ft3.log10() - 3.0 * frequency_hz.log10() + 25.0
}

/// Equation 27: `Lp = Lw + A(V) - B(r)`, band selected by index into the 7-band tables.
pub fn eq27_band(lw: f64, distance_ft: f64, room_volume_ft3: f64, band: usize) -> f64 {
    let a_row = interpolate_row(TABLE_35_A, room_volume_ft3);
    let b = interpolate_scalar(TABLE_36_B, distance_ft);
    lw + a_row[band] - b
}

/// Equation 28: `Lp = Lw - C(r) - 5`.
pub fn eq28_band(lw: f64, distance_ft: f64, band: usize) -> f64 {
    let c_row = interpolate_row(TABLE_37_C, distance_ft);
    lw - c_row[band] - 5.0
}

/// Equation 29: `Lp(5 ft) = Lw,single - D(ceiling, area)`. Table 38 is a discrete bucket lookup,
/// not interpolated — out-of-bucket inputs fall back to the 10-12 ft / 100-150 ft² default bucket,
/// matching `_get_table_38_key`'s behavior rather than rejecting the call.
pub fn eq29_band(
    lw_single: f64,
    ceiling_height_ft: f64,
    floor_area_per_diffuser_ft2: f64,
    band: usize,
) -> (f64, Vec<Warning>) {
    let mut warnings = Vec::new();
    let height_bucket = if (8.0..=9.0).contains(&ceiling_height_ft) {
        (8.0, 9.0)
    } else if (10.0..=12.0).contains(&ceiling_height_ft) {
        (10.0, 12.0)
    } else if (14.0..=16.0).contains(&ceiling_height_ft) {
        (14.0, 16.0)
    } else {
        warnings.push(Warning::OutOfRange(format!(
            "ceiling height {ceiling_height_ft} ft outside tabulated buckets; using default"
        )));
        TABLE_38_DEFAULT_KEY.0
    };
    let area_bucket = if (100.0..=150.0).contains(&floor_area_per_diffuser_ft2) {
        (100.0, 150.0)
    } else if (200.0..=250.0).contains(&floor_area_per_diffuser_ft2) {
        (200.0, 250.0)
    } else {
        warnings.push(Warning::OutOfRange(format!(
            "floor area per diffuser {floor_area_per_diffuser_ft2} ft2 outside tabulated buckets; using default"
        )));
        TABLE_38_DEFAULT_KEY.1
    };

    let row = TABLE_38_D
        .iter()
        .find(|(key, _)| *key == (height_bucket, area_bucket))
        .map(|(_, row)| *row)
        .unwrap_or_else(|| {
            TABLE_38_D
                .iter()
                .find(|(key, _)| *key == TABLE_38_DEFAULT_KEY)
                .unwrap()
                .1
        });

    (lw_single - row[band], warnings)
}

/// Auto-dispatch per-band: Eq. 27 under 15,000 ft³, else Eq. 28.
pub fn auto_band(lw: f64, params: &ReceiverParams, band: usize) -> f64 {
    if params.room_volume_ft3 < 15000.0 {
        eq27_band(lw, params.distance_ft, params.room_volume_ft3, band)
    } else {
        eq28_band(lw, params.distance_ft, band)
    }
}

/// Apply `model` across the first 7 bands of a sound-power spectrum, returning a 7-band
/// sound-pressure spectrum plus any warnings.
pub fn apply(model: ReceiverModel, lw_bands: &[f64; 7], params: &ReceiverParams) -> ([f64; 7], Vec<Warning>) {
    let mut out = [0.0; 7];
    let mut warnings = Vec::new();
    const FREQUENCIES: [f64; 7] = [63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0];

    for band in 0..7 {
        out[band] = match model {
            ReceiverModel::Eq26 => eq26(lw_bands[band], params.distance_ft, params.room_volume_ft3, FREQUENCIES[band]),
            ReceiverModel::Eq27 => eq27_band(lw_bands[band], params.distance_ft, params.room_volume_ft3, band),
            ReceiverModel::Eq28 => eq28_band(lw_bands[band], params.distance_ft, band),
            ReceiverModel::Eq29 => {
                let ceiling = params.ceiling_height_ft.unwrap_or(10.0);
                let area = params.floor_area_per_diffuser_ft2.unwrap_or(100.0);
                let (value, mut w) = eq29_band(lw_bands[band], ceiling, area, band);
                warnings.append(&mut w);
                value
            }
            ReceiverModel::Auto => auto_band(lw_bands[band], params, band),
        };
    }
    (out, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn eq27_at_tabulated_endpoints_returns_exact_row() {
        let a_row = interpolate_row(TABLE_35_A, 1500.0);
        assert_eq!(a_row, TABLE_35_A[0].1);
        let a_row_top = interpolate_row(TABLE_35_A, 15000.0);
        assert_eq!(a_row_top, TABLE_35_A.last().unwrap().1);
    }

    #[test]
    fn eq36_table_clamps_outside_range() {
        assert_abs_diff_eq!(interpolate_scalar(TABLE_36_B, 1.0), 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(interpolate_scalar(TABLE_36_B, 100.0), 13.0, epsilon = 1e-9);
    }

    #[test]
    fn auto_dispatch_uses_eq27_below_15000() {
        let params = ReceiverParams {
            distance_ft: 10.0,
            room_volume_ft3: 5000.0,
            ceiling_height_ft: None,
            floor_area_per_diffuser_ft2: None,
        };
        assert_abs_diff_eq!(
            auto_band(80.0, &params, 3),
            eq27_band(80.0, 10.0, 5000.0, 3),
            epsilon = 1e-9
        );
    }

    #[test]
    fn eq29_out_of_bucket_falls_back_to_default_with_warning() {
        let (_, warnings) = eq29_band(70.0, 20.0, 500.0, 0);
        assert_eq!(warnings.len(), 2);
    }
}
