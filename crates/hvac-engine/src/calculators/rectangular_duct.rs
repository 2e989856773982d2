//! Rectangular duct attenuation: unlined (Table 16), 1" lined (Table 17), 2" lined (Table 18).

use crate::error::Warning;
use crate::spectrum::Spectrum;
use crate::tables::rect_duct::{LINING_1INCH_TABLE, LINING_2INCH_TABLE, UNLINED_PA_TABLE};

fn p_a_ratio(width_in: f64, height_in: f64) -> f64 {
    let (w, h) = (width_in / 12.0, height_in / 12.0);
    2.0 * (w + h) / (w * h)
}

/// Unlined rectangular duct: only the 63 Hz band carries attenuation. Exact `P/A` matches use the
/// tabulated value directly; otherwise linear interpolation between the two bracketing `P/A`
/// entries, saturating at the table's own extremes, with nearest-neighbor as a last resort if no
/// bracket is found (mirrors the source's `for`/`else` fallback).
pub fn unlined(width_in: f64, height_in: f64, length_ft: f64) -> (Spectrum, Vec<Warning>) {
    let ratio = p_a_ratio(width_in, height_in);
    let mut warnings = Vec::new();

    let min_ratio = UNLINED_PA_TABLE.first().unwrap().0;
    let max_ratio = UNLINED_PA_TABLE.last().unwrap().0;

    let per_foot = if let Some((_, exact)) = UNLINED_PA_TABLE.iter().find(|(pa, _)| *pa == ratio) {
        *exact
    } else if ratio <= min_ratio {
        warnings.push(Warning::OutOfRange(format!(
            "P/A ratio {ratio:.2} below tabulated range; saturating at {min_ratio:.2}"
        )));
        UNLINED_PA_TABLE.iter().map(|(_, a)| *a).fold(f64::MIN, f64::max)
    } else if ratio >= max_ratio {
        warnings.push(Warning::OutOfRange(format!(
            "P/A ratio {ratio:.2} above tabulated range; saturating at {max_ratio:.2}"
        )));
        UNLINED_PA_TABLE.iter().map(|(_, a)| *a).fold(f64::MAX, f64::min)
    } else {
        let bracket = UNLINED_PA_TABLE
            .windows(2)
            .find(|w| w[0].0 <= ratio && ratio <= w[1].0);
        match bracket {
            Some([(pa1, a1), (pa2, a2)]) => a1 + (a2 - a1) * (ratio - pa1) / (pa2 - pa1),
            _ => {
                UNLINED_PA_TABLE
                    .iter()
                    .min_by(|a, b| (a.0 - ratio).abs().total_cmp(&(b.0 - ratio).abs()))
                    .unwrap()
                    .1
            }
        }
    };

    let mut bands = [0.0; 8];
    bands[0] = per_foot * length_ft;
    (Spectrum(bands), warnings)
}

fn nearest_key(width_in: f64, height_in: f64, keys: &[(f64, f64)]) -> (f64, f64) {
    let (dim1, dim2) = (width_in.min(height_in), width_in.max(height_in));
    *keys
        .iter()
        .min_by(|a, b| {
            let da = (a.0 - dim1).abs() + (a.1 - dim2).abs();
            let db = (b.0 - dim1).abs() + (b.1 - dim2).abs();
            da.total_cmp(&db)
        })
        .unwrap()
}

/// 1" duct lining: a single per-foot value at 125 Hz, nearest-neighbor (Manhattan distance over
/// the full (width, height) key set, not per-dimension) when the pair isn't tabulated exactly.
pub fn lined_1in(width_in: f64, height_in: f64, length_ft: f64) -> (Spectrum, Vec<Warning>) {
    let (dim1, dim2) = (width_in.min(height_in), width_in.max(height_in));
    let keys: Vec<(f64, f64)> = LINING_1INCH_TABLE.iter().map(|(k, _)| *k).collect();

    let (key, warnings) = if LINING_1INCH_TABLE.iter().any(|(k, _)| *k == (dim1, dim2)) {
        ((dim1, dim2), Vec::new())
    } else {
        let nearest = nearest_key(width_in, height_in, &keys);
        (
            nearest,
            vec![Warning::OutOfRange(format!(
                "duct size {width_in}x{height_in} in not tabulated; using nearest {nearest:?}"
            ))],
        )
    };

    let per_foot = LINING_1INCH_TABLE.iter().find(|(k, _)| *k == key).unwrap().1;
    let mut bands = [0.0; 8];
    bands[1] = per_foot * length_ft;
    (Spectrum(bands), warnings)
}

/// 2" duct lining: 7-band per-foot attenuation (125..8000 Hz), same Manhattan-distance
/// nearest-neighbor strategy as [`lined_1in`].
pub fn lined_2in(width_in: f64, height_in: f64, length_ft: f64) -> (Spectrum, Vec<Warning>) {
    let (dim1, dim2) = (width_in.min(height_in), width_in.max(height_in));
    let keys: Vec<(f64, f64)> = LINING_2INCH_TABLE.iter().map(|(k, _)| *k).collect();

    let (key, warnings) = if LINING_2INCH_TABLE.iter().any(|(k, _)| *k == (dim1, dim2)) {
        ((dim1, dim2), Vec::new())
    } else {
        let nearest = nearest_key(width_in, height_in, &keys);
        (
            nearest,
            vec![Warning::OutOfRange(format!(
                "duct size {width_in}x{height_in} in not tabulated; using nearest {nearest:?}"
            ))],
        )
    };

    let per_foot = LINING_2INCH_TABLE.iter().find(|(k, _)| *k == key).unwrap().1;
    let mut bands = [0.0; 8];
    for (i, value) in per_foot.iter().enumerate() {
        bands[i + 1] = value * length_ft;
    }
    (Spectrum(bands), warnings)
}
