//! ASHRAE Tables 35-38: receiver room sound correction coefficients (Eqs. 26-29). All tables
//! cover only the first 7 bands (63..4000 Hz) — the 8 kHz band has no tabulated correction and is
//! carried through the caller's padding, per SPEC_FULL.md §4.4.

/// Table 35: values for A in Equation 27, keyed by room volume (ft³), ascending.
pub const TABLE_35_A: &[(f64, [f64; 7])] = &[
    (1500.0, [4.0, 3.0, 2.0, 1.0, 0.0, -1.0, -2.0]),
    (2500.0, [3.0, 2.0, 1.0, 0.0, -1.0, -2.0, -3.0]),
    (4000.0, [2.0, 1.0, 0.0, -1.0, -2.0, -3.0, -4.0]),
    (6000.0, [1.0, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0]),
    (10000.0, [0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0]),
    (15000.0, [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0]),
];

/// Table 36: values for B in Equation 27, keyed by distance (ft), ascending. Single scalar
/// applied across all bands.
pub const TABLE_36_B: &[(f64, f64)] = &[
    (3.0, 5.0),
    (4.0, 6.0),
    (5.0, 7.0),
    (6.0, 8.0),
    (8.0, 9.0),
    (10.0, 10.0),
    (13.0, 11.0),
    (16.0, 12.0),
    (20.0, 13.0),
];

/// Table 37: values for C in Equation 28, keyed by distance (ft), ascending.
pub const TABLE_37_C: &[(f64, [f64; 7])] = &[
    (3.0, [5.0, 5.0, 6.0, 6.0, 6.0, 7.0, 10.0]),
    (4.0, [6.0, 7.0, 7.0, 7.0, 8.0, 9.0, 12.0]),
    (5.0, [7.0, 8.0, 8.0, 8.0, 9.0, 11.0, 14.0]),
    (6.0, [8.0, 9.0, 9.0, 9.0, 10.0, 12.0, 16.0]),
    (8.0, [9.0, 10.0, 10.0, 11.0, 12.0, 14.0, 18.0]),
    (10.0, [10.0, 11.0, 12.0, 12.0, 13.0, 16.0, 20.0]),
    (13.0, [11.0, 12.0, 13.0, 13.0, 15.0, 18.0, 22.0]),
    (16.0, [12.0, 13.0, 14.0, 15.0, 16.0, 19.0, 24.0]),
    (20.0, [13.0, 15.0, 15.0, 16.0, 17.0, 20.0, 26.0]),
    (25.0, [14.0, 16.0, 16.0, 17.0, 19.0, 22.0, 28.0]),
    (32.0, [15.0, 17.0, 17.0, 18.0, 20.0, 23.0, 30.0]),
];

/// Table 38: values for D in Equation 29, keyed by (ceiling height bucket, floor area per
/// diffuser bucket). Buckets are inclusive (lo, hi) ranges in ft / ft².
pub const TABLE_38_D: &[(((f64, f64), (f64, f64)), [f64; 7])] = &[
    (((8.0, 9.0), (100.0, 150.0)), [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]),
    (((8.0, 9.0), (200.0, 250.0)), [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
    (((10.0, 12.0), (100.0, 150.0)), [4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
    (((10.0, 12.0), (200.0, 250.0)), [5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]),
    (((14.0, 16.0), (100.0, 150.0)), [7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0]),
    (((14.0, 16.0), (200.0, 250.0)), [8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0]),
];

/// Default bucket used when ceiling height / floor area fall outside every tabulated range,
/// matching the source's fallback rather than rejecting the call.
pub const TABLE_38_DEFAULT_KEY: ((f64, f64), (f64, f64)) = ((10.0, 12.0), (100.0, 150.0));
