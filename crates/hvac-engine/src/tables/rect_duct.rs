//! ASHRAE Tables 16-18: rectangular duct attenuation/insertion-loss coefficients.

/// Table 16: unlined rectangular duct, P/A ratio (1/ft) -> attenuation at 63 Hz (dB/ft).
/// Ordered by ascending P/A so interpolation can assume sorted bracketing.
pub const UNLINED_PA_TABLE: &[(f64, f64)] = &[
    (0.7, 0.1),
    (1.0, 0.2),
    (2.0, 0.3),
    (3.0, 0.4),
    (4.0, 0.4),
    (8.0, 0.3),
];

/// Table 17: 1-inch duct lining insertion loss at 125 Hz (dB/ft), keyed by (width, height) in
/// inches, smaller dimension first.
pub const LINING_1INCH_TABLE: &[((f64, f64), f64)] = &[
    ((6.0, 6.0), 0.6),
    ((6.0, 10.0), 0.5),
    ((6.0, 12.0), 0.5),
    ((6.0, 18.0), 0.5),
    ((8.0, 8.0), 0.5),
    ((8.0, 12.0), 0.4),
    ((8.0, 16.0), 0.4),
    ((8.0, 24.0), 0.4),
    ((10.0, 10.0), 0.4),
    ((10.0, 16.0), 0.4),
    ((10.0, 20.0), 0.3),
    ((10.0, 30.0), 0.3),
    ((12.0, 12.0), 0.4),
    ((12.0, 18.0), 0.3),
    ((12.0, 24.0), 0.3),
    ((12.0, 36.0), 0.3),
    ((15.0, 15.0), 0.3),
    ((15.0, 22.0), 0.3),
    ((15.0, 30.0), 0.3),
    ((15.0, 45.0), 0.2),
    ((18.0, 18.0), 0.3),
    ((18.0, 28.0), 0.2),
    ((18.0, 36.0), 0.2),
    ((18.0, 54.0), 0.2),
    ((24.0, 24.0), 0.2),
    ((24.0, 36.0), 0.2),
    ((24.0, 48.0), 0.2),
    ((24.0, 72.0), 0.2),
    ((30.0, 30.0), 0.2),
    ((30.0, 45.0), 0.2),
    ((30.0, 60.0), 0.2),
    ((30.0, 90.0), 0.1),
    ((36.0, 36.0), 0.2),
    ((36.0, 54.0), 0.1),
    ((36.0, 72.0), 0.1),
    ((36.0, 108.0), 0.1),
    ((42.0, 42.0), 0.2),
    ((42.0, 64.0), 0.1),
    ((42.0, 84.0), 0.1),
    ((42.0, 126.0), 0.1),
    ((48.0, 48.0), 0.1),
    ((48.0, 72.0), 0.1),
    ((48.0, 96.0), 0.1),
    ((48.0, 144.0), 0.1),
];

/// Table 18: 2-inch duct lining attenuation (dB/ft) for bands 125..8000 Hz (7 values; 63 Hz is
/// always 0), keyed by (width, height) in inches, smaller dimension first. Shares its key set
/// with [`LINING_1INCH_TABLE`].
pub const LINING_2INCH_TABLE: &[((f64, f64), [f64; 7])] = &[
    ((6.0, 6.0), [0.8, 2.9, 4.9, 7.2, 7.4, 4.3, 2.1]),
    ((6.0, 10.0), [0.7, 2.4, 4.4, 6.4, 6.1, 3.7, 1.8]),
    ((6.0, 12.0), [0.6, 2.3, 4.2, 6.2, 5.8, 3.6, 1.8]),
    ((6.0, 18.0), [0.6, 2.1, 4.0, 5.8, 5.2, 3.3, 1.6]),
    ((8.0, 8.0), [0.6, 2.3, 4.2, 6.2, 5.8, 3.6, 1.8]),
    ((8.0, 12.0), [0.6, 1.9, 3.9, 5.6, 4.9, 3.2, 1.6]),
    ((8.0, 16.0), [0.5, 1.8, 3.7, 5.4, 4.5, 3.0, 1.5]),
    ((8.0, 24.0), [0.5, 1.6, 3.5, 5.0, 4.1, 2.8, 1.4]),
    ((10.0, 10.0), [0.6, 1.9, 3.8, 5.5, 4.7, 3.1, 1.6]),
    ((10.0, 16.0), [0.5, 1.6, 3.4, 5.0, 4.0, 2.7, 1.4]),
    ((10.0, 20.0), [0.4, 1.5, 3.3, 4.8, 3.7, 2.6, 1.3]),
    ((10.0, 30.0), [0.4, 1.3, 3.1, 4.5, 3.3, 2.4, 1.2]),
    ((12.0, 12.0), [0.5, 1.6, 3.5, 5.0, 4.1, 2.8, 1.4]),
    ((12.0, 18.0), [0.4, 1.4, 3.2, 4.6, 3.5, 2.5, 1.3]),
    ((12.0, 24.0), [0.4, 1.3, 3.0, 4.3, 3.2, 2.3, 1.2]),
    ((12.0, 36.0), [0.4, 1.2, 2.9, 4.1, 2.9, 2.2, 1.1]),
    ((15.0, 15.0), [0.4, 1.3, 3.1, 4.5, 3.3, 2.4, 1.2]),
    ((15.0, 22.0), [0.4, 1.2, 2.9, 4.1, 2.9, 2.2, 1.1]),
    ((15.0, 30.0), [0.3, 1.1, 2.7, 3.9, 2.6, 2.0, 1.0]),
    ((15.0, 45.0), [0.3, 1.0, 2.6, 3.6, 2.4, 1.9, 1.0]),
    ((18.0, 18.0), [0.4, 1.2, 2.9, 4.1, 2.9, 2.2, 1.1]),
    ((18.0, 28.0), [0.3, 1.0, 2.6, 3.7, 2.4, 1.9, 1.0]),
    ((18.0, 36.0), [0.3, 0.9, 2.5, 3.5, 2.2, 1.8, 0.9]),
    ((18.0, 54.0), [0.3, 0.8, 2.3, 3.3, 2.0, 1.7, 0.9]),
    ((24.0, 24.0), [0.3, 0.9, 2.5, 3.5, 2.2, 1.8, 0.9]),
    ((24.0, 36.0), [0.3, 0.8, 2.3, 3.2, 1.9, 1.6, 0.8]),
    ((24.0, 48.0), [0.2, 0.7, 2.2, 3.0, 1.7, 1.5, 0.8]),
    ((24.0, 72.0), [0.2, 0.7, 2.0, 2.9, 1.6, 1.4, 0.7]),
    ((30.0, 30.0), [0.2, 0.8, 2.2, 3.1, 1.8, 1.6, 0.8]),
    ((30.0, 45.0), [0.2, 0.7, 2.0, 2.9, 1.6, 1.4, 0.7]),
    ((30.0, 60.0), [0.2, 0.6, 1.9, 2.7, 1.4, 1.3, 0.7]),
    ((30.0, 90.0), [0.2, 0.5, 1.8, 2.6, 1.3, 1.2, 0.6]),
    ((36.0, 36.0), [0.2, 0.7, 2.0, 2.9, 1.6, 1.4, 0.7]),
    ((36.0, 54.0), [0.2, 0.6, 1.9, 2.6, 1.3, 1.2, 0.6]),
    ((36.0, 72.0), [0.2, 0.5, 1.8, 2.5, 1.2, 1.2, 0.6]),
    ((36.0, 108.0), [0.2, 0.5, 1.7, 2.3, 1.1, 1.1, 0.6]),
    ((42.0, 42.0), [0.2, 0.6, 1.9, 2.6, 1.4, 1.3, 0.7]),
    ((42.0, 64.0), [0.2, 0.5, 1.7, 2.4, 1.2, 1.1, 0.6]),
    ((42.0, 84.0), [0.2, 0.5, 1.6, 2.3, 1.1, 1.1, 0.6]),
    ((42.0, 126.0), [0.1, 0.4, 1.6, 2.2, 1.0, 1.0, 0.5]),
    ((48.0, 48.0), [0.2, 0.5, 1.8, 2.5, 1.2, 1.2, 0.6]),
    ((48.0, 72.0), [0.2, 0.4, 1.6, 2.3, 1.0, 1.0, 0.5]),
    ((48.0, 96.0), [0.1, 0.4, 1.5, 2.1, 1.0, 1.0, 0.5]),
    ((48.0, 144.0), [0.1, 0.4, 1.5, 2.0, 0.9, 0.9, 0.5]),
];
