//! ASHRAE Tables 5.5-5.6: circular duct attenuation/insertion-loss coefficients.

/// Table 5.5: unlined circular duct attenuation (dB/ft), bands 63..4000 Hz (8 kHz is always 0),
/// bucketed by diameter range. Upper bound of each bracket, inclusive.
pub const UNLINED_DIAMETER_BRACKETS: &[(f64, [f64; 7])] = &[
    (7.0, [0.03, 0.03, 0.05, 0.05, 0.10, 0.10, 0.10]),
    (15.0, [0.03, 0.03, 0.03, 0.05, 0.07, 0.07, 0.07]),
    (30.0, [0.02, 0.02, 0.02, 0.03, 0.05, 0.05, 0.05]),
    (60.0, [0.01, 0.01, 0.01, 0.02, 0.02, 0.02, 0.02]),
];

/// Table 5.6: per-band coefficients {A,B,C,D,E,F} for Equation 5.18
/// `IL = (A + B*t + C*t^2 + D*d + E*d^2 + F*d^3) * L`, ordered 63..8000 Hz.
pub const LINED_COEFFICIENTS: [[f64; 6]; 8] = [
    [0.2825, 0.3447, -5.251e-2, -0.03837, 9.1315e-4, -8.294e-6],
    [0.5237, 0.2234, -4.936e-3, -0.02724, 3.377e-4, -2.49e-4],
    [0.3652, 0.79, -0.1157, -1.834e-2, -1.211e-4, 2.681e-4],
    [0.1333, 1.845, -0.3735, -1.293e-2, 8.624e-5, -4.986e-6],
    [1.933, 0.0, 0.0, 6.135e-2, -3.891e-3, 3.934e-5],
    [2.73, 0.0, 0.0, -7.341e-2, 4.428e-4, 1.006e-6],
    [2.8, 0.0, 0.0, -0.1467, 3.404e-3, -2.851e-5],
    [1.545, 0.0, 0.0, -5.452e-2, 1.290e-3, -1.318e-5],
];
