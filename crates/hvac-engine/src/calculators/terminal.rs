//! Terminal end-reflection loss (ERL). The retrieved reference material confirms a
//! `termination_type` of flush/free is threaded through to the terminal element but does not
//! include the underlying formula (the module that computes it was not part of the retrieved
//! source); this uses the standard ASHRAE end-reflection relation for an unflanged/flanged duct
//! opening, which only the low-frequency bands see any meaningful loss from.

use crate::error::Warning;
use crate::spectrum::{Spectrum, FREQUENCY_BANDS};

const SPEED_OF_SOUND_FT_S: f64 = 1125.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Grille/diffuser flush-mounted in a wall or ceiling (flanged opening).
    Flush,
    /// Open duct end projecting into the room (unflanged opening).
    Free,
}

fn equivalent_diameter_ft(width_in: Option<f64>, height_in: Option<f64>, diameter_in: Option<f64>) -> Option<f64> {
    if let Some(d) = diameter_in {
        return Some(d / 12.0);
    }
    let (w, h) = (width_in?, height_in?);
    Some((4.0 * w * h / std::f64::consts::PI).sqrt() / 12.0)
}

/// End-reflection loss spectrum for a terminal with the given duct dimensions inherited from the
/// last preceding duct element. A flush (flanged) termination reflects roughly twice the duct
/// opening's area back into the duct, adding ~6 dB at low frequency over a free (unflanged) end.
pub fn end_reflection_loss(
    termination: Termination,
    width_in: Option<f64>,
    height_in: Option<f64>,
    diameter_in: Option<f64>,
) -> (Spectrum, Vec<Warning>) {
    let Some(d_eq) = equivalent_diameter_ft(width_in, height_in, diameter_in) else {
        return (
            Spectrum::silence(),
            vec![Warning::OutOfRange(
                "terminal missing duct dimensions; end-reflection loss skipped".into(),
            )],
        );
    };

    let flange_gain = match termination {
        Termination::Flush => 2.0,
        Termination::Free => 1.0,
    };

    let mut bands = [0.0; 8];
    for (i, &f) in FREQUENCY_BANDS.iter().enumerate() {
        let ratio = SPEED_OF_SOUND_FT_S / (std::f64::consts::PI * f * d_eq);
        let value = 10.0 * (1.0 + flange_gain * ratio * ratio).log10();
        bands[i] = if value.is_finite() { value.max(0.0) } else { 0.0 };
    }
    (Spectrum(bands), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_decreases_with_frequency() {
        let (spectrum, _) = end_reflection_loss(Termination::Flush, None, None, Some(12.0));
        for w in spectrum.0.windows(2) {
            assert!(w[0] >= w[1] - 1e-9);
        }
    }

    #[test]
    fn flush_mounting_is_never_quieter_than_free() {
        let (flush, _) = end_reflection_loss(Termination::Flush, None, None, Some(12.0));
        let (free, _) = end_reflection_loss(Termination::Free, None, None, Some(12.0));
        for i in 0..8 {
            assert!(flush.0[i] >= free.0[i] - 1e-9);
        }
    }

    #[test]
    fn missing_dimensions_is_silent_with_warning() {
        let (spectrum, warnings) = end_reflection_loss(Termination::Free, None, None, None);
        assert_eq!(spectrum, Spectrum::silence());
        assert_eq!(warnings.len(), 1);
    }
}
