//! Path-level aggregation (§4.4): apply a receiver model per path, then energy-sum the resulting
//! sound-pressure spectra into a single combined receiver result.

use serde::{Deserialize, Serialize};

use crate::calculators::receiver_room::{self, ReceiverModel, ReceiverParams};
use crate::error::{EngineError, Warning};
use crate::path::PathResult;
use crate::spectrum::{energy_sum, Spectrum};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReceiverParams {
    pub path_id: String,
    pub model: ReceiverModel,
    pub distance_ft: f64,
    pub ceiling_height_ft: Option<f64>,
    pub floor_area_per_diffuser_ft2: Option<f64>,
}

/// Per-space aggregation of one or more paths' terminal spectra (§3). Persistence is a
/// collaborator's concern; this is returned plain data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverResult {
    pub combined_spectrum: [f64; 8],
    pub combined_dba: f64,
    pub nc_rating: u32,
    pub target_nc: u32,
    pub meets_target: bool,
    pub per_path_params: Vec<PathReceiverParams>,
    pub warnings: Vec<String>,
}

/// Energy-sum each path's receiver-corrected spectrum into one combined result (§4.4). Zero valid
/// path spectra is an [`EngineError::AggregationError`]-worthy condition per §7, but the core
/// never aborts — it returns a zero spectrum and a warning instead.
pub fn combine_receiver(
    path_results: &[PathResult],
    per_path_params: &[PathReceiverParams],
    target_nc: u32,
    room_volume_ft3: f64,
) -> (ReceiverResult, Vec<EngineError>) {
    let mut combined = [0.0f64; 8];
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let mut valid_paths = 0usize;

    for params in per_path_params {
        let Some(path) = path_results.iter().find(|p| p.path_id == params.path_id) else {
            warnings.push(format!("no path result found for path id {}", params.path_id));
            continue;
        };
        if !path.valid {
            warnings.push(format!("skipping invalid path {}", params.path_id));
            continue;
        }

        let mut lw_bands = [0.0; 7];
        lw_bands.copy_from_slice(&path.final_spectrum[..7]);

        let receiver_params = ReceiverParams {
            distance_ft: params.distance_ft,
            room_volume_ft3,
            ceiling_height_ft: params.ceiling_height_ft,
            floor_area_per_diffuser_ft2: params.floor_area_per_diffuser_ft2,
        };
        let (lp_bands, path_warnings) = receiver_room::apply(params.model, &lw_bands, &receiver_params);
        for w in path_warnings {
            warnings.push(format!("{}: {w}", params.path_id));
        }

        for i in 0..7 {
            combined[i] = energy_sum(combined[i], lp_bands[i]);
        }
        // 8 kHz has no tabulated receiver-correction table; carry the terminal spectrum through.
        combined[7] = energy_sum(combined[7], path.final_spectrum[7]);
        valid_paths += 1;
    }

    if valid_paths == 0 {
        let message = "no valid path spectra to aggregate".to_string();
        log::warn!("{message}");
        warnings.push(message.clone());
        errors.push(EngineError::AggregationError(message));
    }

    let mut spectrum = Spectrum(combined);
    if spectrum.guard_numeric() {
        warnings.push(Warning::NumericGuard("non-finite band zeroed during aggregation".into()).to_string());
    }

    let nc_rating = spectrum.nc_rating();
    (
        ReceiverResult {
            combined_spectrum: spectrum.0,
            combined_dba: spectrum.dba(),
            nc_rating,
            target_nc,
            meets_target: nc_rating <= target_nc,
            per_path_params: per_path_params.to_vec(),
            warnings,
        },
        errors,
    )
}
