//! Path traversal engine (§4.3): walks an ordered [`PathElement`] list, threading a mutable
//! spectrum through each element's calculator and recording a [`PathElementResult`] per stop.

use serde::{Deserialize, Serialize};

use crate::calculators::{circular_duct, elbow, flex_duct, junction, rectangular_duct, terminal};
use crate::error::{EngineError, Warning};
use crate::spectrum::{estimate_spectrum_from_dba, Spectrum};

pub use crate::calculators::junction::JunctionType;
pub use crate::calculators::terminal::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuctShape {
    Rectangular,
    Circular,
}

/// Normalizes the source's "round"/"circular" ambiguity (§9) once, at the boundary, rather than
/// leaving two code paths to disagree about which strings mean circular.
impl DuctShape {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "rectangular" | "rect" => Some(DuctShape::Rectangular),
            "circular" | "round" => Some(DuctShape::Circular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuctMaterial {
    SheetMetal,
    Fiberglass,
    Flexible,
}

/// Operator's preferred spectrum side at a junction, per §4.2's last paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JunctionSidePreference {
    Auto,
    Main,
    Branch,
}

/// A duct cross-section, carried explicitly so terminal elements can inherit it (§4.3) and
/// junction elements can derive equivalent diameters and areas from it (§4.2).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DuctGeometry {
    pub shape: DuctShape,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub diameter_in: Option<f64>,
}

impl DuctGeometry {
    pub fn area_ft2(&self) -> Option<f64> {
        match self.shape {
            DuctShape::Rectangular => {
                let (w, h) = (self.width_in?, self.height_in?);
                Some((w / 12.0) * (h / 12.0))
            }
            DuctShape::Circular => {
                let d = self.diameter_in? / 12.0;
                Some(std::f64::consts::PI * d * d / 4.0)
            }
        }
    }

    pub fn diameter_ft(&self) -> Option<f64> {
        match self.shape {
            DuctShape::Circular => Some(self.diameter_in? / 12.0),
            DuctShape::Rectangular => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathElement {
    Source {
        id: String,
        overall_dba: f64,
        explicit_spectrum: Option<[f64; 8]>,
        flow_cfm: f64,
    },
    Duct {
        id: String,
        geometry: DuctGeometry,
        length_ft: f64,
        material: DuctMaterial,
        lining_thickness_in: f64,
        flow_cfm: Option<f64>,
    },
    Elbow {
        id: String,
        geometry: DuctGeometry,
        flow_cfm: f64,
        vane_chord_in: Option<f64>,
        vane_count: Option<u32>,
        pressure_drop_inwg: f64,
    },
    Junction {
        id: String,
        kind: JunctionType,
        main: DuctGeometry,
        main_flow_cfm: f64,
        branch: DuctGeometry,
        branch_flow_cfm: f64,
        bend_radius_in: f64,
        turbulence: bool,
        side_preference: JunctionSidePreference,
    },
    FlexDuct {
        id: String,
        diameter_in: f64,
        length_ft: f64,
    },
    Terminal {
        id: String,
        termination: Termination,
        geometry: Option<DuctGeometry>,
        room_volume_ft3: Option<f64>,
    },
}

impl PathElement {
    pub fn id(&self) -> &str {
        match self {
            PathElement::Source { id, .. }
            | PathElement::Duct { id, .. }
            | PathElement::Elbow { id, .. }
            | PathElement::Junction { id, .. }
            | PathElement::FlexDuct { id, .. }
            | PathElement::Terminal { id, .. } => id,
        }
    }
}

/// Per-element outcome (§3). Attenuation and generated spectra are independently optional so
/// composition can't silently drop one side, per §9's design note on the result carrier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathElementResult {
    pub element_id: String,
    pub attenuation_spectrum: Option<[f64; 8]>,
    pub generated_spectrum: Option<[f64; 8]>,
    pub noise_before_dba: f64,
    pub noise_after_dba: f64,
    pub state_after: [f64; 8],
    pub nc_rating: u32,
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub path_id: String,
    pub source_dba: f64,
    pub terminal_dba: f64,
    pub total_attenuation_dba: f64,
    pub nc_rating: u32,
    pub final_spectrum: [f64; 8],
    pub element_results: Vec<PathElementResult>,
    pub warnings: Vec<String>,
    pub valid: bool,
    pub error: Option<String>,
}

const DEFAULT_SOURCE_DBA: f64 = 50.0;

/// Pre-traversal validation (§4.3). Returns `(valid, warnings)`. An empty list, a duct with
/// non-positive length, and a duct missing every usable dimension are fatal
/// [`EngineError::InvalidInput`] conditions (§7) and make the whole path invalid; a missing
/// source or a fitting with negative flow are recorded as warnings and traversal proceeds.
pub fn validate_path_elements(elements: &[PathElement]) -> (bool, Vec<String>) {
    if elements.is_empty() {
        return (false, vec!["path has no elements".to_string()]);
    }

    let mut fatal: Vec<EngineError> = Vec::new();
    let mut warnings = Vec::new();
    let has_source = elements.iter().any(|e| matches!(e, PathElement::Source { .. }));
    if !has_source {
        warnings.push("path has no source element; using default 50 dBA spectrum".to_string());
    }

    for element in elements {
        match element {
            PathElement::Duct { id, geometry, length_ft, .. } => {
                if *length_ft <= 0.0 {
                    fatal.push(EngineError::InvalidInput(format!(
                        "duct {id} has non-positive length ({length_ft} ft)"
                    )));
                }
                if geometry.area_ft2().is_none() {
                    fatal.push(EngineError::InvalidInput(format!(
                        "duct {id} is missing both width/height and diameter"
                    )));
                }
            }
            PathElement::Elbow { id, flow_cfm, .. } => {
                if *flow_cfm < 0.0 {
                    warnings.push(format!("elbow {id} has negative flow rate"));
                }
            }
            PathElement::Junction {
                id,
                main_flow_cfm,
                branch_flow_cfm,
                ..
            } => {
                if *main_flow_cfm < 0.0 || *branch_flow_cfm < 0.0 {
                    warnings.push(format!("junction {id} has negative flow rate"));
                }
            }
            _ => {}
        }
    }

    if fatal.is_empty() {
        (true, warnings)
    } else {
        warnings.extend(fatal.iter().map(|e| e.to_string()));
        (false, warnings)
    }
}

struct ElementOutcome {
    attenuation: Option<Spectrum>,
    generated: Option<Spectrum>,
    error: Option<String>,
    warnings: Vec<Warning>,
}

fn warnings_to_strings(warnings: &[Warning]) -> Vec<String> {
    warnings.iter().map(|w| w.to_string()).collect()
}

fn evaluate_element(element: &PathElement, last_duct: &Option<DuctGeometry>) -> ElementOutcome {
    match element {
        PathElement::Source { .. } => ElementOutcome {
            attenuation: None,
            generated: None,
            error: None,
            warnings: Vec::new(),
        },
        PathElement::Duct {
            geometry,
            length_ft,
            material,
            lining_thickness_in,
            ..
        } => {
            let (spectrum, warnings) = match geometry.shape {
                DuctShape::Rectangular => {
                    let (w, h) = match (geometry.width_in, geometry.height_in) {
                        (Some(w), Some(h)) => (w, h),
                        _ => {
                            return ElementOutcome {
                                attenuation: None,
                                generated: None,
                                error: Some("rectangular duct missing width/height".to_string()),
                                warnings: Vec::new(),
                            }
                        }
                    };
                    match (material, *lining_thickness_in) {
                        (_, t) if t >= 1.5 => rectangular_duct::lined_2in(w, h, *length_ft),
                        (_, t) if t >= 0.5 => rectangular_duct::lined_1in(w, h, *length_ft),
                        _ => rectangular_duct::unlined(w, h, *length_ft),
                    }
                }
                DuctShape::Circular => {
                    let d = match geometry.diameter_in {
                        Some(d) => d,
                        None => {
                            return ElementOutcome {
                                attenuation: None,
                                generated: None,
                                error: Some("circular duct missing diameter".to_string()),
                                warnings: Vec::new(),
                            }
                        }
                    };
                    if *lining_thickness_in > 0.0 {
                        circular_duct::lined(d, *lining_thickness_in, *length_ft)
                    } else {
                        circular_duct::unlined(d, *length_ft)
                    }
                }
            };
            ElementOutcome {
                attenuation: Some(spectrum),
                generated: None,
                error: None,
                warnings,
            }
        }
        PathElement::FlexDuct { diameter_in, length_ft, .. } => {
            let (spectrum, warnings) = flex_duct::insertion_loss(*diameter_in, *length_ft);
            ElementOutcome {
                attenuation: Some(spectrum),
                generated: None,
                error: None,
                warnings,
            }
        }
        PathElement::Elbow {
            geometry,
            flow_cfm,
            vane_chord_in,
            vane_count,
            pressure_drop_inwg,
            ..
        } => {
            let area = match geometry.area_ft2() {
                Some(a) => a,
                None => {
                    return ElementOutcome {
                        attenuation: None,
                        generated: None,
                        error: Some("elbow missing usable geometry".to_string()),
                        warnings: Vec::new(),
                    }
                }
            };
            let (spectrum, warnings) = match (vane_chord_in, vane_count) {
                (Some(chord), Some(count)) if *chord > 0.0 && *count > 0 => elbow::vaned(elbow::VanedElbow {
                    flow_cfm: *flow_cfm,
                    duct_area_ft2: area,
                    duct_height_in: geometry.height_in.unwrap_or(0.0),
                    vane_chord_in: *chord,
                    vane_count: *count,
                    pressure_drop_inwg: *pressure_drop_inwg,
                }),
                _ => {
                    let shape = match geometry.shape {
                        DuctShape::Rectangular => junction::DuctShape::Rectangular,
                        DuctShape::Circular => junction::DuctShape::Circular,
                    };
                    elbow::bare_elbow(area, geometry.diameter_ft().unwrap_or(0.0), shape, *flow_cfm)
                }
            };
            ElementOutcome {
                attenuation: None,
                generated: Some(spectrum),
                error: None,
                warnings,
            }
        }
        PathElement::Junction {
            kind,
            main,
            main_flow_cfm,
            branch,
            branch_flow_cfm,
            bend_radius_in,
            turbulence,
            side_preference,
            ..
        } => {
            let (Some(main_area), Some(branch_area)) = (main.area_ft2(), branch.area_ft2()) else {
                return ElementOutcome {
                    attenuation: None,
                    generated: None,
                    error: Some("junction missing usable geometry".to_string()),
                    warnings: Vec::new(),
                };
            };
            let to_side = |geometry: &DuctGeometry, area: f64, flow: f64| junction::DuctSide {
                shape: match geometry.shape {
                    DuctShape::Rectangular => junction::DuctShape::Rectangular,
                    DuctShape::Circular => junction::DuctShape::Circular,
                },
                area_ft2: area,
                diameter_ft: geometry.diameter_ft().unwrap_or(0.0),
                flow_cfm: flow,
            };
            let main_side = to_side(main, main_area, *main_flow_cfm);
            let branch_side = to_side(branch, branch_area, *branch_flow_cfm);
            let (noise, warnings) =
                junction::generated_noise(*kind, main_side, branch_side, *bend_radius_in, *turbulence);

            let use_branch = match side_preference {
                JunctionSidePreference::Branch => true,
                JunctionSidePreference::Main => false,
                JunctionSidePreference::Auto => {
                    branch_area > 0.0 && ((branch_area - main_area).abs() / branch_area) <= 0.05
                }
            };
            let spectrum = if use_branch { noise.branch } else { noise.main };

            ElementOutcome {
                attenuation: None,
                generated: Some(spectrum),
                error: None,
                warnings,
            }
        }
        PathElement::Terminal { termination, geometry, .. } => {
            let geometry = geometry.or(*last_duct);
            let (w, h, d) = match geometry {
                Some(g) => (g.width_in, g.height_in, g.diameter_in),
                None => (None, None, None),
            };
            let (spectrum, warnings) = terminal::end_reflection_loss(*termination, w, h, d);
            ElementOutcome {
                attenuation: Some(spectrum),
                generated: None,
                error: None,
                warnings,
            }
        }
    }
}

/// Walk the path, dispatching each element to its calculator and producing a complete
/// [`PathResult`] (§4.3). Never returns `Err`: a missing source or an empty path becomes an
/// invalid-but-present result; calculator failures become per-element error strings.
pub fn calculate_path_noise(
    path_id: &str,
    elements: &[PathElement],
    source_spectrum_override: Option<[f64; 8]>,
) -> PathResult {
    log::debug!("calculating path noise for {path_id} ({} elements)", elements.len());
    let (valid, mut warnings) = validate_path_elements(elements);
    if !valid {
        let error = warnings.join("; ");
        return PathResult {
            path_id: path_id.to_string(),
            source_dba: 0.0,
            terminal_dba: 0.0,
            total_attenuation_dba: 0.0,
            nc_rating: 0,
            final_spectrum: [0.0; 8],
            element_results: Vec::new(),
            warnings,
            valid: false,
            error: Some(error),
        };
    }

    let source_element = elements.iter().find(|e| matches!(e, PathElement::Source { .. }));
    let (source_overall_dba, mut current) = match source_element {
        Some(PathElement::Source {
            overall_dba,
            explicit_spectrum,
            ..
        }) => {
            let spectrum = match source_spectrum_override.or(*explicit_spectrum) {
                Some(bands) => Spectrum(bands),
                None => estimate_spectrum_from_dba(*overall_dba),
            };
            (*overall_dba, spectrum)
        }
        _ => (DEFAULT_SOURCE_DBA, estimate_spectrum_from_dba(DEFAULT_SOURCE_DBA)),
    };

    let mut element_results = Vec::new();
    element_results.push(PathElementResult {
        element_id: source_element.map(|e| e.id().to_string()).unwrap_or_else(|| "source_default".to_string()),
        attenuation_spectrum: None,
        generated_spectrum: None,
        noise_before_dba: source_overall_dba,
        noise_after_dba: current.dba(),
        state_after: current.0,
        nc_rating: current.nc_rating(),
        error: None,
        warnings: Vec::new(),
    });

    let mut total_attenuation_dba = 0.0;
    let mut last_duct: Option<DuctGeometry> = None;

    for element in elements.iter().filter(|e| !matches!(e, PathElement::Source { .. })) {
        let before_dba = current.dba();
        let outcome = evaluate_element(element, &last_duct);

        let mut element_warnings = warnings_to_strings(&outcome.warnings);
        let (attenuation_spectrum, generated_spectrum) = if outcome.error.is_some() {
            (None, None)
        } else {
            let mut working = current;
            let attenuation_recorded = outcome.attenuation.map(|att| {
                working = working.subtract_attenuation(&att);
                att.0
            });
            let generated_recorded = outcome.generated.map(|gen| {
                working = working.add_generated(&gen);
                gen.0
            });
            if working.guard_numeric() {
                element_warnings.push("non-finite band zeroed by numeric guard".to_string());
            }
            current = working;
            (attenuation_recorded, generated_recorded)
        };

        if let Some(att) = attenuation_spectrum {
            total_attenuation_dba += Spectrum(att).dba();
        }

        if let PathElement::Duct { geometry, .. } = element {
            last_duct = Some(*geometry);
        }

        element_results.push(PathElementResult {
            element_id: element.id().to_string(),
            attenuation_spectrum,
            generated_spectrum,
            noise_before_dba: before_dba,
            noise_after_dba: current.dba(),
            state_after: current.0,
            nc_rating: current.nc_rating(),
            error: outcome.error.clone(),
            warnings: element_warnings,
        });

        if let Some(err) = outcome.error {
            log::warn!("calculator error on element {}: {err}", element.id());
            warnings.push(format!("{}: {err}", element.id()));
        }
    }

    let terminal_dba = current.dba();
    PathResult {
        path_id: path_id.to_string(),
        source_dba: source_overall_dba,
        terminal_dba,
        total_attenuation_dba,
        nc_rating: current.nc_rating(),
        final_spectrum: current.0,
        element_results,
        warnings,
        valid: true,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn source_only_matches_scenario_one() {
        let elements = vec![PathElement::Source {
            id: "s1".to_string(),
            overall_dba: 50.0,
            explicit_spectrum: None,
            flow_cfm: 0.0,
        }];
        let result = calculate_path_noise("p1", &elements, None);
        assert!(result.valid);
        assert_abs_diff_eq!(
            result.final_spectrum.as_slice(),
            [50.0, 48.0, 49.0, 50.0, 51.0, 52.0, 51.0, 49.0].as_slice(),
            epsilon = 1e-9
        );
        assert_eq!(result.nc_rating, 50);
    }

    #[test]
    fn unlined_circular_duct_matches_scenario_two() {
        let elements = vec![
            PathElement::Source {
                id: "s1".to_string(),
                overall_dba: 50.0,
                explicit_spectrum: Some([72.0, 70.0, 64.0, 59.0, 56.0, 52.0, 52.0, 52.0]),
                flow_cfm: 0.0,
            },
            PathElement::Duct {
                id: "d1".to_string(),
                geometry: DuctGeometry {
                    shape: DuctShape::Circular,
                    width_in: None,
                    height_in: None,
                    diameter_in: Some(18.0),
                },
                length_ft: 10.0,
                material: DuctMaterial::SheetMetal,
                lining_thickness_in: 0.0,
                flow_cfm: None,
            },
        ];
        let result = calculate_path_noise("p2", &elements, None);
        assert_abs_diff_eq!(
            result.final_spectrum.as_slice(),
            [71.8, 69.8, 63.8, 58.7, 55.5, 51.5, 51.5, 52.0].as_slice(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn empty_path_is_invalid_with_zero_spectrum() {
        let result = calculate_path_noise("empty", &[], None);
        assert!(!result.valid);
        assert_eq!(result.final_spectrum, [0.0; 8]);
    }

    #[test]
    fn missing_source_uses_default_with_warning() {
        let elements = vec![PathElement::FlexDuct {
            id: "f1".to_string(),
            diameter_in: 6.0,
            length_ft: 9.0,
        }];
        let result = calculate_path_noise("no-source", &elements, None);
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("no source")));
    }

    #[test]
    fn duct_shape_token_normalizes_round_to_circular() {
        assert_eq!(DuctShape::parse("round"), Some(DuctShape::Circular));
        assert_eq!(DuctShape::parse("circular"), Some(DuctShape::Circular));
    }

    #[test]
    fn nonpositive_duct_length_invalidates_the_path() {
        let elements = vec![
            PathElement::Source {
                id: "s1".to_string(),
                overall_dba: 50.0,
                explicit_spectrum: None,
                flow_cfm: 0.0,
            },
            PathElement::Duct {
                id: "d1".to_string(),
                geometry: DuctGeometry {
                    shape: DuctShape::Circular,
                    width_in: None,
                    height_in: None,
                    diameter_in: Some(12.0),
                },
                length_ft: 0.0,
                material: DuctMaterial::SheetMetal,
                lining_thickness_in: 0.0,
                flow_cfm: None,
            },
        ];
        let result = calculate_path_noise("bad-length", &elements, None);
        assert!(!result.valid);
        assert_eq!(result.final_spectrum, [0.0; 8]);
        assert!(result.error.as_ref().unwrap().contains("non-positive length"));
        assert!(result.element_results.is_empty());
    }

    #[test]
    fn duct_missing_both_rectangular_and_circular_geometry_invalidates_the_path() {
        let elements = vec![
            PathElement::Source {
                id: "s1".to_string(),
                overall_dba: 50.0,
                explicit_spectrum: None,
                flow_cfm: 0.0,
            },
            PathElement::Duct {
                id: "d1".to_string(),
                geometry: DuctGeometry {
                    shape: DuctShape::Rectangular,
                    width_in: None,
                    height_in: None,
                    diameter_in: None,
                },
                length_ft: 10.0,
                material: DuctMaterial::SheetMetal,
                lining_thickness_in: 0.0,
                flow_cfm: None,
            },
        ];
        let result = calculate_path_noise("bad-geometry", &elements, None);
        assert!(!result.valid);
        assert!(result
            .error
            .as_ref()
            .unwrap()
            .contains("missing both width/height and diameter"));
    }
}
