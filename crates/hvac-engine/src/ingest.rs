//! Raw-segment ingestion (§4.3 "Element type classification from path input", §9 "Dynamic
//! fitting-type classification"): converts caller-supplied segments — where "fitting type" is an
//! arbitrary string, the way the source keys its ad-hoc records — into the engine's already-tagged
//! [`PathElement`] variants before traversal ever sees them.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::path::{DuctGeometry, DuctMaterial, DuctShape, JunctionSidePreference, JunctionType, PathElement};

/// The fixed token set the classifier recognizes (§9). Matched against a normalized vocabulary
/// rather than raw substrings, so "tee" can never collide with "steel".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FittingToken {
    Elbow,
    Tee,
    Branch,
    Wye,
    Cross,
    Junction,
}

impl FittingToken {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "elbow" | "elbow 90" | "90 elbow" => Some(FittingToken::Elbow),
            "tee" | "t-junction" | "t junction" => Some(FittingToken::Tee),
            "branch" | "branch takeoff" | "branch takeoff 90" | "takeoff" => Some(FittingToken::Branch),
            "wye" | "y-junction" | "y junction" => Some(FittingToken::Wye),
            "cross" | "x-junction" | "x junction" => Some(FittingToken::Cross),
            "junction" => Some(FittingToken::Junction),
            _ => None,
        }
    }

    /// Maps a recognized non-elbow token to the `JunctionType` the generated-noise calculator
    /// expects. Neither `Wye` nor plain `Junction` has a dedicated ASHRAE variant in this
    /// reimplementation (§9 open question); `Wye` takes the closest available proxy,
    /// `BranchTakeoff90`, and bare `Junction` defaults to `TJunction`.
    fn junction_type(self) -> Option<JunctionType> {
        match self {
            FittingToken::Tee => Some(JunctionType::TJunction),
            FittingToken::Branch => Some(JunctionType::BranchTakeoff90),
            FittingToken::Wye => Some(JunctionType::BranchTakeoff90),
            FittingToken::Cross => Some(JunctionType::XJunction),
            FittingToken::Junction => Some(JunctionType::TJunction),
            FittingToken::Elbow => None,
        }
    }

    /// Per §4.3 "Fitting placement": only these component kinds may anchor an endpoint fitting
    /// request from a neighboring duct.
    fn is_endpoint_anchor(self) -> bool {
        matches!(
            self,
            FittingToken::Elbow | FittingToken::Tee | FittingToken::Branch | FittingToken::Junction
        )
    }
}

/// A caller-supplied segment before classification. Geometry fields mirror [`DuctGeometry`];
/// `branch_*` fields are only consulted when `fitting_type` resolves to a junction-family token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSegment {
    pub id: String,
    pub fitting_type: String,
    pub length_ft: f64,
    pub shape: Option<DuctShape>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub diameter_in: Option<f64>,
    pub flow_cfm: f64,
    pub material: DuctMaterial,
    pub lining_thickness_in: f64,
    pub branch_width_in: Option<f64>,
    pub branch_height_in: Option<f64>,
    pub branch_diameter_in: Option<f64>,
    pub branch_flow_cfm: Option<f64>,
    pub bend_radius_in: f64,
    pub turbulence: bool,
    pub side_preference: JunctionSidePreference,
    /// Id of a preceding/following segment this one requests an upstream fitting from. Honored
    /// only if that segment classifies as elbow/branch/tee/junction (§4.3); otherwise ignored.
    pub upstream_fitting: Option<String>,
    pub downstream_fitting: Option<String>,
}

fn geometry_from_raw(seg: &RawSegment) -> DuctGeometry {
    DuctGeometry {
        shape: seg.shape.unwrap_or(DuctShape::Rectangular),
        width_in: seg.width_in,
        height_in: seg.height_in,
        diameter_in: seg.diameter_in,
    }
}

fn has_positive_geometry(geometry: &DuctGeometry) -> bool {
    matches!(geometry.area_ft2(), Some(a) if a > 0.0)
}

/// Classifies one raw segment (§4.3). A segment with non-zero dimensions is always a duct,
/// regardless of fitting token — e.g. a 6"x6" segment tagged "elbow" is still a duct; the token
/// is discarded rather than overriding geometry. A zero-dimension segment is reclassified by its
/// token into an elbow or junction element; an unrecognized token on a zero-dimension segment is
/// an [`EngineError::InvalidInput`] — this reimplementation rejects early rather than guessing via
/// substring matching (§9).
pub fn classify_raw_segment(seg: &RawSegment) -> Result<PathElement, EngineError> {
    let geometry = geometry_from_raw(seg);
    let zero_dimension = seg.length_ft <= 0.0 && !has_positive_geometry(&geometry);

    if !zero_dimension {
        return Ok(PathElement::Duct {
            id: seg.id.clone(),
            geometry,
            length_ft: seg.length_ft,
            material: seg.material,
            lining_thickness_in: seg.lining_thickness_in,
            flow_cfm: Some(seg.flow_cfm),
        });
    }

    let token = FittingToken::parse(&seg.fitting_type).ok_or_else(|| {
        EngineError::InvalidInput(format!(
            "segment {} has zero dimensions but an unrecognized fitting token '{}'",
            seg.id, seg.fitting_type
        ))
    })?;

    match token {
        FittingToken::Elbow => Ok(PathElement::Elbow {
            id: seg.id.clone(),
            geometry,
            flow_cfm: seg.flow_cfm,
            vane_chord_in: None,
            vane_count: None,
            pressure_drop_inwg: 0.0,
        }),
        _ => {
            let kind = token
                .junction_type()
                .expect("every non-elbow token maps to a junction type");
            Ok(PathElement::Junction {
                id: seg.id.clone(),
                kind,
                main: geometry,
                main_flow_cfm: seg.flow_cfm,
                branch: DuctGeometry {
                    shape: geometry.shape,
                    width_in: seg.branch_width_in,
                    height_in: seg.branch_height_in,
                    diameter_in: seg.branch_diameter_in,
                },
                branch_flow_cfm: seg.branch_flow_cfm.unwrap_or(seg.flow_cfm),
                bend_radius_in: seg.bend_radius_in,
                turbulence: seg.turbulence,
                side_preference: seg.side_preference,
            })
        }
    }
}

/// Classifies a whole raw path and resolves endpoint-fitting-placement requests (§4.3). Stops at
/// the first unrecognized fitting token ([`EngineError::InvalidInput`], consistent with path
/// validation's other fatal conditions). A placement request anchored on a non-fitting neighbor is
/// not an error — it is dropped with a warning, matching the source's silent-ignore behavior.
pub fn ingest_raw_segments(segments: &[RawSegment]) -> Result<(Vec<PathElement>, Vec<String>), EngineError> {
    let mut elements = Vec::with_capacity(segments.len());
    for seg in segments {
        elements.push(classify_raw_segment(seg)?);
    }

    let mut warnings = Vec::new();
    for seg in segments {
        for (direction, requested) in [
            ("upstream", &seg.upstream_fitting),
            ("downstream", &seg.downstream_fitting),
        ] {
            let Some(anchor_id) = requested else { continue };
            let anchor_is_eligible = segments
                .iter()
                .find(|s| &s.id == anchor_id)
                .and_then(|s| FittingToken::parse(&s.fitting_type))
                .is_some_and(FittingToken::is_endpoint_anchor);
            if !anchor_is_eligible {
                warnings.push(format!(
                    "segment {}'s {direction} fitting request referencing '{anchor_id}' was ignored: \
                     not an elbow/branch/tee/junction",
                    seg.id
                ));
            }
        }
    }

    Ok((elements, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_segment(id: &str, fitting_type: &str) -> RawSegment {
        RawSegment {
            id: id.to_string(),
            fitting_type: fitting_type.to_string(),
            length_ft: 0.0,
            shape: Some(DuctShape::Rectangular),
            width_in: None,
            height_in: None,
            diameter_in: None,
            flow_cfm: 500.0,
            material: DuctMaterial::SheetMetal,
            lining_thickness_in: 0.0,
            branch_width_in: Some(12.0),
            branch_height_in: Some(12.0),
            branch_diameter_in: None,
            branch_flow_cfm: None,
            bend_radius_in: 0.0,
            turbulence: false,
            side_preference: JunctionSidePreference::Auto,
            upstream_fitting: None,
            downstream_fitting: None,
        }
    }

    #[test]
    fn nonzero_dimension_segment_is_always_a_duct_regardless_of_token() {
        let mut seg = base_segment("d1", "elbow");
        seg.length_ft = 10.0;
        seg.width_in = Some(12.0);
        seg.height_in = Some(8.0);
        let element = classify_raw_segment(&seg).unwrap();
        assert!(matches!(element, PathElement::Duct { .. }));
    }

    #[test]
    fn zero_dimension_elbow_token_becomes_pure_elbow() {
        let seg = base_segment("e1", "elbow");
        let element = classify_raw_segment(&seg).unwrap();
        assert!(matches!(element, PathElement::Elbow { .. }));
    }

    #[test]
    fn zero_dimension_tee_token_becomes_t_junction() {
        let seg = base_segment("j1", "t-junction");
        let element = classify_raw_segment(&seg).unwrap();
        match element {
            PathElement::Junction { kind, .. } => assert_eq!(kind, JunctionType::TJunction),
            other => panic!("expected Junction, got {other:?}"),
        }
    }

    #[test]
    fn zero_dimension_cross_token_becomes_x_junction() {
        let seg = base_segment("j2", "x-junction");
        let element = classify_raw_segment(&seg).unwrap();
        match element {
            PathElement::Junction { kind, .. } => assert_eq!(kind, JunctionType::XJunction),
            other => panic!("expected Junction, got {other:?}"),
        }
    }

    #[test]
    fn zero_dimension_unrecognized_token_is_invalid_input() {
        let seg = base_segment("bad1", "steel");
        let err = classify_raw_segment(&seg).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn fitting_placement_anchored_on_duct_is_ignored_with_warning() {
        let mut duct = base_segment("d1", "duct");
        duct.length_ft = 10.0;
        duct.width_in = Some(12.0);
        duct.height_in = Some(8.0);
        duct.downstream_fitting = Some("d2".to_string());
        let mut other_duct = base_segment("d2", "duct2");
        other_duct.length_ft = 5.0;
        other_duct.width_in = Some(12.0);
        other_duct.height_in = Some(8.0);

        let (_, warnings) = ingest_raw_segments(&[duct, other_duct]).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ignored"));
    }

    #[test]
    fn fitting_placement_anchored_on_elbow_is_accepted() {
        let mut duct = base_segment("d1", "duct");
        duct.length_ft = 10.0;
        duct.width_in = Some(12.0);
        duct.height_in = Some(8.0);
        duct.downstream_fitting = Some("e1".to_string());
        let elbow = base_segment("e1", "elbow");

        let (_, warnings) = ingest_raw_segments(&[duct, elbow]).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn an_unrecognized_token_anywhere_in_the_path_stops_ingestion() {
        let bad = base_segment("bad1", "not-a-real-fitting");
        let err = ingest_raw_segments(&[bad]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }
}
