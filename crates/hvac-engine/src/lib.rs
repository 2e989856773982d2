//! HVAC-borne background noise acoustic simulation engine: per-element ASHRAE calculators, a path
//! traversal state machine, and multi-path receiver aggregation.

pub mod aggregate;
pub mod calculators;
pub mod error;
pub mod ingest;
pub mod path;
pub mod spectrum;
pub mod tables;

pub use aggregate::{combine_receiver, PathReceiverParams, ReceiverResult};
pub use error::{EngineError, Warning};
pub use ingest::{classify_raw_segment, ingest_raw_segments, FittingToken, RawSegment};
pub use path::{calculate_path_noise, validate_path_elements, PathElement, PathElementResult, PathResult};
pub use spectrum::Spectrum;
