//! Per-element calculators (§4.2): pure functions over geometry/flow/material that return a
//! [`Spectrum`](crate::spectrum::Spectrum) plus any warnings raised while producing it.

pub mod circular_duct;
pub mod elbow;
pub mod flex_duct;
pub mod junction;
pub mod receiver_room;
pub mod rectangular_duct;
pub mod terminal;
