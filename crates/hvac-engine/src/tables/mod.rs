//! Raw ASHRAE coefficient tables, kept separate from the calculators that interpolate over them.

pub mod circular_duct;
pub mod flex_duct;
pub mod receiver_room;
pub mod rect_duct;
