// Positioning of tooltips and popovers around an anchor element

pub mod placement;
pub mod position;

pub use placement::{Alignment, Axis, Placement};
pub use position::{
    AbsolutePosition, FloatingPosition, PositionOptions, compute_alignment, compute_placement,
    compute_position,
};
