pub mod float;
pub mod geometry;

pub use float::{EPSILON, UNDEFINED, floats_equal, is_defined_non_negative, is_undefined, or_zero};
pub use geometry::{Dimension, Edge, Rect, Size};
