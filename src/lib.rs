//! A flexbox layout engine.
//!
//! Build a tree of styled nodes in a [`LayoutTree`], call
//! [`LayoutTree::calculate_layout`] with a [`LayoutContext`], then read each
//! node's [`LayoutResult`]. Subtrees whose style and constraints did not
//! change since the previous layout are reused rather than recomputed, and
//! leaves with intrinsic content (text, images) report their size through a
//! [`MeasureFunc`].
//!
//! Trees can also be described as JSON, see [`document`].

pub mod document;

pub use flexlay_layout::{
    DebugProfiler, LayoutConfig, LayoutContext, LayoutError, LayoutResult, LayoutState, LayoutTree,
    MEASUREMENT_CACHE_CAPACITY, MeasureFunc, MeasureMode, NoOpProfiler, NodeId, PrintOptions, Profiler,
    measure_fn,
};
pub use flexlay_style::{
    Align, Direction, FlexDirection, FlexWrap, JustifyContent, Keyword, PositionType, Spacing, Style,
    StyleParseError, parse_length_value, parse_spacing_shorthand,
};
pub use flexlay_types::{Dimension, EPSILON, Edge, Rect, Size, UNDEFINED, floats_equal};

pub use document::{DocumentError, LayoutSnapshot, NodeDocument, StyleDocument, build_from_json};
