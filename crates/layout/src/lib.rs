use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Child {0:?} already has a parent, it must be removed first.")]
    ChildAlreadyParented(NodeId),
    #[error("Child index {index} is out of bounds for a node with {count} children.")]
    ChildIndexOutOfBounds { index: usize, count: usize },
    #[error("Node {0:?} cannot both have children and a measure function.")]
    MeasureWithChildren(NodeId),
    #[error("Node {0:?} has no measure function.")]
    MeasureNotDefined(NodeId),
    #[error("Previous layout of node {0:?} was never marked as seen.")]
    LayoutNotConsumed(NodeId),
    #[error("Node {0:?} has no new layout to be marked as seen.")]
    LayoutNotPending(NodeId),
    #[error("Node {0:?} is still attached to a parent or has children.")]
    ResetAttached(NodeId),
    #[error("Node {0:?} does not exist in this tree.")]
    InvalidNode(NodeId),
    #[error("Node {0:?} cannot be attached to itself or one of its descendants.")]
    SelfAttachment(NodeId),
}

pub mod cache;
pub mod config;
pub mod context;
pub mod measure;
pub mod node;
pub mod perf;
pub mod print;
pub mod result;
pub mod tree;

mod axis;
mod engine;
mod rounding;

pub use self::config::{LayoutConfig, MEASUREMENT_CACHE_CAPACITY};
pub use self::context::LayoutContext;
pub use self::measure::{MeasureFunc, MeasureMode};
pub use self::node::LayoutState;
pub use self::perf::{DebugProfiler, NoOpProfiler, Profiler};
pub use self::print::PrintOptions;
pub use self::result::LayoutResult;
pub use self::tree::{LayoutTree, NodeId, measure_fn};

// Re-export the foundation types the public API is expressed in
pub use flexlay_style::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, PositionType, Spacing, Style};
pub use flexlay_types::{Dimension, Edge, Rect, Size, UNDEFINED};

#[cfg(test)]
mod test_utils;
