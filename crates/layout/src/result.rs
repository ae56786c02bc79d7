//! Computed output of the engine for a single node.

use flexlay_style::{Direction, Keyword};
use flexlay_types::{Dimension, Edge, Rect, UNDEFINED};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    /// Offsets relative to the parent, indexed left, top, right, bottom.
    pub position: [f32; 4],
    /// Width and height; undefined until computed.
    pub dimensions: [f32; 2],
    pub direction: Direction,
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self {
            position: [0.0; 4],
            dimensions: [UNDEFINED; 2],
            direction: Direction::Ltr,
        }
    }
}

impl LayoutResult {
    pub fn reset(&mut self) {
        *self = LayoutResult::default();
    }

    #[inline]
    pub fn position(&self, edge: Edge) -> f32 {
        self.position[edge.index()]
    }

    #[inline]
    pub fn dimension(&self, dim: Dimension) -> f32 {
        self.dimensions[dim.index()]
    }

    pub fn left(&self) -> f32 {
        self.position[Edge::Left.index()]
    }

    pub fn top(&self) -> f32 {
        self.position[Edge::Top.index()]
    }

    pub fn width(&self) -> f32 {
        self.dimensions[Dimension::Width.index()]
    }

    pub fn height(&self) -> f32 {
        self.dimensions[Dimension::Height.index()]
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.width(), self.height())
    }
}

impl fmt::Display for LayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "layout: {{left: {}, top: {}, width: {}, height: {}, direction: {}}}",
            self.left(),
            self.top(),
            self.width(),
            self.height(),
            self.direction.as_str()
        )
    }
}

/// What a node was last laid out with, and what it produced.
///
/// A node whose requested size and parent limits match these values and that
/// has not been dirtied since reuses `result` instead of being recomputed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CachedLayout {
    pub requested_width: f32,
    pub requested_height: f32,
    pub parent_max_width: f32,
    pub parent_max_height: f32,
    pub result: LayoutResult,
}

impl Default for CachedLayout {
    fn default() -> Self {
        Self {
            requested_width: UNDEFINED,
            requested_height: UNDEFINED,
            parent_max_width: UNDEFINED,
            parent_max_height: UNDEFINED,
            result: LayoutResult::default(),
        }
    }
}
