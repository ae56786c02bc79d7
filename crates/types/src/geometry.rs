use serde::{Deserialize, Serialize};
use std::fmt;

/// An edge slot of a box.
///
/// The first four variants are physical edges and double as indices into a
/// layout position array. `Vertical`/`Horizontal`/`All` are groups and
/// `Start`/`End` are direction-relative edges, only meaningful for spacing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    Vertical,
    Horizontal,
    Start,
    End,
    All,
}

impl Edge {
    pub const COUNT: usize = 9;

    pub const ALL_EDGES: [Edge; Edge::COUNT] = [
        Edge::Left,
        Edge::Top,
        Edge::Right,
        Edge::Bottom,
        Edge::Vertical,
        Edge::Horizontal,
        Edge::Start,
        Edge::End,
        Edge::All,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_physical(self) -> bool {
        matches!(self, Edge::Left | Edge::Top | Edge::Right | Edge::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Vertical => "vertical",
            Edge::Horizontal => "horizontal",
            Edge::Start => "start",
            Edge::End => "end",
            Edge::All => "all",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn undefined() -> Self {
        Self {
            width: crate::UNDEFINED,
            height: crate::UNDEFINED,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_edges_index_position_slots() {
        assert_eq!(Edge::Left.index(), 0);
        assert_eq!(Edge::Top.index(), 1);
        assert_eq!(Edge::Right.index(), 2);
        assert_eq!(Edge::Bottom.index(), 3);
        assert!(Edge::Bottom.is_physical());
        assert!(!Edge::Start.is_physical());
        assert_eq!(Edge::ALL_EDGES.len(), Edge::COUNT);
    }

    #[test]
    fn rect_extents() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn undefined_size_is_nan() {
        let s = Size::undefined();
        assert!(s.width.is_nan() && s.height.is_nan());
        assert_eq!(Size::new(1.0, 2.0).get(Dimension::Height), 2.0);
    }
}
