//! The full set of layout-relevant style properties of a node.

use crate::flex::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, PositionType};
use crate::spacing::Spacing;
use flexlay_types::{Dimension, UNDEFINED, floats_equal, is_defined_non_negative};

#[derive(Debug, Clone)]
pub struct Style {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_content: Align,
    pub align_items: Align,
    pub align_self: Align,
    pub position_type: PositionType,
    pub flex_wrap: FlexWrap,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: f32,

    pub margin: Spacing,
    pub padding: Spacing,
    pub border: Spacing,
    /// Offsets from the containing box, indexed by edge.
    pub position: Spacing,

    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_content: Align::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            position_type: PositionType::Relative,
            flex_wrap: FlexWrap::NoWrap,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_basis: UNDEFINED,
            margin: Spacing::new(),
            padding: Spacing::new(),
            border: Spacing::new(),
            position: Spacing::undefined(),
            width: UNDEFINED,
            height: UNDEFINED,
            min_width: UNDEFINED,
            min_height: UNDEFINED,
            max_width: UNDEFINED,
            max_height: UNDEFINED,
        }
    }
}

impl PartialEq for Style {
    /// Float properties compare with epsilon, so two undefined values match.
    fn eq(&self, other: &Self) -> bool {
        let floats = [
            (self.flex_grow, other.flex_grow),
            (self.flex_shrink, other.flex_shrink),
            (self.flex_basis, other.flex_basis),
            (self.width, other.width),
            (self.height, other.height),
            (self.min_width, other.min_width),
            (self.min_height, other.min_height),
            (self.max_width, other.max_width),
            (self.max_height, other.max_height),
        ];
        self.direction == other.direction
            && self.flex_direction == other.flex_direction
            && self.justify_content == other.justify_content
            && self.align_content == other.align_content
            && self.align_items == other.align_items
            && self.align_self == other.align_self
            && self.position_type == other.position_type
            && self.flex_wrap == other.flex_wrap
            && floats.iter().all(|&(a, b)| floats_equal(a, b))
            && self.margin == other.margin
            && self.padding == other.padding
            && self.border == other.border
            && self.position == other.position
    }
}

impl Style {
    pub fn reset(&mut self) {
        *self = Style::default();
    }

    /// The legacy single-value `flex` shorthand.
    ///
    /// Positive values grow from a zero basis, negative values shrink.
    pub fn flex(&self) -> f32 {
        if self.flex_grow > 0.0 {
            self.flex_grow
        } else if self.flex_shrink > 0.0 {
            -self.flex_shrink
        } else {
            0.0
        }
    }

    /// Splits a legacy `flex` value into `(grow, shrink, basis)`.
    pub fn expand_flex(flex: f32) -> (f32, f32, f32) {
        if flex.is_nan() || flex == 0.0 {
            (0.0, 0.0, UNDEFINED)
        } else if flex > 0.0 {
            (flex, 0.0, 0.0)
        } else {
            (0.0, -flex, UNDEFINED)
        }
    }

    /// Expands `flex` into grow, shrink and basis. Returns `true` if any of
    /// them changed.
    pub fn set_flex(&mut self, flex: f32) -> bool {
        let (grow, shrink, basis) = Self::expand_flex(flex);

        let changed = !floats_equal(self.flex_grow, grow)
            || !floats_equal(self.flex_shrink, shrink)
            || !floats_equal(self.flex_basis, basis);
        self.flex_grow = grow;
        self.flex_shrink = shrink;
        self.flex_basis = basis;
        changed
    }

    pub fn dimension(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    pub fn min_dimension(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    pub fn max_dimension(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
        }
    }

    /// Whether the style fixes a usable size along `dim`.
    #[inline]
    pub fn is_dimension_defined(&self, dim: Dimension) -> bool {
        is_defined_non_negative(self.dimension(dim))
    }

    /// Resolves `align-self`, falling back to the parent's `align-items`.
    #[inline]
    pub fn resolved_align(&self, parent_align_items: Align) -> Align {
        if self.align_self == Align::Auto {
            parent_align_items
        } else {
            self.align_self
        }
    }

    /// Resolves `direction`, inheriting from `parent` and defaulting to LTR.
    pub fn resolved_direction(&self, parent: Direction) -> Direction {
        match self.direction {
            Direction::Inherit if parent == Direction::Inherit => Direction::Ltr,
            Direction::Inherit => parent,
            own => own,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlay_types::Edge;

    #[test]
    fn equality_treats_undefined_as_equal() {
        let mut a = Style::default();
        let mut b = Style::default();
        assert_eq!(a, b);

        a.margin.set(Edge::Left, 4.0);
        assert_ne!(a, b);
        b.margin.set(Edge::Left, 4.0);
        assert_eq!(a, b);

        b.width = 10.0;
        assert_ne!(a, b);
    }

    #[test]
    fn defaults_match_flexbox_initial_values() {
        let style = Style::default();
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.align_items, Align::Stretch);
        assert_eq!(style.align_self, Align::Auto);
        assert_eq!(style.align_content, Align::FlexStart);
        assert_eq!(style.flex(), 0.0);
        assert!(style.width.is_nan());
        assert!(!style.is_dimension_defined(Dimension::Width));
    }

    #[test]
    fn legacy_flex_expands_to_grow_and_shrink() {
        let mut style = Style::default();
        assert!(style.set_flex(2.0));
        assert_eq!(style.flex_grow, 2.0);
        assert_eq!(style.flex_basis, 0.0);
        assert_eq!(style.flex(), 2.0);
        assert!(!style.set_flex(2.0));

        style.set_flex(-1.0);
        assert_eq!(style.flex_grow, 0.0);
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(style.flex(), -1.0);

        style.set_flex(0.0);
        assert_eq!(style.flex(), 0.0);
        assert!(style.flex_basis.is_nan());
    }

    #[test]
    fn direction_inherits_and_defaults_to_ltr() {
        let mut style = Style::default();
        assert_eq!(style.resolved_direction(Direction::Inherit), Direction::Ltr);
        assert_eq!(style.resolved_direction(Direction::Rtl), Direction::Rtl);
        style.direction = Direction::Ltr;
        assert_eq!(style.resolved_direction(Direction::Rtl), Direction::Ltr);
    }

    #[test]
    fn align_self_auto_defers_to_parent() {
        let mut child = Style::default();
        assert_eq!(child.resolved_align(Align::Center), Align::Center);
        child.align_self = Align::FlexEnd;
        assert_eq!(child.resolved_align(Align::Center), Align::FlexEnd);
    }
}
