//! Axis-relative accessors shared by the engine passes.
//!
//! Tables are indexed by `FlexDirection` discriminant: column,
//! column-reverse, row, row-reverse. Working through them lets one code path
//! serve every direction, including right-to-left rows.

use crate::node::Node;
use flexlay_style::{FlexDirection, Spacing, Style};
use flexlay_types::{Dimension, Edge};

const LEADING: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
const TRAILING: [Edge; 4] = [Edge::Bottom, Edge::Top, Edge::Right, Edge::Left];
const DIM: [Dimension; 4] = [
    Dimension::Height,
    Dimension::Height,
    Dimension::Width,
    Dimension::Width,
];
const LEADING_SPACING: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Start, Edge::Start];
const TRAILING_SPACING: [Edge; 4] = [Edge::Bottom, Edge::Top, Edge::End, Edge::End];

#[inline]
pub(crate) fn leading(axis: FlexDirection) -> Edge {
    LEADING[axis as usize]
}

#[inline]
pub(crate) fn trailing(axis: FlexDirection) -> Edge {
    TRAILING[axis as usize]
}

/// Edge that accumulates the running offset along `axis`.
#[inline]
pub(crate) fn pos(axis: FlexDirection) -> Edge {
    LEADING[axis as usize]
}

#[inline]
pub(crate) fn dim(axis: FlexDirection) -> Dimension {
    DIM[axis as usize]
}

// --- Spacing ---

fn leading_value(spacing: &Spacing, axis: FlexDirection) -> f32 {
    spacing.get_with_fallback(LEADING_SPACING[axis as usize], leading(axis))
}

fn trailing_value(spacing: &Spacing, axis: FlexDirection) -> f32 {
    spacing.get_with_fallback(TRAILING_SPACING[axis as usize], trailing(axis))
}

/// Padding and border ignore negative values, including a negative
/// start/end override.
fn non_negative(spacing: &Spacing, logical: Edge, physical: Edge, axis: FlexDirection) -> f32 {
    if axis.is_row() {
        let raw = spacing.get_raw(logical);
        if raw >= 0.0 {
            return raw;
        }
    }
    let value = spacing.get(physical);
    if value >= 0.0 { value } else { 0.0 }
}

pub(crate) fn leading_margin(style: &Style, axis: FlexDirection) -> f32 {
    leading_value(&style.margin, axis)
}

pub(crate) fn trailing_margin(style: &Style, axis: FlexDirection) -> f32 {
    trailing_value(&style.margin, axis)
}

pub(crate) fn margin_axis(style: &Style, axis: FlexDirection) -> f32 {
    leading_margin(style, axis) + trailing_margin(style, axis)
}

pub(crate) fn leading_border(style: &Style, axis: FlexDirection) -> f32 {
    non_negative(&style.border, LEADING_SPACING[axis as usize], leading(axis), axis)
}

pub(crate) fn trailing_border(style: &Style, axis: FlexDirection) -> f32 {
    non_negative(&style.border, TRAILING_SPACING[axis as usize], trailing(axis), axis)
}

pub(crate) fn border_axis(style: &Style, axis: FlexDirection) -> f32 {
    leading_border(style, axis) + trailing_border(style, axis)
}

pub(crate) fn leading_padding_and_border(style: &Style, axis: FlexDirection) -> f32 {
    non_negative(&style.padding, LEADING_SPACING[axis as usize], leading(axis), axis)
        + leading_border(style, axis)
}

pub(crate) fn trailing_padding_and_border(style: &Style, axis: FlexDirection) -> f32 {
    non_negative(&style.padding, TRAILING_SPACING[axis as usize], trailing(axis), axis)
        + trailing_border(style, axis)
}

pub(crate) fn padding_and_border_axis(style: &Style, axis: FlexDirection) -> f32 {
    leading_padding_and_border(style, axis) + trailing_padding_and_border(style, axis)
}

// --- Position offsets ---

fn leading_position_value(style: &Style, axis: FlexDirection) -> f32 {
    leading_value(&style.position, axis)
}

fn trailing_position_value(style: &Style, axis: FlexDirection) -> f32 {
    trailing_value(&style.position, axis)
}

#[inline]
pub(crate) fn is_leading_pos_defined(style: &Style, axis: FlexDirection) -> bool {
    !leading_position_value(style, axis).is_nan()
}

#[inline]
pub(crate) fn is_trailing_pos_defined(style: &Style, axis: FlexDirection) -> bool {
    !trailing_position_value(style, axis).is_nan()
}

/// The leading offset along `axis`, or zero when unset. Start overrides the
/// leading physical edge on row axes.
#[inline]
pub(crate) fn leading_position(style: &Style, axis: FlexDirection) -> f32 {
    flexlay_types::or_zero(leading_position_value(style, axis))
}

#[inline]
pub(crate) fn trailing_position(style: &Style, axis: FlexDirection) -> f32 {
    flexlay_types::or_zero(trailing_position_value(style, axis))
}

/// Offset applied to a relatively positioned box: the leading offset, else
/// the negated trailing offset.
pub(crate) fn relative_position(style: &Style, axis: FlexDirection) -> f32 {
    let lead = leading_position_value(style, axis);
    if !lead.is_nan() {
        return lead;
    }
    let trail = trailing_position_value(style, axis);
    if trail.is_nan() { 0.0 } else { -trail }
}

// --- Dimensions ---

#[inline]
pub(crate) fn is_style_dim_defined(style: &Style, axis: FlexDirection) -> bool {
    style.is_dimension_defined(dim(axis))
}

#[inline]
pub(crate) fn is_layout_dim_defined(node: &Node, axis: FlexDirection) -> bool {
    flexlay_types::is_defined_non_negative(node.layout.dimension(dim(axis)))
}

#[inline]
pub(crate) fn layout_dim(node: &Node, axis: FlexDirection) -> f32 {
    node.layout.dimension(dim(axis))
}

#[inline]
pub(crate) fn set_layout_dim(node: &mut Node, axis: FlexDirection, value: f32) {
    node.layout.dimensions[dim(axis).index()] = value;
}

pub(crate) fn dim_with_margin(node: &Node, axis: FlexDirection) -> f32 {
    layout_dim(node, axis) + margin_axis(&node.style, axis)
}

/// Clamps `value` into the style's min/max along `axis`. Max is applied
/// first, so a min larger than the max wins.
pub(crate) fn bound_within_min_max(style: &Style, axis: FlexDirection, value: f32) -> f32 {
    let min = style.min_dimension(dim(axis));
    let max = style.max_dimension(dim(axis));

    let mut bound = value;
    if max >= 0.0 && bound > max {
        bound = max;
    }
    if min >= 0.0 && bound < min {
        bound = min;
    }
    bound
}

/// Like [`bound_within_min_max`], but never below padding plus border.
pub(crate) fn bound_axis(style: &Style, axis: FlexDirection, value: f32) -> f32 {
    bound_within_min_max(style, axis, value).max(padding_and_border_axis(style, axis))
}

/// Adopts the style size along `axis` unless the parent already fixed one.
pub(crate) fn set_dimension_from_style(node: &mut Node, axis: FlexDirection) {
    if is_layout_dim_defined(node, axis) || !is_style_dim_defined(&node.style, axis) {
        return;
    }
    let value = bound_axis(&node.style, axis, node.style.dimension(dim(axis)))
        .max(padding_and_border_axis(&node.style, axis));
    set_layout_dim(node, axis, value);
}
