//! Human-readable dumps of a laid-out tree.

use crate::LayoutError;
use crate::tree::{LayoutTree, NodeId};
use bitflags::bitflags;
use flexlay_style::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, Keyword, PositionType, Spacing, Style};
use flexlay_types::{Edge, floats_equal};
use std::fmt::Write;

bitflags! {
    /// Selects what [`LayoutTree::print_tree`] includes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PrintOptions: u8 {
        /// Computed width, height, top and left.
        const LAYOUT = 1;
        /// Style properties that differ from their defaults.
        const STYLE = 1 << 1;
        /// Recurse into children.
        const CHILDREN = 1 << 2;
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions::LAYOUT
    }
}

impl LayoutTree {
    /// Renders `id` (and optionally its subtree) as a JS-object-like dump.
    pub fn print_tree(&self, id: NodeId, options: PrintOptions) -> Result<String, LayoutError> {
        self.node(id)?;
        let mut out = String::new();
        self.print_node(&mut out, id, options, 0);
        Ok(out)
    }

    fn print_node(&self, out: &mut String, id: NodeId, options: PrintOptions, level: usize) {
        let node = &self.nodes[id];
        indent(out, level);
        out.push('{');

        if options.contains(PrintOptions::LAYOUT) {
            let layout = &node.layout;
            let _ = write!(
                out,
                "layout: {{width: {}, height: {}, top: {}, left: {}}}, ",
                layout.width(),
                layout.height(),
                layout.top(),
                layout.left()
            );
        }

        if options.contains(PrintOptions::STYLE) {
            print_style(out, &node.style);
        }

        if options.contains(PrintOptions::CHILDREN) && !node.children.is_empty() {
            out.push_str("children: [\n");
            for &child in &node.children {
                self.print_node(out, child, options, level + 1);
            }
            indent(out, level);
            out.push_str("]},\n");
        } else {
            out.push_str("},\n");
        }
    }
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn print_keyword<K: Keyword + PartialEq>(out: &mut String, name: &str, value: K, default: K) {
    if value != default {
        let _ = write!(out, "{}: '{}', ", name, value.as_str());
    }
}

fn print_number_nonzero(out: &mut String, name: &str, value: f32) {
    if !value.is_nan() && value != 0.0 {
        let _ = write!(out, "{}: {}, ", name, value);
    }
}

fn print_number_defined(out: &mut String, name: &str, value: f32) {
    if !value.is_nan() {
        let _ = write!(out, "{}: {}, ", name, value);
    }
}

fn four_equal(spacing: &Spacing) -> bool {
    let left = spacing.get(Edge::Left);
    [Edge::Top, Edge::Right, Edge::Bottom]
        .iter()
        .all(|&edge| floats_equal(left, spacing.get(edge)))
}

fn print_spacing(out: &mut String, name: &str, spacing: &Spacing) {
    if four_equal(spacing) {
        print_number_nonzero(out, name, spacing.get(Edge::Left));
    } else {
        for (suffix, edge) in [
            ("Left", Edge::Left),
            ("Right", Edge::Right),
            ("Top", Edge::Top),
            ("Bottom", Edge::Bottom),
        ] {
            print_number_nonzero(out, &format!("{}{}", name, suffix), spacing.get(edge));
        }
    }
    print_number_nonzero(out, &format!("{}Start", name), spacing.get_raw(Edge::Start));
    print_number_nonzero(out, &format!("{}End", name), spacing.get_raw(Edge::End));
}

fn print_style(out: &mut String, style: &Style) {
    print_keyword(out, "direction", style.direction, Direction::Inherit);
    print_keyword(out, "flexDirection", style.flex_direction, FlexDirection::Column);
    print_keyword(out, "justifyContent", style.justify_content, JustifyContent::FlexStart);
    print_keyword(out, "alignItems", style.align_items, Align::Stretch);
    print_keyword(out, "alignSelf", style.align_self, Align::Auto);
    print_keyword(out, "alignContent", style.align_content, Align::FlexStart);
    print_keyword(out, "position", style.position_type, PositionType::Relative);
    print_keyword(out, "flexWrap", style.flex_wrap, FlexWrap::NoWrap);

    print_number_nonzero(out, "flexGrow", style.flex_grow);
    print_number_nonzero(out, "flexShrink", style.flex_shrink);
    print_number_defined(out, "flexBasis", style.flex_basis);

    print_spacing(out, "margin", &style.margin);
    print_spacing(out, "padding", &style.padding);
    print_spacing(out, "border", &style.border);

    print_number_defined(out, "width", style.width);
    print_number_defined(out, "height", style.height);
    print_number_defined(out, "minWidth", style.min_width);
    print_number_defined(out, "minHeight", style.min_height);
    print_number_defined(out, "maxWidth", style.max_width);
    print_number_defined(out, "maxHeight", style.max_height);

    print_number_defined(out, "left", style.position.get(Edge::Left));
    print_number_defined(out, "right", style.position.get(Edge::Right));
    print_number_defined(out, "top", style.position.get(Edge::Top));
    print_number_defined(out, "bottom", style.position.get(Edge::Bottom));
}
