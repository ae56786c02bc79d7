//! The flexbox layout pass.
//!
//! `layout_node` decides whether a node must be recomputed and
//! `layout_node_impl` runs the per-node algorithm. Positions written here are
//! relative to the parent's border box. Trailing positions are derived from
//! leading ones once the relevant dimension is known, so reverse axes and
//! right-to-left rows share the same code path.

use crate::LayoutError;
use crate::axis::{
    border_axis, bound_axis, dim_with_margin, is_layout_dim_defined, is_leading_pos_defined, is_style_dim_defined,
    is_trailing_pos_defined, layout_dim, leading, leading_border, leading_margin, leading_padding_and_border,
    leading_position, margin_axis, padding_and_border_axis, pos, relative_position, set_dimension_from_style,
    set_layout_dim, trailing, trailing_margin, trailing_padding_and_border, trailing_position,
};
use crate::cache::MeasureKey;
use crate::context::LayoutContext;
use crate::measure::MeasureMode;
use crate::node::{LayoutState, Node};
use crate::print::PrintOptions;
use crate::result::LayoutResult;
use crate::rounding::round_to_pixel_grid;
use crate::tree::{LayoutTree, NodeId};
use flexlay_style::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, PositionType, Style};
use flexlay_types::{Dimension, Size, UNDEFINED, floats_equal, is_defined_non_negative};

impl LayoutTree {
    /// Lays out the subtree rooted at `root` within the available size.
    ///
    /// Either dimension may be [`UNDEFINED`](flexlay_types::UNDEFINED) to
    /// size to content. On success every recomputed node is in
    /// [`LayoutState::HasNewLayout`]; subtrees whose inputs did not change
    /// keep their previous result and are not revisited.
    pub fn calculate_layout(
        &mut self,
        ctx: &mut LayoutContext,
        root: NodeId,
        available_width: f32,
        available_height: f32,
        parent_direction: Direction,
    ) -> Result<(), LayoutError> {
        #[cfg(feature = "profiling")]
        let start = instant::Instant::now();

        log::debug!(
            "Calculating layout for {:?} within {} x {}",
            root,
            available_width,
            available_height
        );

        let node = self.node_mut(root)?;
        node.layout.reset();
        node.measurements.clear();
        ctx.clear_scratch();

        let recomputed = layout_node(self, ctx, root, available_width, available_height, parent_direction)?;

        if ctx.config.round_to_pixel_grid {
            round_to_pixel_grid(self, root);
        }
        if recomputed && ctx.config.print_tree {
            log::debug!("{}", self.print_tree(root, PrintOptions::all())?);
        }

        #[cfg(feature = "profiling")]
        ctx.profiler.record("calculate_layout", start.elapsed());

        Ok(())
    }
}

fn needs_relayout(node: &Node, parent_max_width: f32, parent_max_height: f32) -> bool {
    let last = &node.last_layout;
    node.state == LayoutState::Dirty
        || !floats_equal(last.requested_height, node.layout.height())
        || !floats_equal(last.requested_width, node.layout.width())
        || !floats_equal(last.parent_max_width, parent_max_width)
        || !floats_equal(last.parent_max_height, parent_max_height)
}

/// Lays out `id` unless its previous result is still valid for these
/// limits. Returns whether anything was recomputed.
pub(crate) fn layout_node(
    tree: &mut LayoutTree,
    ctx: &mut LayoutContext,
    id: NodeId,
    parent_max_width: f32,
    parent_max_height: f32,
    parent_direction: Direction,
) -> Result<bool, LayoutError> {
    let node = &mut tree.nodes[id];
    let recompute = needs_relayout(node, parent_max_width, parent_max_height);

    if recompute {
        ctx.profiler.count_miss();
        if ctx.config.log_changes {
            log::trace!(
                "Relayout {:?}: requested {} x {}, max {} x {}",
                id,
                node.layout.width(),
                node.layout.height(),
                parent_max_width,
                parent_max_height
            );
        }

        node.last_layout.requested_width = node.layout.width();
        node.last_layout.requested_height = node.layout.height();
        node.last_layout.parent_max_width = parent_max_width;
        node.last_layout.parent_max_height = parent_max_height;

        for i in 0..tree.nodes[id].children.len() {
            let child = tree.nodes[id].children[i];
            tree.nodes[child].layout.reset();
        }

        layout_node_impl(tree, ctx, id, parent_max_width, parent_max_height, parent_direction)?;

        let node = &mut tree.nodes[id];
        node.last_layout.result = node.layout;
    } else {
        ctx.profiler.count_hit();
        if ctx.config.log_skips {
            log::trace!("Reusing layout of {:?}", id);
        }
        node.layout = node.last_layout.result;
    }

    tree.mark_has_new_layout(id);
    Ok(recompute)
}

fn measure_leaf(
    tree: &mut LayoutTree,
    ctx: &LayoutContext,
    id: NodeId,
    key: MeasureKey,
) -> Result<Size, LayoutError> {
    if let Some(size) = tree.nodes[id].measurements.get(&key) {
        ctx.profiler.count_measure_hit();
        return Ok(size);
    }

    ctx.profiler.count_measure();
    if ctx.config.log_changes {
        log::trace!(
            "Measuring {:?}: {} ({}) x {} ({})",
            id,
            key.width,
            key.width_mode.as_str(),
            key.height,
            key.height_mode.as_str()
        );
    }
    let size = tree.measure(id, key.width, key.width_mode, key.height, key.height_mode)?;
    tree.nodes[id].measurements.insert(key, size);
    Ok(size)
}

#[inline]
fn is_flex(style: &Style) -> bool {
    style.position_type == PositionType::Relative && style.flex_grow > 0.0
}

/// Resolves the trailing position of `child` along `axis` from its leading
/// one.
fn set_trailing_position(parent: &LayoutResult, child: &mut Node, axis: FlexDirection) {
    let size = if child.style.position_type == PositionType::Absolute {
        0.0
    } else {
        layout_dim(child, axis)
    };
    child.layout.position[trailing(axis).index()] =
        parent.dimension(crate::axis::dim(axis)) - size - child.layout.position[pos(axis).index()];
}

/// Sets `child`'s trailing position along `axis` inside a parent of
/// `parent_dim`.
#[inline]
fn place_trailing(child: &mut Node, axis: FlexDirection, parent_dim: f32) {
    child.layout.position[trailing(axis).index()] =
        parent_dim - layout_dim(child, axis) - child.layout.position[pos(axis).index()];
}

fn layout_node_impl(
    tree: &mut LayoutTree,
    ctx: &mut LayoutContext,
    id: NodeId,
    parent_max_width: f32,
    parent_max_height: f32,
    parent_direction: Direction,
) -> Result<(), LayoutError> {
    let node = &mut tree.nodes[id];
    let direction = node.style.resolved_direction(parent_direction);
    let main_axis = node.style.flex_direction.resolve(direction);
    let cross_axis = main_axis.cross(direction);
    let resolved_row_axis = FlexDirection::Row.resolve(direction);

    set_dimension_from_style(node, main_axis);
    set_dimension_from_style(node, cross_axis);

    node.layout.direction = direction;

    // The parent wrote our position; complete it with margin and relative
    // offsets.
    for axis in [main_axis, cross_axis] {
        let relative = relative_position(&node.style, axis);
        node.layout.position[leading(axis).index()] += leading_margin(&node.style, axis) + relative;
        node.layout.position[trailing(axis).index()] += trailing_margin(&node.style, axis) + relative;
    }

    let child_count = node.children.len();
    let padding_and_border_row = padding_and_border_axis(&node.style, resolved_row_axis);
    let padding_and_border_column = padding_and_border_axis(&node.style, FlexDirection::Column);

    if node.measure.is_some() {
        let style = &node.style;
        let is_row_dim_defined = is_layout_dim_defined(node, resolved_row_axis);
        let is_row_style_defined = is_style_dim_defined(style, resolved_row_axis);
        let is_column_style_defined = is_style_dim_defined(style, FlexDirection::Column);

        let (mut width, mut width_mode) = if is_row_style_defined {
            (style.width, MeasureMode::Exactly)
        } else if is_row_dim_defined {
            (layout_dim(node, resolved_row_axis), MeasureMode::Exactly)
        } else {
            (
                parent_max_width - margin_axis(style, resolved_row_axis),
                MeasureMode::AtMost,
            )
        };
        width -= padding_and_border_row;
        if width.is_nan() {
            width_mode = MeasureMode::Undefined;
        }

        let (mut height, mut height_mode) = if is_column_style_defined {
            (style.height, MeasureMode::Exactly)
        } else if is_layout_dim_defined(node, FlexDirection::Column) {
            (layout_dim(node, FlexDirection::Column), MeasureMode::Exactly)
        } else {
            (
                parent_max_height - margin_axis(style, FlexDirection::Column),
                MeasureMode::AtMost,
            )
        };
        height -= padding_and_border_column;
        if height.is_nan() {
            height_mode = MeasureMode::Undefined;
        }

        // Only measure what neither the style nor the parent already fixed.
        let is_row_undefined = !is_row_style_defined && !is_row_dim_defined;
        let is_column_undefined = !is_column_style_defined && node.layout.height().is_nan();

        if is_row_undefined || is_column_undefined {
            let key = MeasureKey {
                width,
                height,
                width_mode,
                height_mode,
            };
            let measured = measure_leaf(tree, ctx, id, key)?;
            let node = &mut tree.nodes[id];
            if is_row_undefined {
                node.layout.dimensions[Dimension::Width.index()] = measured.width + padding_and_border_row;
            }
            if is_column_undefined {
                node.layout.dimensions[Dimension::Height.index()] = measured.height + padding_and_border_column;
            }
        }
        if child_count == 0 {
            return Ok(());
        }
    }

    let node = &tree.nodes[id];
    let style = &node.style;
    let is_node_flex_wrap = style.flex_wrap == FlexWrap::Wrap;
    let justify_content = style.justify_content;
    let align_content = style.align_content;
    let parent_align_items = style.align_items;

    let leading_padding_and_border_main = leading_padding_and_border(style, main_axis);
    let leading_padding_and_border_cross = leading_padding_and_border(style, cross_axis);
    let padding_and_border_main = padding_and_border_axis(style, main_axis);
    let padding_and_border_cross = padding_and_border_axis(style, cross_axis);
    let leading_border_main = leading_border(style, main_axis);
    let leading_border_cross = leading_border(style, cross_axis);

    let is_main_dim_defined = is_layout_dim_defined(node, main_axis);
    let is_cross_dim_defined = is_layout_dim_defined(node, cross_axis);
    let is_main_row_direction = main_axis.is_row();

    let node_main_dim = layout_dim(node, main_axis);
    let node_cross_dim = layout_dim(node, cross_axis);
    let node_width = node.layout.width();
    let node_height = node.layout.height();

    // Limits handed to children laid out at their natural size.
    let stacked_max = if !is_main_row_direction {
        let max_width = if is_style_dim_defined(style, resolved_row_axis) {
            node_width - padding_and_border_row
        } else {
            parent_max_width - margin_axis(style, resolved_row_axis) - padding_and_border_row
        };
        (max_width, UNDEFINED)
    } else {
        let max_height = if is_style_dim_defined(style, FlexDirection::Column) {
            node_height - padding_and_border_column
        } else {
            parent_max_height - margin_axis(style, FlexDirection::Column) - padding_and_border_column
        };
        (UNDEFINED, max_height)
    };

    // Limits handed to flexible children once their main size is fixed.
    let flex_max = {
        let max_width = if is_style_dim_defined(style, resolved_row_axis) {
            node_width - padding_and_border_row
        } else if !is_main_row_direction {
            parent_max_width - margin_axis(style, resolved_row_axis) - padding_and_border_row
        } else {
            UNDEFINED
        };
        let max_height = if is_style_dim_defined(style, FlexDirection::Column) {
            node_height - padding_and_border_column
        } else if is_main_row_direction {
            parent_max_height - margin_axis(style, FlexDirection::Column) - padding_and_border_column
        } else {
            UNDEFINED
        };
        (max_width, max_height)
    };

    // Absolute children resolve offsets against physical axes.
    let absolute_axes = [FlexDirection::Column, FlexDirection::Row];
    let absolute_padding_and_border = absolute_axes.map(|axis| padding_and_border_axis(style, axis));
    let absolute_border = absolute_axes.map(|axis| border_axis(style, axis));

    let defined_main_dim = if is_main_dim_defined {
        node_main_dim - padding_and_border_main
    } else {
        UNDEFINED
    };

    let line_base = ctx.line_indices.len();
    ctx.line_indices.resize(line_base + child_count, 0);
    let absolute_base = ctx.absolute_children.len();

    // Lines are formed one at a time; with wrapping disabled there is only one.
    let mut start_line = 0;
    let mut end_line = 0;
    let mut already_computed_next_layout = false;
    let mut lines_cross_dim: f32 = 0.0;
    let mut lines_main_dim: f32 = 0.0;
    let mut lines_count = 0;
    let mut child_max = (UNDEFINED, UNDEFINED);

    while end_line < child_count {
        // --- Pass 1: size inflexible children and collect the rest ---
        let mut main_content_dim = 0.0;
        let mut flexible_children_count = 0usize;
        let mut total_flexible = 0.0;
        let mut non_flexible_children_count = 0usize;

        // Children are positioned right away while they stack trivially;
        // from the first complex child onwards the later passes take over.
        let mut is_simple_stack_main = (is_main_dim_defined && justify_content == JustifyContent::FlexStart)
            || (!is_main_dim_defined && justify_content != JustifyContent::Center);
        let mut first_complex_main = if is_simple_stack_main { child_count } else { start_line };
        let mut is_simple_stack_cross = true;
        let mut first_complex_cross = child_count;

        let flex_base = ctx.flex_children.len();
        let mut main_dim = leading_padding_and_border_main;
        let mut cross_dim: f32 = 0.0;

        let mut i = start_line;
        while i < child_count {
            let child_id = tree.nodes[id].children[i];
            ctx.line_indices[line_base + i] = lines_count;

            let child = &mut tree.nodes[child_id];
            let align_item = child.style.resolved_align(parent_align_items);
            let position_type = child.style.position_type;
            let child_is_flex = is_flex(&child.style);
            let mut pushed_absolute = false;

            if align_item == Align::Stretch
                && position_type == PositionType::Relative
                && is_cross_dim_defined
                && !is_style_dim_defined(&child.style, cross_axis)
            {
                let stretched = bound_axis(
                    &child.style,
                    cross_axis,
                    node_cross_dim - padding_and_border_cross - margin_axis(&child.style, cross_axis),
                )
                .max(padding_and_border_axis(&child.style, cross_axis));
                set_layout_dim(child, cross_axis, stretched);
            } else if position_type == PositionType::Absolute {
                ctx.absolute_children.push(child_id);
                pushed_absolute = true;

                for (slot, axis) in absolute_axes.into_iter().enumerate() {
                    let parent_dim = if axis.is_row() { node_width } else { node_height };
                    if is_defined_non_negative(parent_dim)
                        && !is_style_dim_defined(&child.style, axis)
                        && is_leading_pos_defined(&child.style, axis)
                        && is_trailing_pos_defined(&child.style, axis)
                    {
                        let value = bound_axis(
                            &child.style,
                            axis,
                            parent_dim
                                - absolute_padding_and_border[slot]
                                - margin_axis(&child.style, axis)
                                - leading_position(&child.style, axis)
                                - trailing_position(&child.style, axis),
                        )
                        .max(padding_and_border_axis(&child.style, axis));
                        set_layout_dim(child, axis, value);
                    }
                }
            }

            let mut next_content_dim = 0.0;
            let mut counted_flexible = false;
            let mut counted_non_flexible = false;

            // Flexing only makes sense once our own main size is known.
            if is_main_dim_defined && child_is_flex {
                flexible_children_count += 1;
                total_flexible += child.style.flex_grow;
                ctx.flex_children.push(child_id);
                counted_flexible = true;

                // The smallest footprint the child can have, used to find the
                // space left for flexing.
                next_content_dim =
                    padding_and_border_axis(&child.style, main_axis) + margin_axis(&child.style, main_axis);
            } else {
                child_max = stacked_max;
                if !already_computed_next_layout {
                    layout_node(tree, ctx, child_id, child_max.0, child_max.1, direction)?;
                }

                // Absolute children take no room in the line.
                if position_type == PositionType::Relative {
                    non_flexible_children_count += 1;
                    counted_non_flexible = true;
                    next_content_dim = dim_with_margin(&tree.nodes[child_id], main_axis);
                }
            }

            // This child opens the next line, unless it would be alone on this one.
            if is_node_flex_wrap
                && is_main_dim_defined
                && main_content_dim + next_content_dim > defined_main_dim
                && i != start_line
            {
                if counted_flexible {
                    flexible_children_count -= 1;
                    total_flexible -= tree.nodes[child_id].style.flex_grow;
                    ctx.flex_children.pop();
                }
                if counted_non_flexible {
                    non_flexible_children_count -= 1;
                }
                if pushed_absolute {
                    ctx.absolute_children.pop();
                }
                already_computed_next_layout = true;
                break;
            }

            if is_simple_stack_main && (position_type != PositionType::Relative || child_is_flex) {
                is_simple_stack_main = false;
                first_complex_main = i;
            }

            if is_simple_stack_cross
                && (position_type != PositionType::Relative
                    || (align_item != Align::Stretch && align_item != Align::FlexStart)
                    || (align_item == Align::Stretch && !is_cross_dim_defined))
            {
                is_simple_stack_cross = false;
                first_complex_cross = i;
            }

            let child = &mut tree.nodes[child_id];
            if is_simple_stack_main {
                child.layout.position[pos(main_axis).index()] += main_dim;
                if is_main_dim_defined {
                    place_trailing(child, main_axis, node_main_dim);
                }
                main_dim += dim_with_margin(child, main_axis);
                cross_dim = cross_dim.max(bound_axis(
                    &child.style,
                    cross_axis,
                    dim_with_margin(child, cross_axis),
                ));
            }

            if is_simple_stack_cross {
                child.layout.position[pos(cross_axis).index()] += lines_cross_dim + leading_padding_and_border_cross;
                if is_cross_dim_defined {
                    place_trailing(child, cross_axis, node_cross_dim);
                }
            }

            already_computed_next_layout = false;
            main_content_dim += next_content_dim;
            end_line = i + 1;
            i += 1;
        }

        // --- Pass 2: distribute the remaining main-axis space ---
        let mut leading_main_dim = 0.0;
        let mut between_main_dim = 0.0;

        let mut remaining_main_dim = if is_main_dim_defined {
            defined_main_dim - main_content_dim
        } else {
            main_content_dim.max(0.0) - main_content_dim
        };

        if flexible_children_count != 0 {
            let first_share = remaining_main_dim / total_flexible;
            let mut flexible_main_dim = first_share;

            // Children whose share violates their min/max keep the bound size
            // and leave the pool. This is a single corrective pass.
            for k in flex_base..ctx.flex_children.len() {
                let child = &tree.nodes[ctx.flex_children[k]];
                let grow = child.style.flex_grow;
                let base_main_dim =
                    flexible_main_dim * grow + padding_and_border_axis(&child.style, main_axis);
                let bound_main_dim = bound_axis(&child.style, main_axis, base_main_dim);
                if !floats_equal(base_main_dim, bound_main_dim) {
                    remaining_main_dim -= bound_main_dim;
                    total_flexible -= grow;
                }
            }
            // An emptied pool leaves every child at its bounded first share.
            flexible_main_dim = if total_flexible > 0.0 {
                remaining_main_dim / total_flexible
            } else {
                first_share
            };

            // Inflexible children may already overflow the container.
            if !flexible_main_dim.is_finite() || flexible_main_dim < 0.0 {
                flexible_main_dim = 0.0;
            }

            child_max = flex_max;
            for k in flex_base..ctx.flex_children.len() {
                let child_id = ctx.flex_children[k];
                let child = &mut tree.nodes[child_id];
                let main_size = bound_axis(
                    &child.style,
                    main_axis,
                    flexible_main_dim * child.style.flex_grow + padding_and_border_axis(&child.style, main_axis),
                );
                set_layout_dim(child, main_axis, main_size);

                layout_node(tree, ctx, child_id, child_max.0, child_max.1, direction)?;
            }
            ctx.flex_children.truncate(flex_base);
        } else if justify_content != JustifyContent::FlexStart {
            let in_flow = non_flexible_children_count;
            match justify_content {
                JustifyContent::Center => leading_main_dim = remaining_main_dim / 2.0,
                JustifyContent::FlexEnd => leading_main_dim = remaining_main_dim,
                JustifyContent::SpaceBetween => {
                    remaining_main_dim = remaining_main_dim.max(0.0);
                    if in_flow > 1 {
                        between_main_dim = remaining_main_dim / (in_flow - 1) as f32;
                    }
                }
                JustifyContent::SpaceAround => {
                    // Edge gaps are half the gap between children.
                    if in_flow > 0 {
                        between_main_dim = remaining_main_dim / in_flow as f32;
                    }
                    leading_main_dim = between_main_dim / 2.0;
                }
                JustifyContent::FlexStart => {}
            }
        }

        // --- Pass 3: position the complex children along the main axis ---
        main_dim += leading_main_dim;

        for i in first_complex_main..end_line {
            let child_id = tree.nodes[id].children[i];
            let child = &mut tree.nodes[child_id];

            if child.style.position_type == PositionType::Absolute
                && is_leading_pos_defined(&child.style, main_axis)
            {
                child.layout.position[pos(main_axis).index()] = leading_position(&child.style, main_axis)
                    + leading_border_main
                    + leading_margin(&child.style, main_axis);
            } else {
                child.layout.position[pos(main_axis).index()] += main_dim;
                if is_main_dim_defined {
                    place_trailing(child, main_axis, node_main_dim);
                }

                if child.style.position_type == PositionType::Relative {
                    main_dim += between_main_dim + dim_with_margin(child, main_axis);
                    cross_dim = cross_dim.max(bound_axis(
                        &child.style,
                        cross_axis,
                        dim_with_margin(child, cross_axis),
                    ));
                }
            }
        }

        let container_cross_axis = if is_cross_dim_defined {
            node_cross_dim
        } else {
            // Both sides are added at the end since the line extent is a max.
            bound_axis(
                &tree.nodes[id].style,
                cross_axis,
                cross_dim + padding_and_border_cross,
            )
            .max(padding_and_border_cross)
        };

        // --- Pass 4: position the complex children along the cross axis ---
        for i in first_complex_cross..end_line {
            let child_id = tree.nodes[id].children[i];
            let child = &mut tree.nodes[child_id];

            if child.style.position_type == PositionType::Absolute
                && is_leading_pos_defined(&child.style, cross_axis)
            {
                child.layout.position[pos(cross_axis).index()] = leading_position(&child.style, cross_axis)
                    + leading_border_cross
                    + leading_margin(&child.style, cross_axis);
                continue;
            }

            let mut leading_cross_dim = leading_padding_and_border_cross;

            if child.style.position_type == PositionType::Relative {
                let align_item = child.style.resolved_align(parent_align_items);
                if align_item == Align::Stretch {
                    if !is_style_dim_defined(&child.style, cross_axis) {
                        let previous = layout_dim(child, cross_axis);
                        let stretched = bound_axis(
                            &child.style,
                            cross_axis,
                            container_cross_axis - padding_and_border_cross - margin_axis(&child.style, cross_axis),
                        )
                        .max(padding_and_border_axis(&child.style, cross_axis));
                        set_layout_dim(child, cross_axis, stretched);

                        // A resized container must lay its own children out again.
                        if !floats_equal(previous, stretched) && !child.children.is_empty() {
                            // Margins and offsets are re-applied by the nested layout.
                            for axis in [main_axis, cross_axis] {
                                let relative = relative_position(&child.style, axis);
                                child.layout.position[leading(axis).index()] -=
                                    leading_margin(&child.style, axis) + relative;
                                child.layout.position[trailing(axis).index()] -=
                                    trailing_margin(&child.style, axis) + relative;
                            }
                            layout_node(tree, ctx, child_id, child_max.0, child_max.1, direction)?;
                        }
                    }
                } else if align_item != Align::FlexStart {
                    let remaining_cross_dim =
                        container_cross_axis - padding_and_border_cross - dim_with_margin(child, cross_axis);
                    if align_item == Align::Center {
                        leading_cross_dim += remaining_cross_dim / 2.0;
                    } else {
                        leading_cross_dim += remaining_cross_dim;
                    }
                }
            }

            let child = &mut tree.nodes[child_id];
            child.layout.position[pos(cross_axis).index()] += lines_cross_dim + leading_cross_dim;
            if is_cross_dim_defined {
                place_trailing(child, cross_axis, node_cross_dim);
            }
        }

        lines_cross_dim += cross_dim;
        lines_main_dim = lines_main_dim.max(main_dim);
        lines_count += 1;
        start_line = end_line;
    }

    // --- Pass 5: distribute lines along the cross axis ---
    if lines_count > 1 && is_cross_dim_defined {
        let node_cross_axis_inner_size = node_cross_dim - padding_and_border_cross;
        let remaining_align_content_dim = node_cross_axis_inner_size - lines_cross_dim;

        let mut cross_dim_lead = 0.0;
        let mut current_lead = leading_padding_and_border_cross;

        match align_content {
            Align::FlexEnd => current_lead += remaining_align_content_dim,
            Align::Center => current_lead += remaining_align_content_dim / 2.0,
            Align::Stretch => {
                if node_cross_axis_inner_size > lines_cross_dim {
                    cross_dim_lead = remaining_align_content_dim / lines_count as f32;
                }
            }
            Align::Auto | Align::FlexStart => {}
        }

        let mut end_index = 0;
        for line in 0..lines_count {
            let start_index = end_index;

            let mut line_height: f32 = 0.0;
            let mut ii = start_index;
            while ii < child_count {
                let child = &tree.nodes[tree.nodes[id].children[ii]];
                if child.style.position_type != PositionType::Relative {
                    ii += 1;
                    continue;
                }
                if ctx.line_indices[line_base + ii] != line {
                    break;
                }
                if is_layout_dim_defined(child, cross_axis) {
                    line_height = line_height.max(layout_dim(child, cross_axis) + margin_axis(&child.style, cross_axis));
                }
                ii += 1;
            }
            end_index = ii;
            line_height += cross_dim_lead;

            for ii in start_index..end_index {
                let child_id = tree.nodes[id].children[ii];
                let child = &mut tree.nodes[child_id];
                if child.style.position_type != PositionType::Relative {
                    continue;
                }

                let cross_pos = pos(cross_axis).index();
                match child.style.resolved_align(parent_align_items) {
                    Align::FlexStart | Align::Stretch => {
                        child.layout.position[cross_pos] = current_lead + leading_margin(&child.style, cross_axis);
                    }
                    Align::FlexEnd => {
                        child.layout.position[cross_pos] = current_lead + line_height
                            - trailing_margin(&child.style, cross_axis)
                            - layout_dim(child, cross_axis);
                    }
                    Align::Center => {
                        let child_height = layout_dim(child, cross_axis);
                        child.layout.position[cross_pos] = current_lead + (line_height - child_height) / 2.0;
                    }
                    Align::Auto => {}
                }
            }

            current_lead += line_height;
        }
    }

    // --- Size ourselves from the content where nothing fixed our size ---
    let mut needs_main_trailing_pos = false;
    let mut needs_cross_trailing_pos = false;

    let node = &mut tree.nodes[id];
    if !is_main_dim_defined {
        // The trailing padding is still missing from the running total.
        let main_size = bound_axis(
            &node.style,
            main_axis,
            lines_main_dim + trailing_padding_and_border(&node.style, main_axis),
        )
        .max(padding_and_border_main);
        set_layout_dim(node, main_axis, main_size);
        needs_main_trailing_pos = main_axis.is_reverse();
    }

    if !is_cross_dim_defined {
        let cross_size =
            bound_axis(&node.style, cross_axis, lines_cross_dim + padding_and_border_cross).max(padding_and_border_cross);
        set_layout_dim(node, cross_axis, cross_size);
        needs_cross_trailing_pos = cross_axis.is_reverse();
    }

    // --- Pass 6: backfill trailing positions on reverse axes ---
    let node_layout = tree.nodes[id].layout;
    if needs_main_trailing_pos || needs_cross_trailing_pos {
        for i in 0..child_count {
            let child_id = tree.nodes[id].children[i];
            let child = &mut tree.nodes[child_id];
            if needs_main_trailing_pos {
                set_trailing_position(&node_layout, child, main_axis);
            }
            if needs_cross_trailing_pos {
                set_trailing_position(&node_layout, child, cross_axis);
            }
        }
    }

    // --- Pass 7: finalize absolutely positioned children ---
    for k in absolute_base..ctx.absolute_children.len() {
        let child = &mut tree.nodes[ctx.absolute_children[k]];
        for (slot, axis) in absolute_axes.into_iter().enumerate() {
            let parent_dim = node_layout.dimension(crate::axis::dim(axis));

            if is_defined_non_negative(parent_dim)
                && !is_style_dim_defined(&child.style, axis)
                && is_leading_pos_defined(&child.style, axis)
                && is_trailing_pos_defined(&child.style, axis)
            {
                let value = bound_axis(
                    &child.style,
                    axis,
                    parent_dim
                        - absolute_border[slot]
                        - margin_axis(&child.style, axis)
                        - leading_position(&child.style, axis)
                        - trailing_position(&child.style, axis),
                )
                .max(padding_and_border_axis(&child.style, axis));
                set_layout_dim(child, axis, value);
            }

            if is_trailing_pos_defined(&child.style, axis) && !is_leading_pos_defined(&child.style, axis) {
                child.layout.position[leading(axis).index()] =
                    parent_dim - layout_dim(child, axis) - trailing_position(&child.style, axis);
            }
        }
    }

    ctx.absolute_children.truncate(absolute_base);
    ctx.line_indices.truncate(line_base);
    Ok(())
}
