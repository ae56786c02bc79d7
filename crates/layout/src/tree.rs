//! The node arena and its mutation API.
//!
//! Every mutation that can change a layout goes through [`LayoutTree`], which
//! keeps the parent/child links consistent and drives each node's
//! [`LayoutState`] machine. Setters are no-ops when the value is unchanged, so
//! hosts can push whole style objects without causing spurious relayouts.

use crate::LayoutError;
use crate::measure::{MeasureFunc, MeasureMode};
use crate::node::{LayoutState, Node};
use crate::result::LayoutResult;
use flexlay_style::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, PositionType, Spacing, Style};
use flexlay_types::{Edge, Rect, Size, floats_equal};
use slotmap::{SlotMap, new_key_type};
use std::sync::Arc;

new_key_type! {
    /// Handle to a node owned by a [`LayoutTree`].
    pub struct NodeId;
}

/// Wraps a closure as a shareable measure function.
pub fn measure_fn<F>(f: F) -> Arc<dyn MeasureFunc>
where
    F: Fn(NodeId, f32, MeasureMode, f32, MeasureMode) -> Size + Send + Sync + 'static,
{
    Arc::new(f)
}

#[derive(Default)]
pub struct LayoutTree {
    pub(crate) nodes: SlotMap<NodeId, Node>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    // --- Node lifecycle ---

    pub fn new_node(&mut self) -> NodeId {
        self.nodes.insert(Node::new(Style::default()))
    }

    pub fn new_node_with_style(&mut self, style: Style) -> NodeId {
        self.nodes.insert(Node::new(style))
    }

    /// Frees a detached, childless node. Its id becomes invalid.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), LayoutError> {
        let node = self.node(id)?;
        if node.parent.is_some() || !node.children.is_empty() {
            return Err(LayoutError::ResetAttached(id));
        }
        self.nodes.remove(id);
        Ok(())
    }

    /// Returns a detached, childless node to its freshly created state:
    /// default style, reset layout, no measure function, `Dirty`.
    pub fn reset(&mut self, id: NodeId) -> Result<(), LayoutError> {
        let node = self.node_mut(id)?;
        if node.parent.is_some() || !node.children.is_empty() {
            return Err(LayoutError::ResetAttached(id));
        }
        node.reset();
        Ok(())
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, LayoutError> {
        self.nodes.get(id).ok_or(LayoutError::InvalidNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, LayoutError> {
        self.nodes.get_mut(id).ok_or(LayoutError::InvalidNode(id))
    }

    // --- Children ---

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], LayoutError> {
        Ok(&self.node(id)?.children)
    }

    pub fn child_count(&self, id: NodeId) -> Result<usize, LayoutError> {
        Ok(self.node(id)?.children.len())
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> Result<NodeId, LayoutError> {
        let children = &self.node(id)?.children;
        children.get(index).copied().ok_or(LayoutError::ChildIndexOutOfBounds {
            index,
            count: children.len(),
        })
    }

    pub fn index_of(&self, id: NodeId, child: NodeId) -> Result<Option<usize>, LayoutError> {
        Ok(self.node(id)?.children.iter().position(|&c| c == child))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, LayoutError> {
        Ok(self.node(id)?.parent)
    }

    pub fn add_child(&mut self, id: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let count = self.child_count(id)?;
        self.add_child_at(id, child, count)
    }

    /// Inserts `child` at `index`, shifting later children.
    ///
    /// Fails if `child` already has a parent, if `id` has a measure
    /// function, or if the insertion would create a cycle.
    pub fn add_child_at(&mut self, id: NodeId, child: NodeId, index: usize) -> Result<(), LayoutError> {
        let parent = self.node(id)?;
        if parent.measure.is_some() {
            return Err(LayoutError::MeasureWithChildren(id));
        }
        let count = parent.children.len();
        if index > count {
            return Err(LayoutError::ChildIndexOutOfBounds { index, count });
        }
        if self.node(child)?.parent.is_some() {
            return Err(LayoutError::ChildAlreadyParented(child));
        }

        let mut ancestor = Some(id);
        while let Some(current) = ancestor {
            if current == child {
                return Err(LayoutError::SelfAttachment(child));
            }
            ancestor = self.nodes[current].parent;
        }

        self.check_dirtiable(id)?;
        self.nodes[id].children.insert(index, child);
        self.nodes[child].parent = Some(id);
        self.propagate_dirty(id);
        Ok(())
    }

    /// Detaches and returns the child at `index`.
    pub fn remove_child_at(&mut self, id: NodeId, index: usize) -> Result<NodeId, LayoutError> {
        let child = self.child_at(id, index)?;
        self.check_dirtiable(id)?;
        self.nodes[id].children.remove(index);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        self.propagate_dirty(id);
        Ok(child)
    }

    // --- Measure capability ---

    /// Installs or clears the measure function. The node is dirtied only if
    /// the function identity changes.
    pub fn set_measure_function(
        &mut self,
        id: NodeId,
        measure: Option<Arc<dyn MeasureFunc>>,
    ) -> Result<(), LayoutError> {
        let node = self.node(id)?;
        let unchanged = match (&node.measure, &measure) {
            (Some(current), Some(new)) => Arc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return Ok(());
        }
        if measure.is_some() && !node.children.is_empty() {
            return Err(LayoutError::MeasureWithChildren(id));
        }

        self.check_dirtiable(id)?;
        self.nodes[id].measure = measure;
        self.propagate_dirty(id);
        Ok(())
    }

    pub fn has_measure_function(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.node(id)?.measure.is_some())
    }

    /// Invokes the node's measure function directly, bypassing the cache.
    pub fn measure(
        &self,
        id: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Result<Size, LayoutError> {
        let measure = self.node(id)?.measure.as_ref().ok_or(LayoutError::MeasureNotDefined(id))?;
        Ok(measure.measure(id, width, width_mode, height, height_mode))
    }

    // --- Layout state ---

    pub fn layout_state(&self, id: NodeId) -> Result<LayoutState, LayoutError> {
        Ok(self.node(id)?.state)
    }

    pub fn is_dirty(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.node(id)?.state == LayoutState::Dirty)
    }

    pub fn has_new_layout(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.node(id)?.state == LayoutState::HasNewLayout)
    }

    /// Acknowledges a freshly computed layout.
    pub fn mark_layout_seen(&mut self, id: NodeId) -> Result<(), LayoutError> {
        let node = self.node_mut(id)?;
        if node.state != LayoutState::HasNewLayout {
            return Err(LayoutError::LayoutNotPending(id));
        }
        node.state = LayoutState::UpToDate;
        Ok(())
    }

    /// Forces a relayout of `id` and its ancestors, for content changes the
    /// tree cannot see (e.g. the text behind a measure function).
    pub fn mark_dirty(&mut self, id: NodeId) -> Result<(), LayoutError> {
        self.node(id)?;
        self.check_dirtiable(id)?;
        self.propagate_dirty(id);
        Ok(())
    }

    /// Fails if dirtying `id` would reach a node whose new layout has not
    /// been consumed yet. Nothing is modified.
    fn check_dirtiable(&self, id: NodeId) -> Result<(), LayoutError> {
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = &self.nodes[cur];
            match node.state {
                LayoutState::Dirty => return Ok(()),
                LayoutState::HasNewLayout => return Err(LayoutError::LayoutNotConsumed(cur)),
                LayoutState::UpToDate => current = node.parent,
            }
        }
        Ok(())
    }

    /// Marks `id` and every ancestor up to the first dirty one as dirty.
    fn propagate_dirty(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = &mut self.nodes[cur];
            if node.state == LayoutState::Dirty {
                break;
            }
            node.state = LayoutState::Dirty;
            node.measurements.clear();
            current = node.parent;
        }
    }

    pub(crate) fn mark_has_new_layout(&mut self, id: NodeId) {
        self.nodes[id].state = LayoutState::HasNewLayout;
    }

    // --- Style ---

    pub fn style(&self, id: NodeId) -> Result<&Style, LayoutError> {
        Ok(&self.node(id)?.style)
    }

    /// Replaces the whole style. A style equal to the current one is a no-op.
    pub fn set_style(&mut self, id: NodeId, style: Style) -> Result<(), LayoutError> {
        if self.node(id)?.style == style {
            return Ok(());
        }
        self.check_dirtiable(id)?;
        self.nodes[id].style = style;
        self.propagate_dirty(id);
        Ok(())
    }

    fn update_style<T: Copy>(
        &mut self,
        id: NodeId,
        value: T,
        same: impl Fn(T, T) -> bool,
        field: impl Fn(&mut Style) -> &mut T,
    ) -> Result<(), LayoutError> {
        let current = *field(&mut self.node_mut(id)?.style);
        if same(current, value) {
            return Ok(());
        }
        self.check_dirtiable(id)?;
        *field(&mut self.nodes[id].style) = value;
        self.propagate_dirty(id);
        Ok(())
    }

    fn update_spacing(
        &mut self,
        id: NodeId,
        edge: Edge,
        value: f32,
        as_default: bool,
        field: impl Fn(&mut Style) -> &mut Spacing,
    ) -> Result<(), LayoutError> {
        let spacing = field(&mut self.node_mut(id)?.style);
        let current = if as_default {
            spacing.get_default(edge)
        } else {
            spacing.get_raw(edge)
        };
        if floats_equal(current, value) {
            return Ok(());
        }

        self.check_dirtiable(id)?;
        let spacing = field(&mut self.nodes[id].style);
        if as_default {
            spacing.set_default(edge, value);
        } else {
            spacing.set(edge, value);
        }
        self.propagate_dirty(id);
        Ok(())
    }

    /// Legacy single-value flex: positive grows, negative shrinks.
    pub fn set_flex(&mut self, id: NodeId, flex: f32) -> Result<(), LayoutError> {
        let (grow, shrink, basis) = Style::expand_flex(flex);
        let style = &self.node(id)?.style;
        if floats_equal(style.flex_grow, grow)
            && floats_equal(style.flex_shrink, shrink)
            && floats_equal(style.flex_basis, basis)
        {
            return Ok(());
        }
        self.check_dirtiable(id)?;
        self.nodes[id].style.set_flex(flex);
        self.propagate_dirty(id);
        Ok(())
    }

    pub fn set_margin(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, false, |s| &mut s.margin)
    }

    pub fn set_padding(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, false, |s| &mut s.padding)
    }

    pub fn set_border(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, false, |s| &mut s.border)
    }

    /// Sets an offset used by relative and absolute positioning.
    pub fn set_position(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, false, |s| &mut s.position)
    }

    pub fn set_default_margin(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, true, |s| &mut s.margin)
    }

    pub fn set_default_padding(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, true, |s| &mut s.padding)
    }

    pub fn set_default_border(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), LayoutError> {
        self.update_spacing(id, edge, value, true, |s| &mut s.border)
    }

    // --- Layout readers ---

    pub fn layout(&self, id: NodeId) -> Result<&LayoutResult, LayoutError> {
        Ok(&self.node(id)?.layout)
    }

    pub fn layout_x(&self, id: NodeId) -> Result<f32, LayoutError> {
        Ok(self.layout(id)?.left())
    }

    pub fn layout_y(&self, id: NodeId) -> Result<f32, LayoutError> {
        Ok(self.layout(id)?.top())
    }

    pub fn layout_width(&self, id: NodeId) -> Result<f32, LayoutError> {
        Ok(self.layout(id)?.width())
    }

    pub fn layout_height(&self, id: NodeId) -> Result<f32, LayoutError> {
        Ok(self.layout(id)?.height())
    }

    pub fn layout_direction(&self, id: NodeId) -> Result<Direction, LayoutError> {
        Ok(self.layout(id)?.direction)
    }

    pub fn layout_position(&self, id: NodeId, edge: Edge) -> Result<f32, LayoutError> {
        if !edge.is_physical() {
            return Ok(flexlay_types::UNDEFINED);
        }
        Ok(self.layout(id)?.position(edge))
    }

    pub fn layout_rect(&self, id: NodeId) -> Result<Rect, LayoutError> {
        Ok(self.layout(id)?.rect())
    }
}

macro_rules! style_setters {
    ($($(#[$doc:meta])* $setter:ident => $field:ident: $ty:ty, $same:expr;)*) => {
        impl LayoutTree {
            $(
                $(#[$doc])*
                pub fn $setter(&mut self, id: NodeId, value: $ty) -> Result<(), LayoutError> {
                    self.update_style(id, value, $same, |s| &mut s.$field)
                }
            )*
        }
    };
}

style_setters! {
    set_direction => direction: Direction, |a, b| a == b;
    set_flex_direction => flex_direction: FlexDirection, |a, b| a == b;
    set_justify_content => justify_content: JustifyContent, |a, b| a == b;
    set_align_items => align_items: Align, |a, b| a == b;
    /// `Align::Auto` defers to the parent's `align_items`.
    set_align_self => align_self: Align, |a, b| a == b;
    set_align_content => align_content: Align, |a, b| a == b;
    set_position_type => position_type: PositionType, |a, b| a == b;
    set_flex_wrap => flex_wrap: FlexWrap, |a, b| a == b;
    set_flex_grow => flex_grow: f32, floats_equal;
    set_flex_shrink => flex_shrink: f32, floats_equal;
    set_flex_basis => flex_basis: f32, floats_equal;
    set_width => width: f32, floats_equal;
    set_height => height: f32, floats_equal;
    set_min_width => min_width: f32, floats_equal;
    set_min_height => min_height: f32, floats_equal;
    set_max_width => max_width: f32, floats_equal;
    set_max_height => max_height: f32, floats_equal;
}
