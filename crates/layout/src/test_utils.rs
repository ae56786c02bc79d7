use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::context::LayoutContext;
use crate::perf::DebugProfiler;
use crate::tree::{LayoutTree, NodeId};
use flexlay_style::Direction;
use std::sync::Arc;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A context whose profiler the test can inspect afterwards.
pub fn profiled_context(config: LayoutConfig) -> (LayoutContext, Arc<DebugProfiler>) {
    let profiler = Arc::new(DebugProfiler::new());
    let ctx = LayoutContext::with_profiler(config, profiler.clone());
    (ctx, profiler)
}

/// Runs a layout with a fresh default context.
pub fn layout(tree: &mut LayoutTree, root: NodeId, width: f32, height: f32) -> Result<(), LayoutError> {
    let mut ctx = LayoutContext::default();
    tree.calculate_layout(&mut ctx, root, width, height, Direction::Inherit)
}

/// Acknowledges every pending layout in the subtree, as a host would after
/// applying the results.
pub fn consume_layouts(tree: &mut LayoutTree, id: NodeId) -> Result<(), LayoutError> {
    if tree.has_new_layout(id)? {
        tree.mark_layout_seen(id)?;
    }
    for child in tree.children(id)?.to_vec() {
        consume_layouts(tree, child)?;
    }
    Ok(())
}

/// Creates a node with a fixed size and appends it to `parent`.
pub fn add_sized_child(
    tree: &mut LayoutTree,
    parent: NodeId,
    width: f32,
    height: f32,
) -> Result<NodeId, LayoutError> {
    let child = tree.new_node();
    tree.set_width(child, width)?;
    tree.set_height(child, height)?;
    tree.add_child(parent, child)?;
    Ok(child)
}
