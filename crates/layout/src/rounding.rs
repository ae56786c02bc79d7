use crate::tree::{LayoutTree, NodeId};
use flexlay_types::{Dimension, Edge};

/// Snaps the subtree's boxes onto whole pixels.
///
/// The fractional part of each left/top offset is carried into the size
/// before rounding, so a box's rounded right edge lands where its unrounded
/// right edge would round to. Right and bottom offsets are rounded in place.
pub(crate) fn round_to_pixel_grid(tree: &mut LayoutTree, id: NodeId) {
    let node = &mut tree.nodes[id];
    let layout = &mut node.layout;

    let left = layout.position[Edge::Left.index()];
    let top = layout.position[Edge::Top.index()];
    let fractional_left = left - left.floor();
    let fractional_top = top - top.floor();

    let width = &mut layout.dimensions[Dimension::Width.index()];
    *width = (fractional_left + *width).round() - fractional_left.round();
    let height = &mut layout.dimensions[Dimension::Height.index()];
    *height = (fractional_top + *height).round() - fractional_top.round();

    layout.position[Edge::Left.index()] = left.round();
    layout.position[Edge::Top.index()] = top.round();
    layout.position[Edge::Right.index()] = layout.position[Edge::Right.index()].round();
    layout.position[Edge::Bottom.index()] = layout.position[Edge::Bottom.index()].round();

    for i in 0..tree.nodes[id].children.len() {
        let child = tree.nodes[id].children[i];
        round_to_pixel_grid(tree, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_offsets_fold_into_size() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let child = tree.new_node();
        tree.add_child(root, child).unwrap();

        let layout = &mut tree.nodes[root].layout;
        layout.dimensions = [100.4, 50.6];
        let layout = &mut tree.nodes[child].layout;
        layout.position[Edge::Left.index()] = 10.6;
        layout.position[Edge::Top.index()] = 0.4;
        layout.dimensions = [20.6, 10.2];
        layout.position[Edge::Right.index()] = 68.8;
        layout.position[Edge::Bottom.index()] = 40.0;

        round_to_pixel_grid(&mut tree, root);

        assert_eq!(tree.layout_width(root).unwrap(), 100.0);
        assert_eq!(tree.layout_height(root).unwrap(), 51.0);
        // 10.6 + 20.6 = 31.2 -> right edge 31, left edge 11
        assert_eq!(tree.layout_x(child).unwrap(), 11.0);
        assert_eq!(tree.layout_width(child).unwrap(), 20.0);
        assert_eq!(tree.layout_y(child).unwrap(), 0.0);
        assert_eq!(tree.layout_height(child).unwrap(), 11.0);
        assert_eq!(tree.layout_position(child, Edge::Right).unwrap(), 69.0);
        assert_eq!(tree.layout_position(child, Edge::Bottom).unwrap(), 40.0);
    }
}
