pub mod assertions;

use flexlay::{Direction, LayoutContext, LayoutTree, NodeDocument, NodeId};
use serde_json::Value;

pub use assertions::assert_layout;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A tree built from a JSON node document, ready to be laid out.
pub struct Fixture {
    pub tree: LayoutTree,
    pub root: NodeId,
    pub ctx: LayoutContext,
}

impl Fixture {
    pub fn from_json(document: Value) -> Result<Self, Box<dyn std::error::Error>> {
        init_logger();
        let mut tree = LayoutTree::new();
        let root = NodeDocument::from_value(document)?.build(&mut tree)?;
        Ok(Self {
            tree,
            root,
            ctx: LayoutContext::default(),
        })
    }

    /// Lays out with no size constraint from outside.
    pub fn layout(&mut self) -> Result<&mut Self, Box<dyn std::error::Error>> {
        self.layout_within(f32::NAN, f32::NAN)
    }

    pub fn layout_within(&mut self, width: f32, height: f32) -> Result<&mut Self, Box<dyn std::error::Error>> {
        self.tree
            .calculate_layout(&mut self.ctx, self.root, width, height, Direction::Inherit)?;
        Ok(self)
    }

    /// Id of the node reached by following child indices from the root.
    pub fn node(&self, path: &[usize]) -> NodeId {
        path.iter().fold(self.root, |id, &index| {
            self.tree.child_at(id, index).expect("fixture path out of range")
        })
    }

    /// Marks every pending layout as seen so the tree can be edited again.
    pub fn consume(&mut self) -> TestResult {
        consume_layouts(&mut self.tree, self.root)?;
        Ok(())
    }
}

pub fn consume_layouts(tree: &mut LayoutTree, id: NodeId) -> Result<(), flexlay::LayoutError> {
    if tree.has_new_layout(id)? {
        tree.mark_layout_seen(id)?;
    }
    for child in tree.children(id)?.to_vec() {
        consume_layouts(tree, child)?;
    }
    Ok(())
}

/// Measure function for a single run of fixed-width glyphs that wraps onto
/// as many lines as the offered width requires.
pub fn text_measure(chars: usize, char_width: f32, line_height: f32) -> std::sync::Arc<dyn flexlay::MeasureFunc> {
    flexlay::measure_fn(move |_, width, width_mode, _, _| {
        let natural = chars as f32 * char_width;
        let width = match width_mode {
            flexlay::MeasureMode::Undefined => natural,
            flexlay::MeasureMode::AtMost => natural.min(width),
            flexlay::MeasureMode::Exactly => width,
        };
        let per_line = (width / char_width).floor().max(1.0);
        let lines = (chars as f32 / per_line).ceil().max(1.0);
        flexlay::Size::new(width, lines * line_height)
    })
}
