use crate::cache::MeasurementCache;
use crate::measure::MeasureFunc;
use crate::result::{CachedLayout, LayoutResult};
use crate::tree::NodeId;
use flexlay_style::Style;
use std::fmt;
use std::sync::Arc;

/// Validity of a node's [`LayoutResult`].
///
/// `Dirty` -> (layout) -> `HasNewLayout` -> (seen) -> `UpToDate` -> (mutation) -> `Dirty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutState {
    #[default]
    Dirty,
    HasNewLayout,
    UpToDate,
}

pub struct Node {
    pub(crate) style: Style,
    pub(crate) layout: LayoutResult,
    pub(crate) last_layout: CachedLayout,
    pub(crate) measurements: MeasurementCache,
    pub(crate) state: LayoutState,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) measure: Option<Arc<dyn MeasureFunc>>,
}

impl Node {
    pub(crate) fn new(style: Style) -> Self {
        Self {
            style,
            layout: LayoutResult::default(),
            last_layout: CachedLayout::default(),
            measurements: MeasurementCache::new(),
            state: LayoutState::Dirty,
            parent: None,
            children: Vec::new(),
            measure: None,
        }
    }

    /// Restores the freshly created state. Tree links are left alone.
    pub(crate) fn reset(&mut self) {
        self.style.reset();
        self.layout.reset();
        self.last_layout = CachedLayout::default();
        self.measurements.clear();
        self.state = LayoutState::Dirty;
        self.measure = None;
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_measure_function(&self) -> bool {
        self.measure.is_some()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("layout", &self.layout)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("measure", &self.measure.is_some())
            .finish()
    }
}
