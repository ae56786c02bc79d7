//! Per-call state threaded through one top-level layout.

use crate::config::LayoutConfig;
use crate::perf::{NoOpProfiler, Profiler};
use crate::tree::NodeId;
use std::sync::Arc;

/// Configuration, profiler and reusable scratch space for layout calls.
///
/// Each recursion level claims a region at the end of the scratch buffers
/// and truncates back to it before returning, so one context serves a whole
/// tree walk and keeps its allocations across calls. Concurrent layouts of
/// independent trees each need their own context.
pub struct LayoutContext {
    pub config: LayoutConfig,
    pub(crate) profiler: Arc<dyn Profiler>,
    /// Flexible children of the line currently being distributed.
    pub(crate) flex_children: Vec<NodeId>,
    /// Absolutely positioned children awaiting their final pass.
    pub(crate) absolute_children: Vec<NodeId>,
    /// Line number of each child, indexed from the owner's region start.
    pub(crate) line_indices: Vec<usize>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutContext {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_profiler(config, Arc::new(NoOpProfiler))
    }

    pub fn with_profiler(config: LayoutConfig, profiler: Arc<dyn Profiler>) -> Self {
        Self {
            config,
            profiler,
            flex_children: Vec::new(),
            absolute_children: Vec::new(),
            line_indices: Vec::new(),
        }
    }

    pub fn profiler(&self) -> &dyn Profiler {
        self.profiler.as_ref()
    }

    pub(crate) fn clear_scratch(&mut self) {
        self.flex_children.clear();
        self.absolute_children.clear();
        self.line_indices.clear();
    }
}
