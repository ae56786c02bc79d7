//! The capability a leaf node uses to report its intrinsic content size.

use crate::tree::NodeId;
use flexlay_types::Size;

/// How the engine wants an available size to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// No constraint; the size is undefined.
    #[default]
    Undefined,
    /// The content must be exactly this size.
    Exactly,
    /// The content may be at most this size.
    AtMost,
}

impl MeasureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureMode::Undefined => "undefined",
            MeasureMode::Exactly => "exactly",
            MeasureMode::AtMost => "at-most",
        }
    }
}

/// Computes the content size of a leaf (text, images, native widgets).
///
/// The returned size excludes padding and border; the engine adds those.
pub trait MeasureFunc: Send + Sync {
    fn measure(
        &self,
        node: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size;
}

impl<F> MeasureFunc for F
where
    F: Fn(NodeId, f32, MeasureMode, f32, MeasureMode) -> Size + Send + Sync,
{
    fn measure(
        &self,
        node: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size {
        self(node, width, width_mode, height, height_mode)
    }
}
