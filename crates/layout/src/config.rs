/// Number of (constraints -> size) entries each node remembers for its
/// measure function. Older entries are overwritten first.
pub const MEASUREMENT_CACHE_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    /// Snap every computed position and size onto whole pixels after layout.
    ///
    /// Fractional parts of a node's left/top offset are folded into its
    /// width/height before rounding, so adjacent boxes never gain or lose a
    /// pixel between them. The values remembered for relayout skipping stay
    /// unrounded.
    ///
    /// Defaults to `false`.
    pub round_to_pixel_grid: bool,

    /// Emit the whole laid-out tree at `debug` level after each top-level
    /// layout call.
    ///
    /// Defaults to `false`.
    pub print_tree: bool,

    /// Trace every node that is actually recomputed.
    pub log_changes: bool,

    /// Trace every node whose previous layout is reused.
    pub log_skips: bool,
}
