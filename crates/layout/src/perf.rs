use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Trait for observing what the layout engine does.
///
/// This allows us to swap implementations. In production builds the
/// `NoOpProfiler` is used and every hook compiles down to nothing.
pub trait Profiler: Send + Sync {
    fn record(&self, key: &str, duration: Duration);
    /// A node's previous layout was reused.
    fn count_hit(&self);
    /// A node was laid out from scratch.
    fn count_miss(&self);
    /// The external measure function was invoked.
    fn count_measure(&self);
    /// A measurement was served from the node's measurement cache.
    fn count_measure_hit(&self);
    fn reset(&self);
}

/// A no-op profiler for production use.
/// The compiler will inline these and eliminate the overhead.
pub struct NoOpProfiler;

impl Profiler for NoOpProfiler {
    #[inline(always)]
    fn record(&self, _key: &str, _duration: Duration) {}
    #[inline(always)]
    fn count_hit(&self) {}
    #[inline(always)]
    fn count_miss(&self) {}
    #[inline(always)]
    fn count_measure(&self) {}
    #[inline(always)]
    fn count_measure_hit(&self) {}
    #[inline(always)]
    fn reset(&self) {}
}

/// Counting profiler used by tests, benches and debugging sessions.
pub struct DebugProfiler {
    stats: Mutex<HashMap<String, Duration>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    measures: AtomicUsize,
    measure_hits: AtomicUsize,
}

impl DebugProfiler {
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            measures: AtomicUsize::new(0),
            measure_hits: AtomicUsize::new(0),
        }
    }

    /// Nodes whose layout was reused since the last reset.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Acquire)
    }

    /// Nodes that were recomputed since the last reset.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Acquire)
    }

    pub fn measures(&self) -> usize {
        self.measures.load(Ordering::Acquire)
    }

    pub fn measure_hits(&self) -> usize {
        self.measure_hits.load(Ordering::Acquire)
    }

    pub fn log_summary(&self) {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        if total == 0 {
            return;
        }

        log::info!("=== Layout Profile Summary ===");
        log::info!(
            "Relayouts skipped: {} ({:.1}%), recomputed: {}",
            hits,
            (hits as f64 / total as f64) * 100.0,
            misses
        );
        log::info!(
            "Measure calls: {}, served from cache: {}",
            self.measures(),
            self.measure_hits()
        );

        if let Ok(stats) = self.stats.lock() {
            for (k, v) in stats.iter() {
                log::info!("{}: {:?}", k, v);
            }
        }
    }
}

impl Default for DebugProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler for DebugProfiler {
    fn record(&self, key: &str, duration: Duration) {
        if let Ok(mut g) = self.stats.lock() {
            *g.entry(key.to_string()).or_default() += duration;
        }
    }

    fn count_hit(&self) {
        self.hits.fetch_add(1, Ordering::Release);
    }

    fn count_miss(&self) {
        self.misses.fetch_add(1, Ordering::Release);
    }

    fn count_measure(&self) {
        self.measures.fetch_add(1, Ordering::Release);
    }

    fn count_measure_hit(&self) {
        self.measure_hits.fetch_add(1, Ordering::Release);
    }

    fn reset(&self) {
        if let Ok(mut g) = self.stats.lock() {
            g.clear();
        }
        self.hits.store(0, Ordering::Release);
        self.misses.store(0, Ordering::Release);
        self.measures.store(0, Ordering::Release);
        self.measure_hits.store(0, Ordering::Release);
    }
}
