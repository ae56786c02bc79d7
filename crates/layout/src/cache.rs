use crate::config::MEASUREMENT_CACHE_CAPACITY;
use crate::measure::MeasureMode;
use flexlay_types::{Size, floats_equal};

// --- Cache Keys ---

#[derive(Debug, Clone, Copy)]
pub struct MeasureKey {
    pub width: f32,
    pub height: f32,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
}

impl MeasureKey {
    fn matches(&self, other: &MeasureKey) -> bool {
        self.width_mode == other.width_mode
            && self.height_mode == other.height_mode
            && floats_equal(self.width, other.width)
            && floats_equal(self.height, other.height)
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedMeasurement {
    key: MeasureKey,
    size: Size,
}

// --- The Ring ---

/// Per-node ring of recent measure-function results.
///
/// Lookups are a linear scan; inserts overwrite the oldest slot once the
/// ring is full.
#[derive(Debug, Clone, Default)]
pub struct MeasurementCache {
    entries: Vec<CachedMeasurement>,
    next_slot: usize,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &MeasureKey) -> Option<Size> {
        self.entries.iter().find(|e| e.key.matches(key)).map(|e| e.size)
    }

    pub fn insert(&mut self, key: MeasureKey, size: Size) {
        let entry = CachedMeasurement { key, size };
        if self.entries.len() < MEASUREMENT_CACHE_CAPACITY {
            self.entries.push(entry);
        } else {
            self.entries[self.next_slot] = entry;
        }
        self.next_slot = (self.next_slot + 1) % MEASUREMENT_CACHE_CAPACITY;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_slot = 0;
    }
}
