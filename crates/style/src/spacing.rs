//! Per-edge spacing storage for margin, padding, border and position.
//!
//! A `Spacing` holds nine slots, one per [`Edge`]. Physical edges resolve
//! through their explicit value first, then the shorthand aliases
//! (`Vertical`/`Horizontal`, then `All`), then a per-edge default.

use flexlay_types::{Edge, UNDEFINED, floats_equal};

const EDGE_FLAGS: [u16; Edge::COUNT] = [1, 2, 4, 8, 16, 32, 64, 128, 256];
const ALIAS_FLAGS: u16 = EDGE_FLAGS[Edge::Vertical as usize]
    | EDGE_FLAGS[Edge::Horizontal as usize]
    | EDGE_FLAGS[Edge::All as usize];

#[derive(Debug, Clone)]
pub struct Spacing {
    values: [f32; Edge::COUNT],
    defaults: Option<Box<[f32; Edge::COUNT]>>,
    value_flags: u16,
    has_aliases: bool,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Spacing {
    /// Two spacings are equal when every edge resolves to the same value.
    fn eq(&self, other: &Self) -> bool {
        Edge::ALL_EDGES
            .iter()
            .all(|&edge| floats_equal(self.get(edge), other.get(edge)) && floats_equal(self.get_raw(edge), other.get_raw(edge)))
    }
}

fn implicit_default(edge: Edge) -> f32 {
    match edge {
        Edge::Start | Edge::End => UNDEFINED,
        _ => 0.0,
    }
}

impl Spacing {
    pub fn new() -> Self {
        Self {
            values: [UNDEFINED; Edge::COUNT],
            defaults: None,
            value_flags: 0,
            has_aliases: false,
        }
    }

    /// A spacing whose physical edges resolve to undefined unless set.
    /// Used for position offsets, where "unset" differs from zero.
    pub fn undefined() -> Self {
        let mut spacing = Self::new();
        for edge in [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom] {
            spacing.set_default(edge, UNDEFINED);
        }
        spacing
    }

    /// Sets the explicit value for `edge`. An undefined value clears it.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, edge: Edge, value: f32) -> bool {
        let slot = edge.index();
        if floats_equal(self.values[slot], value) {
            return false;
        }
        self.values[slot] = value;

        if value.is_nan() {
            self.value_flags &= !EDGE_FLAGS[slot];
        } else {
            self.value_flags |= EDGE_FLAGS[slot];
        }
        self.has_aliases = self.value_flags & ALIAS_FLAGS != 0;
        true
    }

    /// Sets the value used for `edge` when nothing more specific applies.
    ///
    /// Returns `true` if the stored default changed.
    pub fn set_default(&mut self, edge: Edge, value: f32) -> bool {
        let defaults = self.defaults.get_or_insert_with(|| {
            let mut table = Box::new([0.0; Edge::COUNT]);
            table[Edge::Start.index()] = UNDEFINED;
            table[Edge::End.index()] = UNDEFINED;
            table
        });
        let slot = edge.index();
        if floats_equal(defaults[slot], value) {
            return false;
        }
        defaults[slot] = value;
        true
    }

    /// The value `edge` falls back to when neither it nor an alias is set.
    pub fn get_default(&self, edge: Edge) -> f32 {
        match &self.defaults {
            Some(table) => table[edge.index()],
            None => implicit_default(edge),
        }
    }

    /// Resolves the effective value of `edge`.
    pub fn get(&self, edge: Edge) -> f32 {
        let default = self.get_default(edge);
        if self.value_flags == 0 {
            return default;
        }

        let slot = edge.index();
        if self.value_flags & EDGE_FLAGS[slot] != 0 {
            return self.values[slot];
        }

        if self.has_aliases {
            let axis = match edge {
                Edge::Top | Edge::Bottom => Edge::Vertical,
                _ => Edge::Horizontal,
            };
            if self.value_flags & EDGE_FLAGS[axis.index()] != 0 {
                return self.values[axis.index()];
            }
            if self.value_flags & EDGE_FLAGS[Edge::All.index()] != 0 {
                return self.values[Edge::All.index()];
            }
        }

        default
    }

    /// The explicitly stored value for `edge`, undefined if never set.
    pub fn get_raw(&self, edge: Edge) -> f32 {
        self.values[edge.index()]
    }

    /// Whether `edge` holds an explicit value.
    pub fn is_set(&self, edge: Edge) -> bool {
        self.value_flags & EDGE_FLAGS[edge.index()] != 0
    }

    /// The explicit value of `edge` if set, otherwise the resolved value of
    /// `fallback`. Used to let `Start`/`End` override a physical edge.
    pub fn get_with_fallback(&self, edge: Edge, fallback: Edge) -> f32 {
        if self.is_set(edge) {
            self.values[edge.index()]
        } else {
            self.get(fallback)
        }
    }
}
