//! Defines enums for the flexbox layout properties of a node.
use serde::{Deserialize, Serialize};

/// A style keyword enum whose variants map one-to-one to CSS-like names.
pub trait Keyword: Sized + Copy + 'static {
    /// Property name used in error messages and tree dumps.
    const PROPERTY: &'static str;
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

/// The main axis of a container. Declaration order matches the axis lookup
/// tables of the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

impl FlexDirection {
    #[inline]
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    #[inline]
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }

    #[inline]
    pub fn is_reverse(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }

    /// Remaps the row axis under right-to-left direction.
    pub fn resolve(self, direction: Direction) -> FlexDirection {
        if direction == Direction::Rtl {
            match self {
                FlexDirection::Row => return FlexDirection::RowReverse,
                FlexDirection::RowReverse => return FlexDirection::Row,
                _ => {}
            }
        }
        self
    }

    /// The axis perpendicular to `self`, resolved for `direction`.
    pub fn cross(self, direction: Direction) -> FlexDirection {
        if self.is_column() {
            FlexDirection::Row.resolve(direction)
        } else {
            FlexDirection::Column
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

/// Shared by `align-items`, `align-self` and `align-content`. `Auto` is only
/// meaningful for `align-self`, where it defers to the parent's `align-items`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    #[serde(rename = "nowrap")]
    NoWrap,
    Wrap,
}

impl Keyword for Direction {
    const PROPERTY: &'static str = "direction";
    const VARIANTS: &'static [Self] = &[Direction::Inherit, Direction::Ltr, Direction::Rtl];

    fn as_str(&self) -> &'static str {
        match self {
            Direction::Inherit => "inherit",
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Keyword for FlexDirection {
    const PROPERTY: &'static str = "flexDirection";
    const VARIANTS: &'static [Self] = &[
        FlexDirection::Column,
        FlexDirection::ColumnReverse,
        FlexDirection::Row,
        FlexDirection::RowReverse,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
        }
    }
}

impl Keyword for JustifyContent {
    const PROPERTY: &'static str = "justifyContent";
    const VARIANTS: &'static [Self] = &[
        JustifyContent::FlexStart,
        JustifyContent::Center,
        JustifyContent::FlexEnd,
        JustifyContent::SpaceBetween,
        JustifyContent::SpaceAround,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
        }
    }
}

impl Keyword for Align {
    const PROPERTY: &'static str = "align";
    const VARIANTS: &'static [Self] = &[
        Align::Auto,
        Align::FlexStart,
        Align::Center,
        Align::FlexEnd,
        Align::Stretch,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Align::Auto => "auto",
            Align::FlexStart => "flex-start",
            Align::Center => "center",
            Align::FlexEnd => "flex-end",
            Align::Stretch => "stretch",
        }
    }
}

impl Keyword for PositionType {
    const PROPERTY: &'static str = "position";
    const VARIANTS: &'static [Self] = &[PositionType::Relative, PositionType::Absolute];

    fn as_str(&self) -> &'static str {
        match self {
            PositionType::Relative => "relative",
            PositionType::Absolute => "absolute",
        }
    }
}

impl Keyword for FlexWrap {
    const PROPERTY: &'static str = "flexWrap";
    const VARIANTS: &'static [Self] = &[FlexWrap::NoWrap, FlexWrap::Wrap];

    fn as_str(&self) -> &'static str {
        match self {
            FlexWrap::NoWrap => "nowrap",
            FlexWrap::Wrap => "wrap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_swaps_row_axes_only() {
        assert_eq!(FlexDirection::Row.resolve(Direction::Rtl), FlexDirection::RowReverse);
        assert_eq!(FlexDirection::RowReverse.resolve(Direction::Rtl), FlexDirection::Row);
        assert_eq!(FlexDirection::Column.resolve(Direction::Rtl), FlexDirection::Column);
        assert_eq!(FlexDirection::Row.resolve(Direction::Ltr), FlexDirection::Row);
    }

    #[test]
    fn cross_axis_is_perpendicular() {
        assert_eq!(FlexDirection::Column.cross(Direction::Ltr), FlexDirection::Row);
        assert_eq!(FlexDirection::Column.cross(Direction::Rtl), FlexDirection::RowReverse);
        assert_eq!(FlexDirection::RowReverse.cross(Direction::Rtl), FlexDirection::Column);
    }

    #[test]
    fn keywords_serialize_in_kebab_case() {
        let json = serde_json::to_string(&JustifyContent::SpaceBetween).unwrap();
        assert_eq!(json, "\"space-between\"");
        let wrap: FlexWrap = serde_json::from_str("\"nowrap\"").unwrap();
        assert_eq!(wrap, FlexWrap::NoWrap);
        let dir: FlexDirection = serde_json::from_str("\"row-reverse\"").unwrap();
        assert_eq!(dir, FlexDirection::RowReverse);
    }
}
