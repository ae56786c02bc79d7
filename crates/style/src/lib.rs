pub mod flex;
pub mod parsers;
pub mod spacing;
pub mod style;

pub use flex::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, Keyword, PositionType};
pub use parsers::{StyleParseError, parse_length_value, parse_spacing_shorthand};
pub use spacing::Spacing;
pub use style::Style;
