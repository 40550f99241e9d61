//! Text-level formatting: colors, the rich-text tag engine, and terminal rendering of tags.

mod color;
pub mod markup;
pub mod style;

pub use color::Color;
pub use markup::{
    AttributedTag, FixedTag, RichText, bold, color, italic, sized, strip_all_markup, strip_markup,
};
pub use style::{Segment, Style};
