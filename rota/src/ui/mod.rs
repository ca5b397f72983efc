//! Terminal presentation: the colour theme and message/table formatting.

pub mod output_format;
pub mod theme;
