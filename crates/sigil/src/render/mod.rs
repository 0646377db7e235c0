pub mod document;
pub mod primitives;

pub use document::{SvgDocument, TaggedPath};
pub use primitives::{Color, PathCommand, PathData, Point, Stroke};
