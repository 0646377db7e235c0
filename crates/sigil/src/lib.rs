//! Sigil - deterministic letter-to-sigil generation
//!
//! Turns an ordered sequence of letters into three overlaid SVG renderings
//! (`dense`, `balanced`, `minimal`). Each surviving letter contributes exactly
//! one `<path>`; variants differ only in stroke styling.

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod letters;
pub mod reduce;
pub mod render;
pub mod variant;

pub use config::{RenderConfig, VariantStyle, VariantStyles};
pub use error::{Result, SigilError};
pub use generator::{generate, SigilGenerator, SigilResult, SigilSvgs};
pub use letters::{CasePolicy, Letter, LetterInput};
pub use reduce::{reduce_intention, IntentionReducer};
pub use variant::Variant;
