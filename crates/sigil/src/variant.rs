use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering intensity of a sigil. Same paths, different stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Dense,
    Balanced,
    Minimal,
}

impl Variant {
    /// Widest stroke first
    pub const ALL: [Variant; 3] = [Variant::Dense, Variant::Balanced, Variant::Minimal];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Dense => "dense",
            Variant::Balanced => "balanced",
            Variant::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(Variant::Dense),
            "balanced" => Ok(Variant::Balanced),
            "minimal" => Ok(Variant::Minimal),
            other => Err(format!(
                "Unknown variant: {other}. Valid variants: dense, balanced, minimal"
            )),
        }
    }
}
