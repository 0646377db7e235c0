use crate::config::RenderConfig;
use crate::error::{Result, SigilError};
use crate::geometry::{letter_path, VIEW_BOX};
use crate::letters::{filter_letters, Letter, LetterInput};
use crate::render::{Stroke, SvgDocument, TaggedPath};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The three rendered documents of one sigil
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigilSvgs {
    pub dense: String,
    pub balanced: String,
    pub minimal: String,
}

impl SigilSvgs {
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Dense => &self.dense,
            Variant::Balanced => &self.balanced,
            Variant::Minimal => &self.minimal,
        }
    }
}

/// Output of a generation: surviving letters plus one SVG per variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigilResult {
    pub letters: Vec<char>,
    pub svgs: SigilSvgs,
}

impl SigilResult {
    pub fn svg(&self, variant: Variant) -> &str {
        self.svgs.get(variant)
    }

    /// `(variant, document)` pairs, widest stroke first
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &str)> {
        Variant::ALL.into_iter().map(move |v| (v, self.svg(v)))
    }

    /// Lowercase hex SHA-256 over the letters and every document.
    ///
    /// Stable for identical results; usable as a persistence key.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        let letters: String = self.letters.iter().collect();
        hasher.update(letters.as_bytes());
        for (variant, svg) in self.iter() {
            hasher.update([0u8]);
            hasher.update(variant.name().as_bytes());
            hasher.update([0u8]);
            hasher.update(svg.as_bytes());
        }
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Sigil generator - converts letter sequences to SVG documents
#[derive(Debug, Clone, Default)]
pub struct SigilGenerator {
    config: RenderConfig,
}

impl SigilGenerator {
    /// Create a new generator with the default config
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Create a generator with a custom config, rejecting invalid ones
    pub fn with_config(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Generate all three variants for `letters`.
    ///
    /// Invalid entries are dropped silently. Fails with
    /// [`SigilError::InvalidInput`] when none survive.
    pub fn generate<I, T>(&self, letters: I) -> Result<SigilResult>
    where
        I: IntoIterator<Item = T>,
        T: LetterInput,
    {
        let (kept, rejected) = filter_letters(letters, self.config.case_policy);
        log::debug!("[SIGIL] kept {} letters, rejected {}", kept.len(), rejected);

        if kept.is_empty() {
            return Err(SigilError::InvalidInput { rejected });
        }

        let paths: Vec<TaggedPath> = kept
            .iter()
            .map(|&letter| TaggedPath {
                letter: letter.as_char(),
                data: letter_path(letter),
            })
            .collect();

        let svgs = SigilSvgs {
            dense: self.render_variant(Variant::Dense, &paths),
            balanced: self.render_variant(Variant::Balanced, &paths),
            minimal: self.render_variant(Variant::Minimal, &paths),
        };

        Ok(SigilResult {
            letters: kept.into_iter().map(Letter::as_char).collect(),
            svgs,
        })
    }

    fn render_variant(&self, variant: Variant, paths: &[TaggedPath]) -> String {
        let style = self.config.variants.get(variant);
        let stroke = Stroke {
            color: self.config.stroke_color,
            width: style.stroke_width,
            opacity: Some(style.opacity),
        };
        let size = self.config.canvas_size;
        let mut doc = SvgDocument::new(size, size, VIEW_BOX, stroke);
        doc.background = self.config.background;
        doc.paths = paths.to_vec();
        doc.render()
    }
}

/// Generate with the default config
pub fn generate<I, T>(letters: I) -> Result<SigilResult>
where
    I: IntoIterator<Item = T>,
    T: LetterInput,
{
    SigilGenerator::new().generate(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keeps_order_and_duplicates() {
        let result = generate(['B', 'A', 'B']).unwrap();
        assert_eq!(result.letters, vec!['B', 'A', 'B']);
        assert_eq!(result.svgs.dense.matches("<path ").count(), 3);
    }

    #[test]
    fn test_generate_reports_rejected_count() {
        let err = generate(["1", "@", "ab"]).unwrap_err();
        assert_eq!(err, SigilError::InvalidInput { rejected: 3 });
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = RenderConfig::default();
        config.variants.dense.stroke_width = 1.0;
        assert!(SigilGenerator::with_config(config).is_err());
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let result = generate(['A']).unwrap();
        let fp = result.fingerprint();
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(fp, generate(['A']).unwrap().fingerprint());
        assert_ne!(fp, generate(['B']).unwrap().fingerprint());
    }
}
