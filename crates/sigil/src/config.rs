use crate::error::{Result, SigilError};
use crate::letters::CasePolicy;
use crate::render::primitives::round_num;
use crate::render::Color;
use crate::variant::Variant;

/// Stroke styling for one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    pub stroke_width: f32,
    /// 0-1, multiplied into the stroke color alpha
    pub opacity: f32,
}

/// Per-variant styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyles {
    pub dense: VariantStyle,
    pub balanced: VariantStyle,
    pub minimal: VariantStyle,
}

impl VariantStyles {
    pub fn get(&self, variant: Variant) -> VariantStyle {
        match variant {
            Variant::Dense => self.dense,
            Variant::Balanced => self.balanced,
            Variant::Minimal => self.minimal,
        }
    }

    pub fn get_mut(&mut self, variant: Variant) -> &mut VariantStyle {
        match variant {
            Variant::Dense => &mut self.dense,
            Variant::Balanced => &mut self.balanced,
            Variant::Minimal => &mut self.minimal,
        }
    }
}

impl Default for VariantStyles {
    fn default() -> Self {
        Self {
            dense: VariantStyle {
                stroke_width: 4.0,
                opacity: 1.0,
            },
            balanced: VariantStyle {
                stroke_width: 2.5,
                opacity: 1.0,
            },
            minimal: VariantStyle {
                stroke_width: 1.5,
                opacity: 0.85,
            },
        }
    }
}

/// Visual configuration shared by all variants of a sigil
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Rendered width and height in px. The viewBox never changes.
    pub canvas_size: f32,
    pub stroke_color: Color,
    pub background: Option<Color>,
    pub case_policy: CasePolicy,
    pub variants: VariantStyles,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            stroke_color: Color::GOLD,
            background: None,
            case_policy: CasePolicy::Strict,
            variants: VariantStyles::default(),
        }
    }
}

impl RenderConfig {
    /// Stroke widths must be positive and strictly `dense > balanced > minimal`.
    ///
    /// Checks run on the values as written into markup (two decimals), so a
    /// config that passes never renders equal or zero widths.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_size.is_finite() && round_num(self.canvas_size) > 0.0) {
            return Err(SigilError::InvalidConfig(format!(
                "canvas_size must be positive, got {}",
                self.canvas_size
            )));
        }

        for variant in Variant::ALL {
            let style = self.variants.get(variant);
            if !(style.stroke_width.is_finite() && round_num(style.stroke_width) > 0.0) {
                return Err(SigilError::InvalidConfig(format!(
                    "{variant} stroke_width must be positive, got {}",
                    style.stroke_width
                )));
            }
            if !(0.0..=1.0).contains(&style.opacity) {
                return Err(SigilError::InvalidConfig(format!(
                    "{variant} opacity must be within 0-1, got {}",
                    style.opacity
                )));
            }
        }

        let VariantStyles {
            dense,
            balanced,
            minimal,
        } = self.variants;
        let (d, b, m) = (
            round_num(dense.stroke_width),
            round_num(balanced.stroke_width),
            round_num(minimal.stroke_width),
        );
        if d <= b || b <= m {
            return Err(SigilError::InvalidConfig(format!(
                "stroke widths must satisfy dense > balanced > minimal, got {} / {} / {}",
                dense.stroke_width, balanced.stroke_width, minimal.stroke_width
            )));
        }
        Ok(())
    }
}
