use serde::Deserialize;
use sigil::render::Color;
use sigil::{CasePolicy, RenderConfig, Variant, VariantStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate locations for `configs/sigil.toml`, tried in order.
pub const CONFIG_PATHS: [&str; 2] = ["configs/sigil.toml", "../../configs/sigil.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariantToml {
    #[serde(default)]
    stroke_width: Option<f32>,
    #[serde(default)]
    opacity: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariantsToml {
    #[serde(default)]
    dense: Option<VariantToml>,
    #[serde(default)]
    balanced: Option<VariantToml>,
    #[serde(default)]
    minimal: Option<VariantToml>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderToml {
    #[serde(default)]
    canvas_size: Option<u32>,
    #[serde(default)]
    stroke_color: Option<String>,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    case_policy: Option<CasePolicy>,
    #[serde(default)]
    variants: VariantsToml,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    render: Option<RenderToml>,
}

/// First existing candidate config path, if any.
pub fn find_sigil_toml() -> Option<PathBuf> {
    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

fn parse_color(field: &str, value: &str) -> anyhow::Result<Color> {
    Color::from_hex(value).ok_or_else(|| {
        anyhow::anyhow!("render.{field} is not a hex color (#RRGGBB or #RRGGBBAA): {value}")
    })
}

/// Parse `[render]` from TOML text, applying it over the defaults.
///
/// A missing `[render]` table yields `RenderConfig::default()`.
pub fn parse_render_config(text: &str) -> anyhow::Result<RenderConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse sigil.toml render settings: {e}"))?;
    let mut config = RenderConfig::default();
    let Some(render) = root.render else {
        return Ok(config);
    };

    let RenderToml {
        canvas_size,
        stroke_color,
        background,
        case_policy,
        variants,
    } = render;

    if let Some(size) = canvas_size {
        config.canvas_size = size as f32;
    }
    if let Some(color) = stroke_color {
        config.stroke_color = parse_color("stroke_color", &color)?;
    }
    if let Some(color) = background {
        config.background = Some(parse_color("background", &color)?);
    }
    if let Some(policy) = case_policy {
        config.case_policy = policy;
    }

    let overrides = [
        (Variant::Dense, variants.dense),
        (Variant::Balanced, variants.balanced),
        (Variant::Minimal, variants.minimal),
    ];
    for (variant, entry) in overrides {
        let Some(entry) = entry else { continue };
        let style: &mut VariantStyle = config.variants.get_mut(variant);
        if let Some(width) = entry.stroke_width {
            style.stroke_width = width;
        }
        if let Some(opacity) = entry.opacity {
            style.opacity = opacity;
        }
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("sigil.toml: {e}"))?;
    Ok(config)
}

/// Load and validate a config file at an explicit path.
pub fn load_render_config_from(path: &Path) -> anyhow::Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_render_config(&text)
}

/// Load from the first candidate path, or fall back to defaults when none exists.
pub fn load_render_config() -> anyhow::Result<RenderConfig> {
    match find_sigil_toml() {
        Some(path) => {
            log::info!("Loading render config from {}", path.display());
            load_render_config_from(&path)
        }
        None => {
            log::debug!("No sigil.toml found in {:?}, using defaults", CONFIG_PATHS);
            Ok(RenderConfig::default())
        }
    }
}
