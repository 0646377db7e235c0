use anyhow::Context;
use serde::Serialize;
use sigil::{SigilResult, Variant};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a SigilResult,
    fingerprint: String,
}

pub fn file_name(variant: Variant) -> String {
    format!("sigil_{}.svg", variant.name())
}

/// Write the selected variants into `dir`, returning the written paths
pub fn write_svgs(result: &SigilResult, variants: &[Variant], dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Could not create {}", dir.display()))?;
    let mut written = Vec::with_capacity(variants.len());
    for &variant in variants {
        let path = dir.join(file_name(variant));
        fs::write(&path, result.svg(variant))
            .with_context(|| format!("Could not write {}", path.display()))?;
        log::info!("Saved {} sigil to {:?}", variant, path);
        written.push(path);
    }
    Ok(written)
}

pub fn to_json(result: &SigilResult) -> anyhow::Result<String> {
    let out = JsonOutput {
        result,
        fingerprint: result.fingerprint(),
    };
    serde_json::to_string_pretty(&out).context("Failed to serialize sigil result")
}
