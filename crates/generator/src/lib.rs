// Build-engine input manifest generation

use anyhow::{Context, Result};
use entry_kit_core::EntryPointRegistry;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What the build engine reads: the project root and its ordered inputs.
#[derive(Debug, Serialize)]
pub struct BuildManifest<'a> {
    pub root: &'a Path,
    pub input: &'a EntryPointRegistry,
}

impl<'a> BuildManifest<'a> {
    pub fn from_registry(registry: &'a EntryPointRegistry) -> Self {
        Self {
            root: registry.root(),
            input: registry,
        }
    }
}

/// Render the manifest as pretty JSON with a trailing newline.
///
/// Output depends only on the registry, so identical registries produce
/// byte-identical manifests.
pub fn render_manifest(registry: &EntryPointRegistry) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&BuildManifest::from_registry(registry))
        .context("Failed to serialize build manifest")?;
    json.push('\n');
    Ok(json)
}

/// Write the manifest to `out_dir/file_name`, creating `out_dir` if needed.
pub fn write_manifest(
    registry: &EntryPointRegistry,
    out_dir: &Path,
    file_name: &Path,
) -> Result<PathBuf> {
    let target = out_dir.join(file_name);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = render_manifest(registry)?;
    fs::write(&target, json).with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_kit_core::DEFAULT_ENTRIES;
    use tempfile::TempDir;

    fn registry() -> EntryPointRegistry {
        EntryPointRegistry::new("/srv/site", DEFAULT_ENTRIES.iter().copied()).unwrap()
    }

    #[test]
    fn test_render_manifest_keeps_registration_order() {
        let json = render_manifest(&registry()).unwrap();

        let positions: Vec<usize> = DEFAULT_ENTRIES
            .iter()
            .map(|(name, _)| json.find(&format!("\"{}\":", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"root\": \"/srv/site\""));
        assert!(json.contains("\"main\": \"/srv/site/index.html\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_render_manifest_is_reproducible() {
        assert_eq!(
            render_manifest(&registry()).unwrap(),
            render_manifest(&registry()).unwrap()
        );
    }

    #[test]
    fn test_render_manifest_parses_back() {
        let json = render_manifest(&registry()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let input = value["input"].as_object().unwrap();
        assert_eq!(input.len(), 5);
        assert_eq!(input["hospitality"], "/srv/site/hospitality.html");
    }

    #[test]
    fn test_write_manifest_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("dist/nested");

        let written = write_manifest(&registry(), &out_dir, Path::new("entries.json")).unwrap();
        assert_eq!(written, out_dir.join("entries.json"));

        let content = fs::read_to_string(&written).unwrap();
        assert_eq!(content, render_manifest(&registry()).unwrap());
    }

    #[test]
    fn test_write_manifest_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("entries.json");
        fs::write(&target, "stale").unwrap();

        write_manifest(&registry(), dir.path(), Path::new("entries.json")).unwrap();
        assert_ne!(fs::read_to_string(&target).unwrap(), "stale");
    }
}
