use crate::error::{Error, Result};
use crate::registry::{EntryPointRegistry, RegistryBuilder, normalize_relative};
use crate::types::BuildConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const SITE_TOML: &str = "site.toml";

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    build: RawBuild,
    #[serde(default)]
    entry: Vec<RawEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBuild {
    out_dir: Option<String>,  // Convert to PathBuf
    manifest: Option<String>, // Convert to PathBuf
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    name: String,
    path: String,
}

/// Parsed `site.toml`. Entry paths are checked for shape here but only
/// resolved once a root is supplied to [`SiteConfig::registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: Option<String>,
    pub build: BuildConfig,
    pub entries: Vec<(String, String)>,
}

impl SiteConfig {
    /// Resolve every entry against `root`, failing on the first bad one
    pub fn registry(&self, root: impl Into<std::path::PathBuf>) -> Result<EntryPointRegistry> {
        let mut builder = RegistryBuilder::new(root)?;
        for (name, path) in &self.entries {
            builder.register(name, path)?;
        }
        Ok(builder.build())
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.entry.is_empty() {
        return Err(Error::ConfigParse(
            "No [[entry]] tables found; at least one page is required".to_string(),
        ));
    }

    let defaults = BuildConfig::default();
    let out_dir = match raw.build.out_dir {
        Some(dir) => normalize_relative(&dir, "build.out_dir")?,
        None => defaults.out_dir,
    };
    let manifest = match raw.build.manifest {
        Some(file) => normalize_relative(&file, "build.manifest")?,
        None => defaults.manifest,
    };

    Ok(SiteConfig {
        name: raw.site.name,
        build: BuildConfig { out_dir, manifest },
        entries: raw.entry.into_iter().map(|e| (e.name, e.path)).collect(),
    })
}

/// Load `<project>/site.toml` and resolve its entries against `project`.
pub fn load_registry<P: AsRef<Path>>(project: P) -> Result<(SiteConfig, EntryPointRegistry)> {
    let project = std::path::absolute(project.as_ref())?;
    let config = parse_site_toml(project.join(SITE_TOML))?;
    let registry = config.registry(project)?;
    Ok((config, registry))
}
