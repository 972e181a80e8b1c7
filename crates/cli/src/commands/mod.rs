pub mod build;
pub mod init;
pub mod list;
pub mod validate;
pub mod viewbox;

use anyhow::{Context, Result};
use entry_kit_core::{EntryPointRegistry, SITE_TOML, SiteConfig, load_registry};
use std::path::Path;

/// Load `site.toml` from a site directory, with CLI-friendly errors
pub(crate) fn load_site(path: &Path) -> Result<(SiteConfig, EntryPointRegistry)> {
    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    if !path.join(SITE_TOML).exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'entry-kit init {}' first",
            SITE_TOML,
            path.display(),
            path.display()
        );
    }

    load_registry(path).with_context(|| format!("Failed to load {}", SITE_TOML))
}
