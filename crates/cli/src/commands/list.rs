use anyhow::{Context, Result};
use entry_kit_core::EntryPointRegistry;
use std::path::PathBuf;

use super::load_site;

/// Print resolved entry points in registration order
pub async fn run(path: PathBuf, json: bool) -> Result<()> {
    let (_, registry) = load_site(&path)?;
    print!("{}", render_entries(&registry, json)?);
    Ok(())
}

/// One aligned `name  path` line per entry, or the JSON input map
fn render_entries(registry: &EntryPointRegistry, json: bool) -> Result<String> {
    if json {
        let mut out =
            serde_json::to_string_pretty(registry).context("Failed to serialize entries")?;
        out.push('\n');
        return Ok(out);
    }

    let width = registry.names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (name, resolved) in registry.resolve_all() {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            name,
            resolved.display(),
            width = width
        ));
    }
    Ok(out)
}
