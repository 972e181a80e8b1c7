use anyhow::{Context, Result};
use entry_kit_core::{EntryPointRegistry, SiteConfig};
use entry_kit_generator::write_manifest;
use entry_kit_validator::validate_registry;
use std::path::{Path, PathBuf};

use super::load_site;
use super::validate::print_report;

/// Validate entries and write the build-engine manifest
pub async fn run(path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    println!("🔨 Preparing build entries...");
    println!("   Source: {}", path.display());

    let (config, registry) = load_site(&path)?;
    let output = resolve_output(&registry, &config, output)?;
    println!("   Output: {}", output.display());
    println!();

    println!("✓ Loaded {} entry point(s)", registry.len());

    println!("🔍 Checking entry files...");
    let in_tree = output_in_tree(&registry, &output);
    let report = validate_registry(&registry, in_tree);
    print_report(&report);
    if !report.is_ok() {
        anyhow::bail!(
            "Build aborted: {} entry error(s), no manifest written",
            report.errors.len()
        );
    }

    println!("📄 Writing {}...", config.build.manifest.display());
    let written = write_manifest(&registry, &output, &config.build.manifest)?;
    println!("   ✓ Wrote {}", written.display());

    println!();
    println!("✅ Build entries ready!");
    for (name, resolved) in registry.resolve_all() {
        println!("   {} → {}", name, resolved.display());
    }
    println!();

    Ok(())
}

/// Absolute output directory: `-o` if given, else `build.out_dir` under the root
fn resolve_output(
    registry: &EntryPointRegistry,
    config: &SiteConfig,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    match output {
        Some(dir) => std::path::absolute(&dir)
            .with_context(|| format!("Invalid output directory: {}", dir.display())),
        None => Ok(registry.root().join(&config.build.out_dir)),
    }
}

/// Output directory relative to the site root, when it lives inside it
fn output_in_tree<'a>(registry: &EntryPointRegistry, output: &'a Path) -> Option<&'a Path> {
    output
        .strip_prefix(registry.root())
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
}
