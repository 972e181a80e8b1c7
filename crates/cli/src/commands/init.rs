use anyhow::{Context, Result};
use chrono::Local;
use entry_kit_core::{DEFAULT_ENTRIES, SITE_TOML};
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for safe inclusion in a TOML basic string.
///
/// site.toml is written as a commented template, so values are escaped by
/// hand instead of serializing through the toml crate (which drops comments).
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a site directory with `site.toml` and the default pages.
///
/// Existing HTML files are left untouched; only missing pages get a
/// placeholder.
///
/// # Errors
///
/// - The directory doesn't exist
/// - site.toml already exists in the directory
/// - File operations fail
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join(SITE_TOML);
    if site_toml_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            SITE_TOML,
            site_toml_path.display()
        );
    }

    generate_site_toml(&path)?;
    let created = generate_placeholder_pages(&path)?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── {}            ← Edit this to add or rename pages", SITE_TOML);
    for (name, file) in DEFAULT_ENTRIES {
        let marker = if created.iter().any(|c| c == file) {
            "created"
        } else {
            "existing"
        };
        println!("  ├── {:<20} ({}, entry '{}')", file, marker, name);
    }

    println!("\nNext steps:");
    println!("  1. Edit {} to match your pages", SITE_TOML);
    println!("  2. Validate: entry-kit validate {}", path.display());
    println!("  3. Build:    entry-kit build {}", path.display());

    Ok(())
}

fn site_name(base: &Path) -> String {
    std::path::absolute(base)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "My Site".to_string())
}

fn generate_site_toml(base: &Path) -> Result<()> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let name = toml_escape_string(&site_name(base));

    let mut content = format!(
        r#"# Site entry points
# Generated by entry-kit on {today}
#
# Each entry table below is one page the build engine compiles independently.
# Paths are relative to this directory and may not leave it.

[site]
name = "{name}"

[build]
out_dir = "dist"
manifest = "entries.json"
"#
    );

    for (entry_name, file) in DEFAULT_ENTRIES {
        content.push_str(&format!(
            "\n[[entry]]\nname = \"{}\"\npath = \"{}\"\n",
            toml_escape_string(entry_name),
            toml_escape_string(file)
        ));
    }

    fs::write(base.join(SITE_TOML), content)
        .with_context(|| format!("Failed to write {}", SITE_TOML))?;

    Ok(())
}

/// Write a placeholder page for every default entry without a file.
///
/// Returns the relative paths that were created.
fn generate_placeholder_pages(base: &Path) -> Result<Vec<&'static str>> {
    let mut created = Vec::new();

    for (name, file) in DEFAULT_ENTRIES {
        let target = base.join(file);
        if target.exists() {
            continue;
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{name}</title>
</head>
<body>
  <main id="{name}"></main>
</body>
</html>
"#
        );
        fs::write(&target, html).with_context(|| format!("Failed to write {}", file))?;
        created.push(*file);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_kit_core::{EntryPointRegistry, load_registry};
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("plain"), "plain");
        assert_eq!(toml_escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(toml_escape_string("C:\\sites"), "C:\\\\sites");
        assert_eq!(toml_escape_string("a\nb\tc"), "a\\nb\\tc");
    }

    #[test]
    fn test_generate_site_toml_round_trips_to_default_registry() {
        let dir = TempDir::new().unwrap();
        generate_site_toml(dir.path()).unwrap();

        let (config, registry) = load_registry(dir.path()).unwrap();
        let expected =
            EntryPointRegistry::new(dir.path(), DEFAULT_ENTRIES.iter().copied()).unwrap();
        assert_eq!(registry.resolve_all(), expected.resolve_all());
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_generate_site_toml_includes_required_sections() {
        let dir = TempDir::new().unwrap();
        generate_site_toml(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join(SITE_TOML)).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[build]"));
        assert_eq!(content.matches("\n[[entry]]\n").count(), DEFAULT_ENTRIES.len());
        assert!(content.contains("Generated by entry-kit on"));
    }

    #[test]
    fn test_generate_placeholder_pages_skips_existing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "custom").unwrap();

        let created = generate_placeholder_pages(dir.path()).unwrap();
        assert_eq!(created.len(), DEFAULT_ENTRIES.len() - 1);
        assert!(!created.contains(&"index.html"));
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "custom"
        );
        assert!(dir.path().join("hospitality.html").is_file());
    }

    #[tokio::test]
    async fn test_run_refuses_existing_site_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "").unwrap();

        let err = run(dir.path().to_path_buf()).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_run_refuses_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = run(missing).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_run_creates_site() {
        let dir = TempDir::new().unwrap();
        run(dir.path().to_path_buf()).await.unwrap();

        assert!(dir.path().join(SITE_TOML).is_file());
        for (_, file) in DEFAULT_ENTRIES {
            assert!(dir.path().join(file).is_file(), "{} missing", file);
        }
    }
}
