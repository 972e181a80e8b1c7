use anyhow::Result;
use entry_kit_validator::{ValidationReport, validate_registry};
use std::path::PathBuf;

use super::load_site;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let (config, registry) = load_site(&path)?;

    println!("✓ site.toml valid");
    if let Some(name) = &config.name {
        println!("  Site: {}", name);
    }
    println!("  Entries: {}", registry.len());
    println!();

    let report = validate_registry(&registry, Some(config.build.out_dir.as_path()));
    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ All entry points valid");
    Ok(())
}

pub(crate) fn print_report(report: &ValidationReport) {
    for line in &report.info {
        println!("   ✓ {}", line);
    }
    for warning in &report.warnings {
        eprintln!("   ⚠ Warning: {}", warning);
    }
    for error in &report.errors {
        eprintln!("   ✗ Error: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_kit_core::SITE_TOML;
    use std::fs;
    use tempfile::TempDir;

    const SITE: &str = r#"
[[entry]]
name = "main"
path = "index.html"

[[entry]]
name = "tech"
path = "tech.html"
"#;

    #[tokio::test]
    async fn test_validate_passes_when_files_exist() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), SITE).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("tech.html"), "<html></html>").unwrap();

        run(dir.path().to_path_buf()).await.unwrap();
    }

    #[tokio::test]
    async fn test_validate_fails_on_missing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), SITE).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let err = run(dir.path().to_path_buf()).await.unwrap_err();
        assert!(err.to_string().contains("1 error"));
    }

    #[tokio::test]
    async fn test_validate_requires_site_toml() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path().to_path_buf()).await.unwrap_err();
        assert!(err.to_string().contains("entry-kit init"));
    }
}
