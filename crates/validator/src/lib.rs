// Checks a resolved registry against what is actually on disk

use entry_kit_core::{EntryPointRegistry, is_html_path};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const MAX_SCAN_DEPTH: usize = 3; // Maximum directory depth for orphan page scanning
const SKIPPED_DIRS: &[&str] = &["node_modules", "target"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every entry in `registry`.
///
/// Errors: missing source files, or entries that are not regular files.
/// Warnings: non-HTML entries, and HTML files under the root that no entry
/// references. `out_dir` (relative to the root) is left out of the scan so
/// build output never shows up as orphan pages.
pub fn validate_registry(registry: &EntryPointRegistry, out_dir: Option<&Path>) -> ValidationReport {
    let mut report = ValidationReport::default();

    for entry in registry.entries() {
        if !entry.path.exists() {
            report.errors.push(format!(
                "Entry '{}': source file not found: {}",
                entry.name,
                entry.path.display()
            ));
            continue;
        }

        if !entry.path.is_file() {
            report.errors.push(format!(
                "Entry '{}': not a regular file: {}",
                entry.name,
                entry.path.display()
            ));
            continue;
        }

        if !entry.is_html() {
            report.warnings.push(format!(
                "Entry '{}': {} is not an HTML file",
                entry.name,
                entry.source.display()
            ));
        }

        report
            .info
            .push(format!("{} → {}", entry.name, entry.path.display()));
    }

    let skip = out_dir.map(|d| registry.root().join(d));
    let registered: HashSet<&Path> = registry.entries().iter().map(|e| e.path()).collect();
    for page in scan_html_files(registry.root(), skip.as_deref()) {
        if !registered.contains(page.as_path()) {
            let shown = page.strip_prefix(registry.root()).unwrap_or(&page);
            report.warnings.push(format!(
                "Orphan page: {} is not registered as an entry",
                shown.display()
            ));
        }
    }

    report
}

/// Scan `root` for HTML files.
///
/// Recursively searches up to `MAX_SCAN_DEPTH` levels, skipping hidden
/// directories, dependency/build directories, and `skip`.
///
/// Returns a sorted vector of paths.
fn scan_html_files(root: &Path, skip: Option<&Path>) -> Vec<PathBuf> {
    let mut pages: Vec<PathBuf> = WalkDir::new(root)
        .max_depth(MAX_SCAN_DEPTH)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e, skip))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_html_path(e.path()))
        .map(|e| e.into_path())
        .collect();

    pages.sort();
    pages
}

fn is_skipped_dir(entry: &DirEntry, skip: Option<&Path>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    if skip.is_some_and(|s| entry.path() == s) {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_kit_core::DEFAULT_ENTRIES;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a site directory containing the given files
    fn create_site(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, b"<!DOCTYPE html>").unwrap();
        }
        dir
    }

    #[test]
    fn test_validate_all_present() {
        let files: Vec<&str> = DEFAULT_ENTRIES.iter().map(|(_, p)| *p).collect();
        let dir = create_site(&files);
        let registry =
            EntryPointRegistry::new(dir.path(), DEFAULT_ENTRIES.iter().copied()).unwrap();

        let report = validate_registry(&registry, None);
        assert!(report.is_ok(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
        assert_eq!(report.info.len(), DEFAULT_ENTRIES.len());
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = create_site(&["index.html"]);
        let registry = EntryPointRegistry::new(
            dir.path(),
            [("main", "index.html"), ("tech", "tech.html")],
        )
        .unwrap();

        let report = validate_registry(&registry, None);
        assert!(!report.is_ok());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'tech'"));
        assert!(report.errors[0].contains("not found"));
    }

    #[test]
    fn test_validate_directory_entry() {
        let dir = create_site(&[]);
        fs::create_dir(dir.path().join("pages.html")).unwrap();
        let registry = EntryPointRegistry::new(dir.path(), [("main", "pages.html")]).unwrap();

        let report = validate_registry(&registry, None);
        assert!(report.errors[0].contains("not a regular file"));
    }

    #[test]
    fn test_validate_warns_on_non_html() {
        let dir = create_site(&["index.html", "app.js"]);
        let registry = EntryPointRegistry::new(
            dir.path(),
            [("main", "index.html"), ("app", "app.js")],
        )
        .unwrap();

        let report = validate_registry(&registry, None);
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("not an HTML file"));
    }

    #[test]
    fn test_validate_reports_orphan_pages() {
        let dir = create_site(&["index.html", "tech.html", "pages/about.html"]);
        let registry = EntryPointRegistry::new(dir.path(), [("main", "index.html")]).unwrap();

        let report = validate_registry(&registry, None);
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings.iter().all(|w| w.starts_with("Orphan page")));
        assert!(report.warnings[0].contains("about.html"));
        assert!(report.warnings[1].contains("tech.html"));
    }

    #[test]
    fn test_scan_skips_hidden_dependency_and_output_dirs() {
        let dir = create_site(&[
            "index.html",
            ".cache/stale.html",
            "node_modules/pkg/readme.html",
            "dist/index.html",
        ]);
        let registry = EntryPointRegistry::new(dir.path(), [("main", "index.html")]).unwrap();

        let report = validate_registry(&registry, Some(Path::new("dist")));
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_scan_respects_max_depth() {
        let dir = create_site(&["a/b/shallow.html", "a/b/c/d/deep.html"]);
        let pages = scan_html_files(dir.path(), None);
        assert_eq!(pages, vec![dir.path().join("a/b/shallow.html")]);
    }
}
