use std::path::{Path, PathBuf};

/// The pages of the original multi-page site, in build order.
pub const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("main", "index.html"),
    ("tech", "tech.html"),
    ("media", "media.html"),
    ("music", "music.html"),
    ("hospitality", "hospitality.html"),
];

/// One buildable page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub name: String,
    /// Absolute location, already resolved against the registry root
    pub path: PathBuf,
    /// Normalized relative path as registered
    pub source: PathBuf,
}

impl EntryPoint {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the filename component of the page
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    pub fn is_html(&self) -> bool {
        is_html_path(&self.path)
    }
}

/// Build output settings from `[build]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
    pub manifest: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            manifest: PathBuf::from("entries.json"),
        }
    }
}

/// Case-insensitive `.html` / `.htm` check
pub fn is_html_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}
