use crate::error::{Error, Result};
use crate::types::EntryPoint;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Immutable, ordered set of named entry points for a multi-page build.
///
/// Built once through [`RegistryBuilder`] (or [`EntryPointRegistry::new`]
/// from a literal list) and only read afterwards, so it can be shared
/// across build workers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointRegistry {
    root: PathBuf,
    entries: Vec<EntryPoint>,
}

impl EntryPointRegistry {
    pub fn builder(root: impl Into<PathBuf>) -> Result<RegistryBuilder> {
        RegistryBuilder::new(root)
    }

    /// Build a registry from a literal `(name, relative_path)` list.
    ///
    /// The first invalid entry aborts construction; no partial registry
    /// is ever returned.
    pub fn new<I, N, P>(root: impl Into<PathBuf>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: AsRef<str>,
    {
        let mut builder = RegistryBuilder::new(root)?;
        for (name, path) in pairs {
            builder.register(name.as_ref(), path.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Same as [`EntryPointRegistry::new`], rooted at the process working directory.
    pub fn from_current_dir<I, N, P>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: AsRef<str>,
    {
        let root = std::env::current_dir()?;
        Self::new(root, pairs)
    }

    /// Resolved `(name, absolute_path)` pairs in registration order.
    pub fn resolve_all(&self) -> Vec<(&str, &Path)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.path.as_path()))
            .collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[EntryPoint] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&EntryPoint> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as an ordered `name -> absolute path` map, the shape a
/// bundler's `input` option takes.
impl Serialize for EntryPointRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.path)?;
        }
        map.end()
    }
}

/// Mutable construction phase of an [`EntryPointRegistry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    root: PathBuf,
    entries: Vec<EntryPoint>,
    names: HashSet<String>,
}

impl RegistryBuilder {
    /// A relative `root` is made absolute against the working directory,
    /// so every resolved entry path is absolute.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            root: std::path::absolute(root.into())?,
            entries: Vec::new(),
            names: HashSet::new(),
        })
    }

    /// Validate `name` and `relative_path`, resolve the path against the
    /// root, and append the entry.
    pub fn register(&mut self, name: &str, relative_path: &str) -> Result<&mut Self> {
        validate_name(name)?;

        if self.names.contains(name) {
            return Err(Error::DuplicateName {
                name: name.to_string(),
            });
        }

        let source = normalize_relative(relative_path, name)?;
        let path = self.root.join(&source);

        self.names.insert(name.to_string());
        self.entries.push(EntryPoint {
            name: name.to_string(),
            path,
            source,
        });

        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> EntryPointRegistry {
        EntryPointRegistry {
            root: self.root,
            entries: self.entries,
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.trim() != name {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Validate a user-supplied relative path and normalize it lexically.
///
/// Rejects:
/// - empty or blank paths
/// - absolute paths (leading `/`, Windows drive letters or UNC prefixes)
/// - `..` components that climb above the root
///
/// `.` components are dropped and `a/../b` collapses to `b`, so the
/// returned path never contains `.` or `..`.
///
/// ```text
/// normalize_relative("pages/tech.html", "tech")     → Ok("pages/tech.html")
/// normalize_relative("pages/../index.html", "main") → Ok("index.html")
/// normalize_relative("../secret.html", "main")      → Err(InvalidPath)
/// normalize_relative("/etc/passwd", "main")         → Err(InvalidPath)
/// ```
pub(crate) fn normalize_relative(path_str: &str, field: &str) -> Result<PathBuf> {
    let invalid = |reason: &str| Error::InvalidPath {
        field: field.to_string(),
        path: path_str.to_string(),
        reason: reason.to_string(),
    };

    if path_str.trim().is_empty() {
        return Err(invalid("empty path"));
    }

    let path = Path::new(path_str);
    if path.is_absolute() || path.has_root() {
        return Err(invalid("absolute paths not allowed, use a path relative to the project root"));
    }

    let mut normalized = PathBuf::new();
    let mut depth = 0usize;
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(invalid("path escapes the project root"));
                }
                normalized.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid(
                    "absolute paths not allowed, use a path relative to the project root",
                ));
            }
        }
    }

    if depth == 0 {
        return Err(invalid("path does not name a file"));
    }

    Ok(normalized)
}
