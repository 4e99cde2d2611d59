//! Where table bytes come from.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

/// Reads raw table resources by name.
pub trait TableSource: Send + Sync {
    /// Returns the full contents of `resource`.
    fn read(&self, resource: &str) -> io::Result<Vec<u8>>;
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn read(&self, resource: &str) -> io::Result<Vec<u8>> {
        (**self).read(resource)
    }
}

impl<T: TableSource + ?Sized> TableSource for Box<T> {
    fn read(&self, resource: &str) -> io::Result<Vec<u8>> {
        (**self).read(resource)
    }
}

impl<T: TableSource + ?Sized> TableSource for std::sync::Arc<T> {
    fn read(&self, resource: &str) -> io::Result<Vec<u8>> {
        (**self).read(resource)
    }
}

/// Reads resources as files below a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTableSource {
    root: PathBuf,
}

impl DirTableSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TableSource for DirTableSource {
    fn read(&self, resource: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(resource))
    }
}

/// In-memory resources, keyed by resource name.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct MemoryTableSource {
    tables: HashMap<String, Vec<u8>>,
}

impl MemoryTableSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, replacing any previous contents.
    #[must_use]
    pub fn with_table(mut self, resource: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(resource, bytes);
        self
    }

    pub fn insert(&mut self, resource: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.tables.insert(resource.into(), bytes.into());
    }
}

impl fmt::Debug for MemoryTableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("MemoryTableSource")
            .field("tables", &names)
            .finish()
    }
}

impl TableSource for MemoryTableSource {
    fn read(&self, resource: &str) -> io::Result<Vec<u8>> {
        self.tables.get(resource).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory table named {resource}"),
            )
        })
    }
}

/// Builds a revision-specific resource name from a base name and suffix.
///
/// The suffix goes before the file extension; an empty suffix (the current
/// revision) yields the base name unchanged.
#[must_use]
pub fn resource_name(base: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return base.to_string();
    }
    let file_start = base.rfind('/').map_or(0, |idx| idx + 1);
    match base[file_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let split = file_start + dot;
            format!("{}{suffix}{}", &base[..split], &base[split..])
        }
        _ => format!("{base}{suffix}"),
    }
}
