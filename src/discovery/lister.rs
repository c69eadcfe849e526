//! Directory listing capability for the scanner.
//!
//! The scanner only ever needs three questions answered about the file
//! system: is this a directory, which directories sit immediately inside
//! it, and which files. Putting those behind a trait keeps classification
//! testable against a fake tree without touching disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Listing capability the scanner runs on.
pub trait DirLister {
    /// Immediate subdirectories of `path`, in no particular order.
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Immediate regular files of `path`, in no particular order.
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Production lister backed by the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsLister;

impl OsLister {
    fn list_entries(&self, path: &Path, want_dirs: bool) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_dir() == want_dirs {
                entries.push(entry.path().to_path_buf());
            }
        }
        Ok(entries)
    }
}

impl DirLister for OsLister {
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.list_entries(path, true)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.list_entries(path, false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
