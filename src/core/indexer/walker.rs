//! Content tree walker with allow-list pruning.
//!
//! Descends only into the root and into directories whose basename
//! is allow-listed; everything else is pruned with its whole subtree.
//! Unlike a best-effort crawler, any walk error aborts the run.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::ContentConfig;
use crate::core::error::{DocSearchError, Result};

/// Enumerates eligible markup files under a content root
#[derive(Debug, Clone)]
pub struct ContentWalker {
    /// Directory basenames that may be entered
    subfolders: Vec<String>,

    /// Filenames that are never returned
    exclude_files: Vec<String>,

    /// Accepted extensions (without the dot)
    extensions: Vec<String>,
}

impl ContentWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `subfolders` - Directory basenames the walk may descend into
    /// * `exclude_files` - Filenames to skip
    /// * `extensions` - Markup extensions to accept, e.g. `md`
    pub fn new(subfolders: Vec<String>, exclude_files: Vec<String>, extensions: Vec<String>) -> Self {
        Self {
            subfolders,
            exclude_files,
            extensions,
        }
    }

    /// Create a walker from the `[content]` configuration section
    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(
            config.subfolders.clone(),
            config.exclude_files.clone(),
            config.extensions.clone(),
        )
    }

    /// Collect all eligible files under `root`
    ///
    /// Entries are visited in file-name order within each directory,
    /// so the result is stable for an unchanged tree.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if `root` is not a directory and
    /// `WalkFailed` for any unreadable directory or entry.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(DocSearchError::InvalidPath(format!(
                "Content root {} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_descend(e))
        {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            if self.is_eligible(entry.path()) {
                files.push(entry.path().to_path_buf());
            } else {
                tracing::trace!("Skipping {:?}", entry.path());
            }
        }

        Ok(files)
    }

    /// Directories are entered only at the root or when allow-listed.
    /// Files always pass; they are filtered by `is_eligible`.
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let allowed = entry
            .file_name()
            .to_str()
            .map(|name| self.subfolders.iter().any(|s| s == name))
            .unwrap_or(false);

        if !allowed {
            tracing::debug!("Pruning directory outside allow-list: {:?}", entry.path());
        }
        allowed
    }

    /// Check extension and exclusion list for a file path
    fn is_eligible(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if self.exclude_files.iter().any(|excluded| excluded == name) {
            tracing::debug!("Skipping excluded file: {:?}", path);
            return false;
        }

        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }
}
