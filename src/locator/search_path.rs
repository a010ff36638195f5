//! Candidate directory list for installation discovery.
//!
//! A [`SearchPath`] starts as the ancestor chain of the starting directory
//! and only ever grows: the stop-file pass and the modman pass each consume
//! a snapshot and return a new, longer list. Searching walks the final list
//! back to front, so the most recently appended overrides win over plain
//! ancestors.

use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::DiagnosticsSink;

/// Name of the modman base-directory file.
pub const MODMAN_BASEDIR_FILE: &str = ".basedir";

/// Ordered list of directories to search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    folders: Vec<PathBuf>,
}

/// Result of the stop-file pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopFileScan {
    /// The extended search path.
    pub path: SearchPath,
    /// Directory holding the last stop file seen, if any.
    pub folder: Option<PathBuf>,
}

impl SearchPath {
    /// Build the ancestor chain of `start`, shallowest first.
    ///
    /// `/a/b/c` becomes `/a`, `/a/b`, `/a/b/c`. The bare filesystem root and
    /// empty segments are dropped.
    pub fn from_start(start: &Path) -> Self {
        let mut folders: Vec<PathBuf> = start
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty() && p.parent().is_some())
            .map(Path::to_path_buf)
            .collect();
        folders.reverse();

        Self { folders }
    }

    /// Create a search path from an explicit list.
    pub fn from_folders(folders: Vec<PathBuf>) -> Self {
        Self { folders }
    }

    /// Folders in insertion order.
    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    /// Folders in search order (last appended first).
    pub fn search_order(&self) -> impl Iterator<Item = &PathBuf> {
        self.folders.iter().rev()
    }

    /// Number of folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Scan every folder for a stop file, deepest first.
    ///
    /// Each stop file with non-empty content appends `<folder>/<content>`.
    /// Appended folders are not scanned again in this pass.
    pub fn with_stop_files(self, stop_file: &str, sink: &dyn DiagnosticsSink) -> StopFileScan {
        let mut extended = self.folders.clone();
        let mut found_in = None;

        for folder in self.folders.iter().rev() {
            let Some(content) = read_signal_file(folder, stop_file, sink) else {
                continue;
            };

            sink.record(&format!(
                "Found stopfile '{}' file with content {}",
                stop_file, content
            ));
            found_in = Some(folder.clone());

            if !content.is_empty() {
                extended.push(folder.join(&content));
            }
        }

        StopFileScan {
            path: Self { folders: extended },
            folder: found_in,
        }
    }

    /// Scan every folder for a modman `.basedir` file, deepest first.
    ///
    /// Non-empty content `c` appends `<folder>/../<c>`.
    pub fn with_modman(self, sink: &dyn DiagnosticsSink) -> Self {
        let mut extended = self.folders.clone();

        for folder in self.folders.iter().rev() {
            let Some(content) = read_signal_file(folder, MODMAN_BASEDIR_FILE, sink) else {
                continue;
            };

            sink.record(&format!(
                "Found modman .basedir file with content {}",
                content
            ));

            if !content.is_empty() {
                extended.push(folder.join("..").join(&content));
            }
        }

        Self { folders: extended }
    }

    /// Append caller-supplied folders unmodified.
    pub fn with_extra(mut self, extra: &[PathBuf]) -> Self {
        self.folders.extend(extra.iter().cloned());
        self
    }
}

/// Check that `folder` is a directory we can list.
pub fn is_readable_dir(folder: &Path) -> bool {
    fs::read_dir(folder).is_ok()
}

/// Read and trim `<folder>/<name>` if the folder is readable and the file exists.
fn read_signal_file(folder: &Path, name: &str, sink: &dyn DiagnosticsSink) -> Option<String> {
    if !is_readable_dir(folder) {
        sink.record(&format!(
            "Folder {} is not readable. Skip.",
            folder.display()
        ));
        return None;
    }

    let file = folder.join(name);
    if !file.is_file() {
        return None;
    }

    match fs::read_to_string(&file) {
        Ok(content) => Some(content.trim().to_string()),
        Err(e) => {
            sink.record(&format!("Could not read {}: {}", file.display(), e));
            None
        }
    }
}
