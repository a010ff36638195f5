//! The installation locator.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILENAME;
use crate::diagnostics::DiagnosticsSink;

use super::markers::{classify, detect_enterprise, find_markers};
use super::search_path::{is_readable_dir, SearchPath};
use super::InstallationRoot;

/// Finds an installation root from a starting directory.
///
/// Besides the result of [`Locator::locate`], the locator remembers whether
/// a stop file was seen and where, plus the final search path, so callers
/// can explain a failed search.
pub struct Locator<'a> {
    config_filename: String,
    sink: &'a dyn DiagnosticsSink,
    stop_file_found: bool,
    stop_file_folder: Option<PathBuf>,
    search_path: SearchPath,
}

impl<'a> Locator<'a> {
    /// Create a locator reporting to `sink`.
    pub fn new(sink: &'a dyn DiagnosticsSink) -> Self {
        Self {
            config_filename: CONFIG_FILENAME.to_string(),
            sink,
            stop_file_found: false,
            stop_file_folder: None,
            search_path: SearchPath::default(),
        }
    }

    /// Use a different tool config filename (changes the stop file name).
    pub fn with_config_filename(mut self, filename: &str) -> Self {
        self.config_filename = filename.to_string();
        self
    }

    /// Name of the stop file: a dot followed by the config file stem.
    pub fn stop_file_name(&self) -> String {
        let stem = Path::new(&self.config_filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config_filename.clone());
        format!(".{}", stem)
    }

    /// Search for an installation starting at `start`.
    ///
    /// `extra` folders are searched before everything derived from `start`.
    /// Returns `None` when no candidate carries the installation markers.
    pub fn locate(&mut self, start: &Path, extra: &[PathBuf]) -> Option<InstallationRoot> {
        self.stop_file_found = false;
        self.stop_file_folder = None;

        let stop_file = self.stop_file_name();
        let scan = SearchPath::from_start(start).with_stop_files(&stop_file, self.sink);
        if scan.folder.is_some() {
            self.stop_file_found = true;
            self.stop_file_folder = scan.folder;
        }

        self.search_path = scan.path.with_modman(self.sink).with_extra(extra);

        for folder in self.search_path.search_order() {
            if !folder.is_dir() || !is_readable_dir(folder) {
                self.sink.record(&format!(
                    "Folder {} is not readable. Skip.",
                    folder.display()
                ));
                continue;
            }

            if let Some(found) = self.inspect(folder) {
                return Some(found);
            }
        }

        None
    }

    /// Whether the last search hit a stop file.
    pub fn stop_file_found(&self) -> bool {
        self.stop_file_found
    }

    /// Folder that held the stop file during the last search.
    pub fn stop_file_folder(&self) -> Option<&Path> {
        self.stop_file_folder.as_deref()
    }

    /// Final search path of the last search, in insertion order.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    fn inspect(&self, folder: &Path) -> Option<InstallationRoot> {
        self.sink.record(&format!(
            "Search for installation in folder {}",
            folder.display()
        ));

        let markers = find_markers(folder);
        let generation = classify(&markers)?;

        let root = std::path::absolute(folder).unwrap_or_else(|_| folder.to_path_buf());
        let is_enterprise = detect_enterprise(&root, generation);

        self.sink.record(&format!(
            "Found installation in folder {} ({})",
            root.display(),
            generation
        ));

        Some(InstallationRoot {
            root,
            generation,
            is_enterprise,
        })
    }
}
