//! Installation marker detection.
//!
//! A directory is an installation root when its `app` sub-directory holds
//! at least one of the bootstrap files in [`MARKER_FILES`]. The generation
//! is decided only by whether the legacy god-class file is among them.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// Files that mark `app/` as an application directory.
pub const MARKER_FILES: [&str; 3] = ["Mage.php", "bootstrap.php", "autoload.php"];

/// Bootstrap file that only the legacy generation ships.
pub const LEGACY_MARKER: &str = "Mage.php";

/// Major architectural family of an installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    /// Legacy generation, ships `app/Mage.php`.
    Gen1,
    /// Modern generation, no god class.
    Gen2,
}

impl Generation {
    /// Major version number of the generation.
    pub fn major_version(&self) -> u8 {
        match self {
            Self::Gen1 => 1,
            Self::Gen2 => 2,
        }
    }

    /// Short identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gen1 => "gen1",
            Self::Gen2 => "gen2",
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Marker files found directly inside `<folder>/app`.
///
/// Symlinks are followed. Returns an empty list when `app` is missing or
/// cannot be read.
pub fn find_markers(folder: &Path) -> Vec<String> {
    let app = folder.join("app");
    if !app.is_dir() {
        return Vec::new();
    }

    let Ok(entries) = fs::read_dir(&app) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| MARKER_FILES.contains(&name.as_str()))
        .collect()
}

/// Classify a set of found markers.
///
/// `None` when nothing was found. Otherwise `Gen1` iff the legacy marker is
/// present, else `Gen2`.
pub fn classify(markers: &[String]) -> Option<Generation> {
    if markers.is_empty() {
        return None;
    }

    if markers.iter().any(|m| m == LEGACY_MARKER) {
        Some(Generation::Gen1)
    } else {
        Some(Generation::Gen2)
    }
}

/// Best-effort enterprise edition check for an already classified root.
pub fn detect_enterprise(root: &Path, generation: Generation) -> bool {
    match generation {
        Generation::Gen1 => root.join("app/code/core/Enterprise").is_dir(),
        Generation::Gen2 => root.join("vendor/magento/magento2-ee-base").is_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn app_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        fs::create_dir_all(&app).unwrap();
        for f in files {
            fs::write(app.join(f), "<?php").unwrap();
        }
        temp
    }

    #[test]
    fn mage_php_classifies_as_gen1() {
        let temp = app_with(&["Mage.php", "bootstrap.php"]);
        let markers = find_markers(temp.path());
        assert_eq!(classify(&markers), Some(Generation::Gen1));
    }

    #[test]
    fn bootstrap_without_mage_classifies_as_gen2() {
        let temp = app_with(&["bootstrap.php", "autoload.php"]);
        let markers = find_markers(temp.path());
        assert_eq!(classify(&markers), Some(Generation::Gen2));
    }

    #[test]
    fn autoload_alone_is_enough() {
        let temp = app_with(&["autoload.php"]);
        assert_eq!(classify(&find_markers(temp.path())), Some(Generation::Gen2));
    }

    #[test]
    fn unrelated_files_are_ignored() {
        let temp = app_with(&["functions.php", "index.php"]);
        assert!(find_markers(temp.path()).is_empty());
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn missing_app_dir_has_no_markers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Mage.php"), "").unwrap();
        assert!(find_markers(temp.path()).is_empty());
    }

    #[test]
    fn directories_named_like_markers_do_not_count() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app").join("Mage.php")).unwrap();
        assert!(find_markers(temp.path()).is_empty());
    }

    #[test]
    fn nested_markers_are_not_found() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("app").join("etc");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("bootstrap.php"), "").unwrap();
        assert!(find_markers(temp.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_marker_is_followed() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real_bootstrap.php");
        fs::write(&real, "<?php").unwrap();
        let app = temp.path().join("app");
        fs::create_dir_all(&app).unwrap();
        std::os::unix::fs::symlink(&real, app.join("bootstrap.php")).unwrap();

        assert_eq!(find_markers(temp.path()), vec!["bootstrap.php".to_string()]);
    }

    #[test]
    fn enterprise_detection_per_generation() {
        let temp = TempDir::new().unwrap();
        assert!(!detect_enterprise(temp.path(), Generation::Gen1));

        fs::create_dir_all(temp.path().join("app/code/core/Enterprise")).unwrap();
        assert!(detect_enterprise(temp.path(), Generation::Gen1));
        assert!(!detect_enterprise(temp.path(), Generation::Gen2));

        fs::create_dir_all(temp.path().join("vendor/magento/magento2-ee-base")).unwrap();
        assert!(detect_enterprise(temp.path(), Generation::Gen2));
    }

    #[test]
    fn generation_accessors() {
        assert_eq!(Generation::Gen1.major_version(), 1);
        assert_eq!(Generation::Gen2.major_version(), 2);
        assert_eq!(Generation::Gen2.to_string(), "gen2");
    }
}
