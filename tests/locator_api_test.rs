//! Integration tests for installation discovery.

use mageroot::diagnostics::{NullSink, RecordingSink};
use mageroot::locator::{Generation, Locator};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn install(root: &Path, marker: &str) {
    fs::create_dir_all(root.join("app")).unwrap();
    fs::write(root.join("app").join(marker), "<?php").unwrap();
}

#[test]
fn stop_file_target_beats_shallower_ancestor() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "Mage.php");
    let project = temp.path().join("project");
    install(&project.join("web"), "bootstrap.php");
    fs::write(project.join(".mageroot"), "web").unwrap();

    let found = Locator::new(&NullSink).locate(&project, &[]).unwrap();

    assert_eq!(found.generation, Generation::Gen2);
    assert!(found.root.ends_with("web"));
}

#[test]
fn modman_basedir_points_to_sibling() {
    let temp = TempDir::new().unwrap();
    install(&temp.path().join("htdocs"), "Mage.php");
    let module = temp.path().join(".modman").join("Some_Module");
    fs::create_dir_all(&module).unwrap();
    fs::write(temp.path().join(".modman").join(".basedir"), "htdocs\n").unwrap();

    let sink = RecordingSink::new();
    let found = Locator::new(&sink).locate(&module, &[]).unwrap();

    assert_eq!(found.generation, Generation::Gen1);
    assert!(sink.has_event("Found modman .basedir file with content htdocs"));
}

#[test]
fn missing_extra_dirs_are_skipped() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "autoload.php");
    let missing = temp.path().join("does-not-exist");

    let sink = RecordingSink::new();
    let found = Locator::new(&sink)
        .locate(temp.path(), std::slice::from_ref(&missing))
        .unwrap();

    assert_eq!(found.generation, Generation::Gen2);
    assert!(sink.has_event("is not readable. Skip."));
}

#[test]
fn no_app_folder_means_no_installation() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let mut locator = Locator::new(&NullSink);
    assert!(locator.locate(&nested, &[]).is_none());
    assert!(!locator.stop_file_found());
    assert!(!locator.search_path().is_empty());
}

#[test]
fn enterprise_edition_is_flagged() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "bootstrap.php");
    fs::create_dir_all(temp.path().join("vendor/magento/magento2-ee-base")).unwrap();

    let found = Locator::new(&NullSink).locate(temp.path(), &[]).unwrap();
    assert!(found.is_enterprise);
}
