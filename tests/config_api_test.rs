//! Integration tests for config module public API.

use mageroot::config::{load_config, load_merged_config, MagerootConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn project_file_is_discovered() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("mageroot.yaml"),
        "audit:\n  ledger: /srv/ledger.json\n",
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    assert_eq!(config.audit.ledger, Some(PathBuf::from("/srv/ledger.json")));
}

#[test]
fn empty_override_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.yaml");
    fs::write(&path, "").unwrap();

    let config = load_config(temp.path(), Some(&path)).unwrap();
    assert_eq!(config, MagerootConfig::default());
}

#[test]
fn full_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.yaml");
    fs::write(
        &path,
        r#"
locator:
  extra_dirs:
    - htdocs
    - /opt/shop
audit:
  ignore_data: true
  format: yaml
  ledger: var/ledger.yaml
"#,
    )
    .unwrap();

    let config = load_config(temp.path(), Some(&path)).unwrap();

    assert_eq!(
        config.locator.extra_dirs,
        vec![PathBuf::from("htdocs"), PathBuf::from("/opt/shop")]
    );
    assert!(config.audit.ignore_data);
    assert_eq!(config.audit.format.as_deref(), Some("yaml"));
    assert_eq!(config.audit.ledger, Some(PathBuf::from("var/ledger.yaml")));
}

#[test]
fn unknown_keys_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mageroot.yaml");
    fs::write(&path, "audit:\n  format: csv\nextra: value\n").unwrap();

    let config = load_config(temp.path(), Some(&path)).unwrap();
    assert_eq!(config.audit.format.as_deref(), Some("csv"));
}
