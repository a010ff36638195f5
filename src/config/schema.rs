//! Configuration schema for `mageroot.yaml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagerootConfig {
    /// Installation discovery settings
    pub locator: LocatorSettings,

    /// Version audit settings
    pub audit: AuditSettings,
}

/// Settings for installation discovery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorSettings {
    /// Extra folders searched before the ancestors of the start directory.
    /// Appended after any `--root-dir` values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_dirs: Vec<PathBuf>,
}

/// Settings for `compare-versions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Skip the data version comparison
    #[serde(skip_serializing_if = "is_false")]
    pub ignore_data: bool,

    /// Default output format (csv, json, yaml)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Ledger snapshot path, relative to the installation root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<PathBuf>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_gives_defaults() {
        let config: MagerootConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, MagerootConfig::default());
        assert!(!config.audit.ignore_data);
    }

    #[test]
    fn parses_full_config() {
        let config: MagerootConfig = serde_yaml::from_str(
            r#"
locator:
  extra_dirs: [/srv/shop, htdocs]
audit:
  ignore_data: true
  format: json
  ledger: var/ledger.yaml
"#,
        )
        .unwrap();

        assert_eq!(
            config.locator.extra_dirs,
            vec![PathBuf::from("/srv/shop"), PathBuf::from("htdocs")]
        );
        assert!(config.audit.ignore_data);
        assert_eq!(config.audit.format.as_deref(), Some("json"));
        assert_eq!(config.audit.ledger, Some(PathBuf::from("var/ledger.yaml")));
    }

    #[test]
    fn default_serializes_to_empty_sections() {
        let yaml = serde_yaml::to_string(&MagerootConfig::default()).unwrap();
        assert!(!yaml.contains("ignore_data"));
    }
}
