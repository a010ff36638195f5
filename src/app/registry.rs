//! Module registry backed by module descriptor files.
//!
//! Modern installs declare each module in `etc/module.xml`:
//!
//! ```xml
//! <module name="Vendor_Module" setup_version="1.2.0"/>
//! ```
//!
//! Legacy installs carry the version inside the module's `etc/config.xml`:
//!
//! ```xml
//! <modules><Vendor_Module><version>1.2.0</version></Vendor_Module></modules>
//! ```
//!
//! Descriptors are matched with regular expressions rather than a full XML
//! parser; only those two shapes are needed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::audit::{ModuleEntry, ModuleRegistry};
use crate::error::Result;
use crate::locator::Generation;

static MODULE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<module\b[^>]*>").expect("MODULE_TAG_REGEX must compile")
});

static NAME_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bname\s*=\s*"([^"]*)""#).expect("NAME_ATTR_REGEX must compile")
});

static SETUP_VERSION_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bsetup_version\s*=\s*"([^"]*)""#)
        .expect("SETUP_VERSION_ATTR_REGEX must compile")
});

static LEGACY_MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<modules>\s*<([A-Za-z0-9_]+)>.*?<version>\s*([^<]*?)\s*</version>")
        .expect("LEGACY_MODULE_REGEX must compile")
});

/// Code pools scanned for legacy modules, lowest priority first.
const LEGACY_CODE_POOLS: [&str; 3] = ["core", "community", "local"];

/// Registry reading module descriptors below an installation root.
///
/// Modules are returned sorted by name. When a module is declared twice,
/// the later source wins (`app/code` over `vendor`, `local` over `core`).
#[derive(Debug, Clone)]
pub struct XmlModuleRegistry {
    root: PathBuf,
    generation: Generation,
}

impl XmlModuleRegistry {
    /// Create a registry for the installation at `root`.
    pub fn new(root: &Path, generation: Generation) -> Self {
        Self {
            root: root.to_path_buf(),
            generation,
        }
    }

    /// Descriptor files in priority order.
    pub fn descriptor_files(&self) -> Vec<PathBuf> {
        match self.generation {
            Generation::Gen2 => {
                let mut files = find_descriptors(&self.root.join("vendor"), 4, "module.xml");
                files.extend(find_descriptors(
                    &self.root.join("app").join("code"),
                    4,
                    "module.xml",
                ));
                files
            }
            Generation::Gen1 => LEGACY_CODE_POOLS
                .iter()
                .flat_map(|pool| {
                    find_descriptors(
                        &self.root.join("app").join("code").join(pool),
                        4,
                        "config.xml",
                    )
                })
                .collect(),
        }
    }
}

impl ModuleRegistry for XmlModuleRegistry {
    fn modules(&self) -> Result<Vec<ModuleEntry>> {
        let mut modules = BTreeMap::new();

        for file in self.descriptor_files() {
            // One broken descriptor must not hide the other modules.
            let bytes = match fs::read(&file) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Skipping unreadable descriptor {}: {}", file.display(), e);
                    continue;
                }
            };
            let content = String::from_utf8_lossy(&bytes);
            let parsed = match self.generation {
                Generation::Gen2 => parse_module_xml(&content),
                Generation::Gen1 => parse_legacy_config_xml(&content),
            };

            if let Some(entry) = parsed {
                tracing::debug!(
                    "Module {} declares '{}' in {}",
                    entry.name,
                    entry.declared_version,
                    file.display()
                );
                modules.insert(entry.name.clone(), entry);
            }
        }

        Ok(modules.into_values().collect())
    }
}

/// Parse a modern `etc/module.xml`.
pub fn parse_module_xml(content: &str) -> Option<ModuleEntry> {
    let tag = MODULE_TAG_REGEX.find(content)?.as_str();
    let name = NAME_ATTR_REGEX.captures(tag)?.get(1)?.as_str();
    let version = SETUP_VERSION_ATTR_REGEX
        .captures(tag)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str());

    Some(ModuleEntry::new(name, version))
}

/// Parse a legacy `etc/config.xml`.
pub fn parse_legacy_config_xml(content: &str) -> Option<ModuleEntry> {
    let caps = LEGACY_MODULE_REGEX.captures(content)?;
    Some(ModuleEntry::new(&caps[1], &caps[2]))
}

/// Files named `file_name` exactly `depth` levels below `base`, in an
/// `etc` directory, sorted by path.
fn find_descriptors(base: &Path, depth: usize, file_name: &str) -> Vec<PathBuf> {
    if !base.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(base)
        .min_depth(depth)
        .max_depth(depth)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
        .filter(|entry| {
            entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .is_some_and(|dir| dir == "etc")
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn parses_module_xml_with_version() {
        let xml = r#"<?xml version="1.0"?>
<config xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <module name="Foo_Bar" setup_version="2.0.1">
        <sequence><module name="Magento_Store"/></sequence>
    </module>
</config>"#;

        assert_eq!(
            parse_module_xml(xml),
            Some(ModuleEntry::new("Foo_Bar", "2.0.1"))
        );
    }

    #[test]
    fn module_xml_without_version_is_empty() {
        let xml = r#"<config><module name="Foo_Bar"/></config>"#;
        assert_eq!(parse_module_xml(xml), Some(ModuleEntry::new("Foo_Bar", "")));
    }

    #[test]
    fn module_xml_without_module_is_none() {
        assert_eq!(parse_module_xml("<config/>"), None);
    }

    #[test]
    fn parses_legacy_config_xml() {
        let xml = r#"<config>
    <modules>
        <Mage_Catalog>
            <version> 1.6.0.0.19 </version>
        </Mage_Catalog>
    </modules>
</config>"#;

        assert_eq!(
            parse_legacy_config_xml(xml),
            Some(ModuleEntry::new("Mage_Catalog", "1.6.0.0.19"))
        );
    }

    #[test]
    fn gen2_registry_scans_vendor_and_app_code() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("vendor/acme/module-b/etc/module.xml"),
            r#"<config><module name="Acme_B" setup_version="1.0.0"/></config>"#,
        );
        write(
            &temp.path().join("app/code/Acme/A/etc/module.xml"),
            r#"<config><module name="Acme_A" setup_version="0.1.0"/></config>"#,
        );
        write(
            &temp.path().join("app/code/Acme/A/etc/di.xml"),
            "<config/>",
        );

        let registry = XmlModuleRegistry::new(temp.path(), Generation::Gen2);
        let modules = registry.modules().unwrap();

        assert_eq!(
            modules,
            vec![
                ModuleEntry::new("Acme_A", "0.1.0"),
                ModuleEntry::new("Acme_B", "1.0.0")
            ]
        );
    }

    #[test]
    fn app_code_overrides_vendor() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("vendor/acme/module-a/etc/module.xml"),
            r#"<module name="Acme_A" setup_version="1.0.0"/>"#,
        );
        write(
            &temp.path().join("app/code/Acme/A/etc/module.xml"),
            r#"<module name="Acme_A" setup_version="1.1.0"/>"#,
        );

        let modules = XmlModuleRegistry::new(temp.path(), Generation::Gen2)
            .modules()
            .unwrap();
        assert_eq!(modules, vec![ModuleEntry::new("Acme_A", "1.1.0")]);
    }

    #[test]
    fn gen1_registry_scans_code_pools() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("app/code/core/Mage/Cms/etc/config.xml"),
            "<config><modules><Mage_Cms><version>1.6.0.0.2</version></Mage_Cms></modules></config>",
        );
        write(
            &temp.path().join("app/code/local/Acme/Shop/etc/config.xml"),
            "<config><modules><Acme_Shop><version>0.3.0</version></Acme_Shop></modules></config>",
        );

        let modules = XmlModuleRegistry::new(temp.path(), Generation::Gen1)
            .modules()
            .unwrap();
        assert_eq!(
            modules,
            vec![
                ModuleEntry::new("Acme_Shop", "0.3.0"),
                ModuleEntry::new("Mage_Cms", "1.6.0.0.2")
            ]
        );
    }

    #[test]
    fn non_utf8_descriptor_does_not_hide_other_modules() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("app/code/Acme/A/etc/module.xml"),
            r#"<config><module name="Acme_A" setup_version="0.1.0"/></config>"#,
        );
        let latin1 = temp.path().join("vendor/acme/module-b/etc/module.xml");
        fs::create_dir_all(latin1.parent().unwrap()).unwrap();
        let mut content = b"<!-- Copyright \xA9 Acme -->\n".to_vec();
        content.extend_from_slice(br#"<config><module name="Acme_B" setup_version="1.0.0"/></config>"#);
        fs::write(&latin1, content).unwrap();

        let modules = XmlModuleRegistry::new(temp.path(), Generation::Gen2)
            .modules()
            .unwrap();

        assert_eq!(
            modules,
            vec![
                ModuleEntry::new("Acme_A", "0.1.0"),
                ModuleEntry::new("Acme_B", "1.0.0")
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_descriptor_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("app/code/Acme/A/etc/module.xml"),
            r#"<config><module name="Acme_A" setup_version="0.1.0"/></config>"#,
        );
        let locked = temp.path().join("app/code/Acme/B/etc/module.xml");
        write(
            &locked,
            r#"<config><module name="Acme_B" setup_version="1.0.0"/></config>"#,
        );
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the file.
        if fs::read(&locked).is_ok() {
            return;
        }

        let modules = XmlModuleRegistry::new(temp.path(), Generation::Gen2)
            .modules()
            .unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(modules, vec![ModuleEntry::new("Acme_A", "0.1.0")]);
    }

    #[test]
    fn missing_code_dirs_give_empty_registry() {
        let temp = TempDir::new().unwrap();
        let registry = XmlModuleRegistry::new(temp.path(), Generation::Gen2);
        assert!(registry.modules().unwrap().is_empty());
    }
}
