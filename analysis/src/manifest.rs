//! Optional project manifest (`package.json`) reading.
//!
//! The manifest only feeds the external-dependency map and the
//! architecture classifier's "has a manifest" evidence. Any failure here
//! degrades to "no manifest"; it is never a scan error.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;

/// Manifest filename probed at the scan root.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of the manifest the analyzer cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl ProjectManifest {
    /// Merge runtime and dev dependencies into one name → version map.
    /// Runtime entries win on collision.
    pub fn external_dependencies(&self) -> BTreeMap<String, String> {
        let mut merged = self.dependencies.clone();
        for (name, version) in &self.dev_dependencies {
            merged.entry(name.clone()).or_insert_with(|| version.clone());
        }
        merged
    }
}

/// Read the manifest at `root`, if any. Read and parse failures are logged
/// and reported as absence.
pub fn read_manifest(root: &Path) -> Option<ProjectManifest> {
    let path = root.join(MANIFEST_FILE);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return None,
        Err(source) => {
            log::warn!(
                "{}",
                ManifestError::Read {
                    path: path.display().to_string(),
                    source,
                }
            );
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(manifest) => Some(manifest),
        Err(source) => {
            log::warn!(
                "{}",
                ManifestError::Parse {
                    path: path.display().to_string(),
                    source,
                }
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest_absent() {
        let temp = TempDir::new().unwrap();
        assert!(read_manifest(temp.path()).is_none());
    }

    #[test]
    fn test_read_manifest_invalid_json_is_absent() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "{ not json").unwrap();
        assert!(read_manifest(temp.path()).is_none());
    }

    #[test]
    fn test_read_manifest_parses_dependency_maps() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{
                "name": "demo",
                "dependencies": { "react": "^18.2.0" },
                "devDependencies": { "jest": "^29.0.0" }
            }"#,
        )
        .unwrap();

        let manifest = read_manifest(temp.path()).expect("manifest should parse");
        assert_eq!(manifest.name.as_deref(), Some("demo"));
        assert_eq!(manifest.dependencies["react"], "^18.2.0");
        assert_eq!(manifest.dev_dependencies["jest"], "^29.0.0");
    }

    #[test]
    fn test_read_manifest_missing_maps_default_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), r#"{"name": "demo"}"#).unwrap();

        let manifest = read_manifest(temp.path()).expect("manifest should parse");
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
    }

    #[test]
    fn test_external_dependencies_merges_with_runtime_priority() {
        let manifest = ProjectManifest {
            name: None,
            dependencies: BTreeMap::from([("react".to_string(), "^18.0.0".to_string())]),
            dev_dependencies: BTreeMap::from([
                ("react".to_string(), "^17.0.0".to_string()),
                ("jest".to_string(), "^29.0.0".to_string()),
            ]),
        };

        let merged = manifest.external_dependencies();
        assert_eq!(merged["react"], "^18.0.0");
        assert_eq!(merged["jest"], "^29.0.0");
    }
}
