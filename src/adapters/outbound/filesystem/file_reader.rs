use crate::license_compliance::domain::{CdxBom, CdxComponent, LicenseComplianceConfig};
use crate::ports::outbound::{PolicyConfigReader, SbomDocumentReader};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both SbomDocumentReader and PolicyConfigReader
/// ports, decoding CycloneDX documents and license policy files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after the symlink, file type and size checks pass
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_readable_file(path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl SbomDocumentReader for FileSystemReader {
    fn read_components(&self, document_path: &Path) -> Result<Vec<CdxComponent>> {
        if !document_path.exists() {
            return Err(SbomError::DocumentNotFound {
                path: document_path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(document_path)?;
        log::debug!(
            "Read {} byte(s) from {}",
            content.len(),
            document_path.display()
        );

        let bom: CdxBom =
            serde_json::from_str(&content).map_err(|e| SbomError::DocumentParseError {
                path: document_path.to_path_buf(),
                details: e.to_string(),
            })?;
        log::debug!(
            "Decoded `{}` document (specVersion `{}`)",
            bom.bom_format,
            bom.spec_version
        );

        bom.components.ok_or_else(|| {
            SbomError::NoComponents {
                path: document_path.to_path_buf(),
            }
            .into()
        })
    }
}

impl PolicyConfigReader for FileSystemReader {
    fn read_policy_config(&self, config_path: &Path) -> Result<LicenseComplianceConfig> {
        if !config_path.exists() {
            return Err(SbomError::PolicyConfigNotFound {
                path: config_path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(config_path)?;
        let config: LicenseComplianceConfig =
            serde_json::from_str(&content).map_err(|e| SbomError::PolicyConfigParseError {
                path: config_path.to_path_buf(),
                details: e.to_string(),
            })?;
        log::debug!(
            "Decoded {} policy entry(ies) and {} annotation(s) from {}",
            config.policy_list.len(),
            config.annotations.len(),
            config_path.display()
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_components_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "bom.json",
            r#"{
                "bomFormat": "CycloneDX",
                "specVersion": "1.4",
                "components": [
                    {
                        "name": "serde",
                        "version": "1.0.200",
                        "purl": "pkg:cargo/serde@1.0.200",
                        "licenses": [{"expression": "MIT OR Apache-2.0"}]
                    },
                    {"name": "no-licenses"}
                ]
            }"#,
        );

        let components = FileSystemReader::new().read_components(&path).unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].name, "serde");
        assert_eq!(
            components[0].licenses[0].expression.as_deref(),
            Some("MIT OR Apache-2.0")
        );
        assert!(components[1].licenses.is_empty());
    }

    #[test]
    fn test_read_components_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_components(&temp_dir.path().join("missing.json"));
        let err_string = result.unwrap_err().to_string();
        assert!(err_string.contains("SBOM document not found"));
    }

    #[test]
    fn test_read_components_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "bom.json", "{ not json");
        let err_string = FileSystemReader::new()
            .read_components(&path)
            .unwrap_err()
            .to_string();
        assert!(err_string.contains("Failed to parse SBOM document"));
    }

    #[test]
    fn test_read_components_missing_components() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "bom.json", r#"{"bomFormat": "CycloneDX"}"#);
        let err_string = FileSystemReader::new()
            .read_components(&path)
            .unwrap_err()
            .to_string();
        assert!(err_string.contains("No components found"));
    }

    #[test]
    fn test_read_components_empty_array_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "bom.json", r#"{"components": []}"#);
        assert!(FileSystemReader::new().read_components(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_policy_config_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "license.json",
            r#"{
                "policies": [
                    {"id": "MIT", "family": "MIT", "name": "MIT License", "usagePolicy": "allow"},
                    {"family": "GPL", "usagePolicy": "deny", "children": ["GPL-2.0", "GPL-3.0"],
                     "annotationRefs": ["COPYLEFT"]}
                ],
                "annotations": {"COPYLEFT": "Strong copyleft license"}
            }"#,
        );

        let config = FileSystemReader::new().read_policy_config(&path).unwrap();
        assert_eq!(config.policy_list.len(), 2);
        assert_eq!(config.policy_list[0].usage_policy, "allow");
        assert!(config.policy_list[1].is_family_record());
        assert_eq!(config.policy_list[1].children, vec!["GPL-2.0", "GPL-3.0"]);
        assert_eq!(config.annotations["COPYLEFT"], "Strong copyleft license");
    }

    #[test]
    fn test_read_policy_config_unknown_usage_still_decodes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "license.json",
            r#"{"policies": [{"id": "Foo", "family": "Foo", "usagePolicy": "needs-review"}]}"#,
        );
        let config = FileSystemReader::new().read_policy_config(&path).unwrap();
        assert_eq!(config.policy_list[0].usage_policy, "needs-review");
    }

    #[test]
    fn test_read_policy_config_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err_string = FileSystemReader::new()
            .read_policy_config(&temp_dir.path().join("license.json"))
            .unwrap_err()
            .to_string();
        assert!(err_string.contains("License policy file not found"));
    }

    #[test]
    fn test_read_policy_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "license.json", r#"{"policies": {}}"#);
        let err_string = FileSystemReader::new()
            .read_policy_config(&path)
            .unwrap_err()
            .to_string();
        assert!(err_string.contains("Failed to parse license policy file"));
    }
}
