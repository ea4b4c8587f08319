use std::path::PathBuf;

/// LicenseListRequest - Request DTO for the license listing use case
#[derive(Debug, Clone)]
pub struct LicenseListRequest {
    /// Path to the CycloneDX JSON document
    pub document_path: PathBuf,
    /// Resolve each record to a policy instead of listing raw choices
    pub summary: bool,
}

impl LicenseListRequest {
    pub fn new(document_path: PathBuf, summary: bool) -> Self {
        Self {
            document_path,
            summary,
        }
    }
}
