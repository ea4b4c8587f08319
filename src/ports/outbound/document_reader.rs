use crate::license_compliance::domain::CdxComponent;
use crate::shared::Result;
use std::path::Path;

/// SbomDocumentReader port for reading SBOM documents
///
/// This port abstracts decoding of a CycloneDX document into the typed
/// component records the license engine works on.
pub trait SbomDocumentReader {
    /// Reads the top-level components of an SBOM document
    ///
    /// # Arguments
    /// * `document_path` - Path to the CycloneDX JSON document
    ///
    /// # Returns
    /// The document's components in document order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document does not exist or cannot be read
    /// - The document is not valid CycloneDX JSON
    /// - The document has no `components` array
    fn read_components(&self, document_path: &Path) -> Result<Vec<CdxComponent>>;
}
