use std::path::Path;
use sbom_inspect::prelude::*;

/// Mock SbomDocumentReader for testing
pub struct MockDocumentReader {
    pub components: Vec<CdxComponent>,
    pub should_fail: bool,
}

impl MockDocumentReader {
    pub fn new(components: Vec<CdxComponent>) -> Self {
        Self {
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            components: Vec::new(),
            should_fail: true,
        }
    }
}

impl SbomDocumentReader for MockDocumentReader {
    fn read_components(&self, _document_path: &Path) -> Result<Vec<CdxComponent>> {
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        Ok(self.components.clone())
    }
}
