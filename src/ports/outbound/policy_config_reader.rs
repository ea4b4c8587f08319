use crate::license_compliance::domain::LicenseComplianceConfig;
use crate::shared::Result;
use std::path::Path;

/// PolicyConfigReader port for loading the license policy configuration
pub trait PolicyConfigReader {
    /// Reads and decodes a license policy file
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not valid JSON.
    /// Individual policy entries are not validated here.
    fn read_policy_config(&self, config_path: &Path) -> Result<LicenseComplianceConfig>;
}
