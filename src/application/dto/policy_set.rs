use crate::license_compliance::domain::LicenseComplianceConfig;
use crate::license_compliance::services::PolicyIndex;
use std::path::PathBuf;

/// A loaded license policy configuration together with its index
///
/// `config` keeps every entry as written, including ones the index skipped,
/// so the policy listing shows the file faithfully.
#[derive(Debug, Clone)]
pub struct PolicySet {
    pub source: PathBuf,
    pub config: LicenseComplianceConfig,
    pub index: PolicyIndex,
}
